//! Pagination window for listing workouts

/// Normalized `limit`/`skip` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub skip: i64,
}

impl Page {
    /// Missing or non-positive `limit` falls back to `default_limit`, and the
    /// result is capped at `max_limit`. Missing or negative `skip` is 0.
    pub fn new(limit: Option<i64>, skip: Option<i64>, default_limit: i64, max_limit: i64) -> Self {
        let limit = match limit {
            Some(l) if l > 0 => l.min(max_limit),
            _ => default_limit.min(max_limit),
        };
        let skip = skip.unwrap_or(0).max(0);
        Self { limit, skip }
    }
}
