//! Workout Configuration

use crate::domain::value_object::Page;

#[derive(Debug, Clone)]
pub struct WorkoutConfig {
    /// Page size when the caller gives none
    pub default_page_size: i64,
    /// Upper bound on any requested page size
    pub max_page_size: i64,
    /// Number of most recent sessions the insights look at
    pub insights_window: i64,
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            default_page_size: 100,
            max_page_size: 1000,
            insights_window: 1000,
        }
    }
}

impl WorkoutConfig {
    pub fn page(&self, limit: Option<i64>, skip: Option<i64>) -> Page {
        Page::new(limit, skip, self.default_page_size, self.max_page_size)
    }
}
