//! Auth Session Entity
//!
//! Server-side record behind the session cookie.

use chrono::{DateTime, Duration, Utc};
use kernel::id::{SessionId, UserId};

/// Auth session entity
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub session_id: SessionId,
    pub user_id: UserId,
    /// Session expiration (Unix timestamp ms). Fixed at creation.
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
}

impl AuthSession {
    /// Create a new auth session
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: SessionId::new(),
            user_id,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Remaining lifetime in ms, never negative
    pub fn remaining_ms(&self) -> i64 {
        (self.expires_at_ms - Utc::now().timestamp_millis()).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_live() {
        let session = AuthSession::new(UserId::new(), Duration::days(7));
        assert!(!session.is_expired());
        let week_ms = Duration::days(7).num_milliseconds();
        assert!(session.remaining_ms() <= week_ms);
        assert!(session.remaining_ms() > week_ms - 5_000);
    }

    #[test]
    fn test_expired_session() {
        let mut session = AuthSession::new(UserId::new(), Duration::days(7));
        session.expires_at_ms = Utc::now().timestamp_millis() - 1;
        assert!(session.is_expired());
        assert_eq!(session.remaining_ms(), 0);
    }
}
