//! User Entity
//!
//! A registered athlete. Created on registration only.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_name::UserName, user_password::UserPassword};

/// User entity
///
/// `password_hash` never leaves the auth crate; responses are built from
/// [`User::user_id`], [`User::user_name`] and [`User::email`] only.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique display handle
    pub user_name: UserName,
    /// Unique login identifier (canonical form)
    pub email: Email,
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(user_name: UserName, email: Email, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            user_name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
