//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - PostgreSQL and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration with username + email + password
//! - Email + password login
//! - Server-side sessions referenced by an HMAC-signed cookie
//! - Middleware that resolves the caller for other bounded contexts
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Login failures are indistinguishable (unknown email vs wrong password)
//! - Sessions expire a fixed time after creation

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::MemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::router::{auth_router, auth_router_generic};

// Cross-context access to the session middleware
pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
