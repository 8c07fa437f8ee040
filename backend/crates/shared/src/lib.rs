//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate holds the vocabulary every bounded context agrees on:
//! - The application error type and its HTTP mapping
//! - Typed identifiers for users, sessions and workouts
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
