//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, Base64, HMAC-SHA256)
//! - Password hashing (Argon2id)
//! - Cookie management
//! - Request latency metrics

pub mod cookie;
pub mod crypto;
pub mod metrics;
pub mod password;
