//! API Server
//!
//! Router assembly, configuration and operational endpoints. The binary in
//! `main.rs` adds the database, CORS, tracing and the listener.

pub mod app;
pub mod config;
pub mod handlers;
pub mod metrics;

pub use app::{AppComponents, build_router};
pub use config::ServerConfig;
