//! Application Layer

pub mod connection;

pub use connection::ConnectionSession;
