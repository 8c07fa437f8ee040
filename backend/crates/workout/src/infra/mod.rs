//! Infrastructure Layer
//!
//! Repository implementations.

pub mod memory;
pub mod postgres;

pub use memory::MemoryWorkoutRepository;
pub use postgres::PgWorkoutRepository;
