//! Utility modules: validation helpers and the in-memory storage backend

pub mod memory_storage;
pub mod validation;

pub use memory_storage::*;
pub use validation::*;
