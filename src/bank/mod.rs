//! Bank module containing account management and operation processing

pub mod account;
pub mod core;

pub use account::*;
pub use core::*;
