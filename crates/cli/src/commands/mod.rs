//! CLI command implementations.

pub mod config;
pub mod order;
pub mod orders;
pub mod session;
