//! Storage implementations that do not require a database

pub mod memory;

pub use memory::{InMemoryOrderRepository, InMemoryUserRepository};
