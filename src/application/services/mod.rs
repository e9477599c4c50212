//! Application services

pub mod order;

pub use order::OrderService;
