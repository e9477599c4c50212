//! Application layer: business logic and services

pub mod services;

pub use services::OrderService;
