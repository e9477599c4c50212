//! Order domain entity and repository trait

pub mod model;
pub mod repository;

pub use model::{Order, OrderRequest, DEFAULT_STATUS};
pub use repository::OrderRepository;
