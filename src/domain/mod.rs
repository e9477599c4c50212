//! Domain layer: entities, repository traits and errors

pub mod error;
pub mod order;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use order::{Order, OrderRepository, OrderRequest};
pub use user::{User, UserRepository};
