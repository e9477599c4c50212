//! User domain entity and repository trait

pub mod model;
pub mod repository;

pub use model::User;
pub use repository::UserRepository;
