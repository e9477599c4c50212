//! # Commerce API
//!
//! Minimal CRUD microservices (Users, Orders) over a relational store.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, repository traits and errors
//! - **application**: Business logic and services
//! - **infrastructure**: External concerns (database, storage)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Cross-cutting helpers (graceful shutdown)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use infrastructure::database::{init_database, DatabaseConfig};
pub use interfaces::http::create_api_router;
