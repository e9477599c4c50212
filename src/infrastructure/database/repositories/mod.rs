//! SeaORM repository implementations

pub mod order_repository;
pub mod user_repository;

pub use order_repository::SeaOrmOrderRepository;
pub use user_repository::SeaOrmUserRepository;

use crate::domain::DomainError;

pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}
