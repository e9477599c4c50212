//! Order repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Order;
use crate::domain::DomainResult;

/// Persistence operations for orders.
///
/// `save` inserts a new row and assigns a fresh identifier (any incoming id
/// is ignored); `update` writes back an existing row.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Order>>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Order>>;
    async fn save(&self, order: Order) -> DomainResult<Order>;
    async fn update(&self, order: Order) -> DomainResult<Order>;
    async fn delete_by_id(&self, id: Uuid) -> DomainResult<()>;
    async fn exists_by_id(&self, id: Uuid) -> DomainResult<bool>;
}
