//! Order service: CRUD orchestration over the order repository

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::order::DEFAULT_STATUS;
use crate::domain::{DomainResult, Order, OrderRepository, OrderRequest};

/// Orchestrates repository calls for order create/read/update/delete.
///
/// Update is read-then-write with no version check; concurrent updates to the
/// same order are last-writer-wins.
pub struct OrderService {
    repository: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    /// All orders in storage order; empty when none exist.
    pub async fn get_all(&self) -> DomainResult<Vec<Order>> {
        self.repository.find_all().await
    }

    /// Absence is a normal outcome, not an error.
    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<Option<Order>> {
        self.repository.find_by_id(id).await
    }

    /// Create a new order with a store-assigned id and fresh timestamps.
    ///
    /// A missing `status` falls back to `"PENDING"`.
    pub async fn create(&self, request: OrderRequest) -> DomainResult<Order> {
        let now = Utc::now();
        let order = Order {
            // Storage assigns the real id on insert
            id: Uuid::nil(),
            customer_email: request.customer_email,
            description: request.description,
            total_amount: request.total_amount,
            status: request.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            created_at: now,
            updated_at: now,
        };
        let saved = self.repository.save(order).await?;
        info!("Order created: {}", saved.id);
        Ok(saved)
    }

    /// Partial update: only non-`None` request fields overwrite stored
    /// values; `updated_at` is always refreshed. Returns `None` when the id
    /// does not exist — update never upserts.
    pub async fn update(&self, id: Uuid, request: OrderRequest) -> DomainResult<Option<Order>> {
        let Some(mut existing) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(customer_email) = request.customer_email {
            existing.customer_email = Some(customer_email);
        }
        if let Some(description) = request.description {
            existing.description = Some(description);
        }
        if let Some(total_amount) = request.total_amount {
            existing.total_amount = Some(total_amount);
        }
        if let Some(status) = request.status {
            existing.status = status;
        }
        existing.updated_at = Utc::now();

        let updated = self.repository.update(existing).await?;
        info!("Order updated: {}", updated.id);
        Ok(Some(updated))
    }

    /// Existence is checked first so the boundary can distinguish "nothing
    /// to delete" (404) from "deleted" (204).
    pub async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        if !self.repository.exists_by_id(id).await? {
            return Ok(false);
        }
        self.repository.delete_by_id(id).await?;
        info!("Order deleted: {}", id);
        Ok(true)
    }
}

// ── Tests ──────────────────────────────────────────────────────
