//! SeaORM implementation of OrderRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use super::db_err;
use crate::domain::{DomainError, DomainResult, Order, OrderRepository};
use crate::infrastructure::database::entities::order;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(m: order::Model) -> Order {
    Order {
        id: m.id,
        customer_email: m.customer_email,
        description: m.description,
        total_amount: m.total_amount,
        status: m.status,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

// ── SeaOrmOrderRepository ───────────────────────────────────────

pub struct SeaOrmOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn find_all(&self) -> DomainResult<Vec<Order>> {
        let models = order::Entity::find().all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Order>> {
        let model = order::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn save(&self, o: Order) -> DomainResult<Order> {
        // The incoming id is a sentinel; the store assigns the real one.
        let model = order::ActiveModel {
            id: Set(Uuid::new_v4()),
            customer_email: Set(o.customer_email),
            description: Set(o.description),
            total_amount: Set(o.total_amount),
            status: Set(o.status),
            created_at: Set(o.created_at),
            updated_at: Set(o.updated_at),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        Ok(entity_to_domain(result))
    }

    async fn update(&self, o: Order) -> DomainResult<Order> {
        let existing = order::Entity::find_by_id(o.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Order",
                field: "id",
                value: o.id.to_string(),
            });
        }

        let model = order::ActiveModel {
            id: Set(o.id),
            customer_email: Set(o.customer_email),
            description: Set(o.description),
            total_amount: Set(o.total_amount),
            status: Set(o.status),
            created_at: Set(o.created_at),
            updated_at: Set(o.updated_at),
        };
        let result = model.update(&self.db).await.map_err(db_err)?;
        Ok(entity_to_domain(result))
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<()> {
        order::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn exists_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let model = order::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.is_some())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    use super::*;
    use crate::infrastructure::database::migrator::Migrator;

    async fn repository() -> SeaOrmOrderRepository {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmOrderRepository::new(db)
    }

    fn sample_order() -> Order {
        let now = Utc::now();
        Order {
            id: Uuid::nil(),
            customer_email: Some("a@b.com".into()),
            description: Some("x".into()),
            total_amount: Some(Decimal::new(9999, 2)),
            status: "PENDING".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn save_assigns_a_fresh_id() {
        let repo = repository().await;
        let saved = repo.save(sample_order()).await.unwrap();

        assert_ne!(saved.id, Uuid::nil());
        assert_eq!(saved.status, "PENDING");
        assert_eq!(saved.total_amount, Some(Decimal::new(9999, 2)));
    }

    #[tokio::test]
    async fn find_by_id_roundtrips_the_row() {
        let repo = repository().await;
        let saved = repo.save(sample_order()).await.unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found.customer_email.as_deref(), Some("a@b.com"));
        assert_eq!(found.total_amount, Some(Decimal::new(9999, 2)));
    }

    #[tokio::test]
    async fn update_writes_back_fields() {
        let repo = repository().await;
        let mut saved = repo.save(sample_order()).await.unwrap();

        saved.status = "COMPLETED".into();
        saved.updated_at = Utc::now();
        let updated = repo.update(saved.clone()).await.unwrap();

        assert_eq!(updated.status, "COMPLETED");
        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found.status, "COMPLETED");
    }

    #[tokio::test]
    async fn update_missing_row_is_not_found() {
        let repo = repository().await;
        let mut order = sample_order();
        order.id = Uuid::new_v4();

        let err = repo.update(order).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Order", .. }));
    }

    #[tokio::test]
    async fn delete_and_exists() {
        let repo = repository().await;
        let saved = repo.save(sample_order()).await.unwrap();

        assert!(repo.exists_by_id(saved.id).await.unwrap());
        repo.delete_by_id(saved.id).await.unwrap();
        assert!(!repo.exists_by_id(saved.id).await.unwrap());
        assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_all_empty_returns_empty_vec() {
        let repo = repository().await;
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
