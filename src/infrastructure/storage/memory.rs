//! In-memory repositories for development and testing

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Order, OrderRepository, User, UserRepository};

/// In-memory order repository backed by a concurrent map
pub struct InMemoryOrderRepository {
    orders: DashMap<Uuid, Order>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: DashMap::new(),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_all(&self) -> DomainResult<Vec<Order>> {
        Ok(self.orders.iter().map(|o| o.clone()).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Order>> {
        Ok(self.orders.get(&id).map(|o| o.clone()))
    }

    async fn save(&self, mut order: Order) -> DomainResult<Order> {
        order.id = Uuid::new_v4();
        self.orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn update(&self, order: Order) -> DomainResult<Order> {
        if !self.orders.contains_key(&order.id) {
            return Err(DomainError::NotFound {
                entity: "Order",
                field: "id",
                value: order.id.to_string(),
            });
        }
        self.orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<()> {
        self.orders.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: Uuid) -> DomainResult<bool> {
        Ok(self.orders.contains_key(&id))
    }
}

/// In-memory user repository backed by a concurrent map
pub struct InMemoryUserRepository {
    users: DashMap<Uuid, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.iter().map(|u| u.clone()).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.clone()))
    }

    async fn save(&self, mut user: User) -> DomainResult<User> {
        user.id = Uuid::new_v4();
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        if !self.users.contains_key(&user.id) {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: user.id.to_string(),
            });
        }
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<()> {
        self.users.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: Uuid) -> DomainResult<bool> {
        Ok(self.users.contains_key(&id))
    }
}

// ── Tests ──────────────────────────────────────────────────────
