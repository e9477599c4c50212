//! SeaORM implementation of UserRepository
//!
//! Roles are an element collection in the `user_roles` table: loaded with the
//! user, replaced wholesale on update.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::db_err;
use crate::domain::{DomainError, DomainResult, User, UserRepository};
use crate::infrastructure::database::entities::{user, user_role};

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(u: user::Model, roles: Vec<user_role::Model>) -> User {
    User {
        id: u.id,
        username: u.username,
        email: u.email,
        password_hash: u.password_hash,
        first_name: u.first_name,
        last_name: u.last_name,
        phone: u.phone,
        avatar_url: u.avatar_url,
        enabled: u.enabled,
        email_verified: u.email_verified,
        locked: u.locked,
        last_login_at: u.last_login_at,
        roles: roles.into_iter().map(|r| r.role).collect(),
        created_at: u.created_at,
        updated_at: u.updated_at,
        deleted_at: u.deleted_at,
    }
}

fn domain_to_active(u: &User) -> user::ActiveModel {
    user::ActiveModel {
        id: Set(u.id),
        username: Set(u.username.clone()),
        email: Set(u.email.clone()),
        password_hash: Set(u.password_hash.clone()),
        first_name: Set(u.first_name.clone()),
        last_name: Set(u.last_name.clone()),
        phone: Set(u.phone.clone()),
        avatar_url: Set(u.avatar_url.clone()),
        enabled: Set(u.enabled),
        email_verified: Set(u.email_verified),
        locked: Set(u.locked),
        last_login_at: Set(u.last_login_at),
        created_at: Set(u.created_at),
        updated_at: Set(u.updated_at),
        deleted_at: Set(u.deleted_at),
    }
}

// ── SeaOrmUserRepository ────────────────────────────────────────

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn insert_roles(&self, user_id: Uuid, roles: &[String]) -> DomainResult<()> {
        for role in roles {
            let model = user_role::ActiveModel {
                user_id: Set(user_id),
                role: Set(role.clone()),
            };
            model.insert(&self.db).await.map_err(db_err)?;
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let rows = user::Entity::find()
            .find_with_related(user_role::Entity)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows
            .into_iter()
            .map(|(u, roles)| entity_to_domain(u, roles))
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        let Some(model) = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };
        let roles = model
            .find_related(user_role::Entity)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(Some(entity_to_domain(model, roles)))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let Some(model) = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };
        let roles = model
            .find_related(user_role::Entity)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(Some(entity_to_domain(model, roles)))
    }

    async fn save(&self, u: User) -> DomainResult<User> {
        let id = Uuid::new_v4();
        let mut model = domain_to_active(&u);
        model.id = Set(id);
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        self.insert_roles(id, &u.roles).await?;
        Ok(entity_to_domain(
            inserted,
            u.roles
                .iter()
                .map(|r| user_role::Model {
                    user_id: id,
                    role: r.clone(),
                })
                .collect(),
        ))
    }

    async fn update(&self, u: User) -> DomainResult<User> {
        let existing = user::Entity::find_by_id(u.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: u.id.to_string(),
            });
        }

        let updated = domain_to_active(&u).update(&self.db).await.map_err(db_err)?;

        // Replace the role collection wholesale
        user_role::Entity::delete_many()
            .filter(user_role::Column::UserId.eq(u.id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        self.insert_roles(u.id, &u.roles).await?;

        Ok(entity_to_domain(
            updated,
            u.roles
                .iter()
                .map(|r| user_role::Model {
                    user_id: u.id,
                    role: r.clone(),
                })
                .collect(),
        ))
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<()> {
        user_role::Entity::delete_many()
            .filter(user_role::Column::UserId.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn exists_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let model = user::Entity::find_by_id(id)
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
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    use super::*;
    use crate::infrastructure::database::migrator::Migrator;

    async fn repository() -> SeaOrmUserRepository {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmUserRepository::new(db)
    }

    fn sample_user(username: &str) -> User {
        let now = Utc::now();
        User {
            id: Uuid::nil(),
            username: username.into(),
            email: format!("{}@example.com", username),
            password_hash: "$2b$12$hash".into(),
            first_name: Some("Ada".into()),
            last_name: None,
            phone: None,
            avatar_url: None,
            enabled: true,
            email_verified: false,
            locked: false,
            last_login_at: None,
            roles: vec!["USER".into(), "ADMIN".into()],
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn save_persists_user_and_roles() {
        let repo = repository().await;
        let saved = repo.save(sample_user("ada")).await.unwrap();

        assert_ne!(saved.id, Uuid::nil());
        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found.username, "ada");
        let mut roles = found.roles.clone();
        roles.sort();
        assert_eq!(roles, vec!["ADMIN".to_string(), "USER".to_string()]);
    }

    #[tokio::test]
    async fn find_by_username_matches_exactly() {
        let repo = repository().await;
        repo.save(sample_user("grace")).await.unwrap();

        assert!(repo.find_by_username("grace").await.unwrap().is_some());
        assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let repo = repository().await;
        repo.save(sample_user("dup")).await.unwrap();

        let mut second = sample_user("dup");
        second.email = "other@example.com".into();
        let err = repo.save(second).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }

    #[tokio::test]
    async fn update_replaces_role_collection() {
        let repo = repository().await;
        let mut saved = repo.save(sample_user("roles")).await.unwrap();

        saved.roles = vec!["SUPPORT".into()];
        saved.updated_at = Utc::now();
        repo.update(saved.clone()).await.unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found.roles, vec!["SUPPORT".to_string()]);
    }

    #[tokio::test]
    async fn soft_delete_marker_roundtrips() {
        let repo = repository().await;
        let mut saved = repo.save(sample_user("gone")).await.unwrap();

        saved.deleted_at = Some(Utc::now());
        repo.update(saved.clone()).await.unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert!(found.is_deleted());
    }

    #[tokio::test]
    async fn delete_removes_user_and_roles() {
        let repo = repository().await;
        let saved = repo.save(sample_user("bye")).await.unwrap();

        repo.delete_by_id(saved.id).await.unwrap();
        assert!(!repo.exists_by_id(saved.id).await.unwrap());
        assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
    }
}
