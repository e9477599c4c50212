//! User domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Registered user account.
///
/// Username and email are unique among non-deleted users. Roles are plain
/// strings stored in an auxiliary table. Users are created by a registration
/// path outside this crate's HTTP surface; the repository is the only
/// in-scope consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub enabled: bool,
    pub email_verified: bool,
    pub locked: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
