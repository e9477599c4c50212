//! Order entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Order row model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique order ID, assigned by the repository on insert
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub customer_email: Option<String>,

    /// Free-text description
    pub description: Option<String>,

    /// Total amount as an exact decimal
    pub total_amount: Option<Decimal>,

    /// Order status (free text, "PENDING" by default)
    pub status: String,

    /// Timestamps are managed by the service layer, not the store
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
