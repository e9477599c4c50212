//! Order domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Status assigned to orders created without an explicit status
pub const DEFAULT_STATUS: &str = "PENDING";

/// Customer order
///
/// The identifier is assigned by the storage layer on insert; `Uuid::nil()`
/// marks a not-yet-persisted order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub customer_email: Option<String>,
    pub description: Option<String>,
    /// Total amount as an exact decimal (no float rounding)
    pub total_amount: Option<Decimal>,
    /// Never empty after creation; defaults to [`DEFAULT_STATUS`]
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Transient input for order creation and partial update.
///
/// Every field is optional: on create, a missing `status` falls back to
/// [`DEFAULT_STATUS`]; on update, `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct OrderRequest {
    pub customer_email: Option<String>,
    pub description: Option<String>,
    pub total_amount: Option<Decimal>,
    pub status: Option<String>,
}
