//! Order DTOs
//!
//! Wire format uses camelCase field names; `totalAmount` travels as an exact
//! decimal string, timestamps as ISO-8601 instants.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Order, OrderRequest};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer_email: Option<String>,
    pub description: Option<String>,
    pub total_amount: Option<Decimal>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            customer_email: o.customer_email,
            description: o.description,
            total_amount: o.total_amount,
            status: o.status,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

/// Request body for both POST (create) and PUT (partial update).
///
/// Absent fields mean "use the default" on create and "leave unchanged" on
/// update.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequestBody {
    pub customer_email: Option<String>,
    pub description: Option<String>,
    pub total_amount: Option<Decimal>,
    pub status: Option<String>,
}

impl From<OrderRequestBody> for OrderRequest {
    fn from(body: OrderRequestBody) -> Self {
        Self {
            customer_email: body.customer_email,
            description: body.description,
            total_amount: body.total_amount,
            status: body.status,
        }
    }
}
