//! Order REST API handlers
//!
//! Translate HTTP verbs to `OrderService` calls and service results to
//! status codes. Absence maps to 404 with an empty body; storage failures
//! surface as 500.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::error;
use uuid::Uuid;

use super::dto::{OrderRequestBody, OrderResponse};
use crate::application::OrderService;
use crate::domain::DomainError;

/// Shared state for the order routes
#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<OrderService>,
}

fn storage_error(e: DomainError) -> StatusCode {
    error!("Order storage failure: {}", e);
    StatusCode::INTERNAL_SERVER_ERROR
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "Order list (empty array when none exist)", body = Vec<OrderResponse>)
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, StatusCode> {
    let orders = state.orders.get_all().await.map_err(storage_error)?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = OrderResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderResponse>, StatusCode> {
    match state.orders.get_by_id(id).await.map_err(storage_error)? {
        Some(order) => Ok(Json(order.into())),
        None => Err(StatusCode::NOT_FOUND),
    }
}

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Orders",
    request_body = OrderRequestBody,
    responses(
        (status = 201, description = "Created", body = OrderResponse)
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<OrderRequestBody>,
) -> Result<(StatusCode, Json<OrderResponse>), StatusCode> {
    let order = state
        .orders
        .create(body.into())
        .await
        .map_err(storage_error)?;
    Ok((StatusCode::CREATED, Json(order.into())))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "Order ID")),
    request_body = OrderRequestBody,
    responses(
        (status = 200, description = "Updated", body = OrderResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<OrderRequestBody>,
) -> Result<Json<OrderResponse>, StatusCode> {
    match state
        .orders
        .update(id, body.into())
        .await
        .map_err(storage_error)?
    {
        Some(order) => Ok(Json(order.into())),
        None => Err(StatusCode::NOT_FOUND),
    }
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    match state.orders.delete(id).await {
        Ok(true) => StatusCode::NO_CONTENT,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => storage_error(e),
    }
}
