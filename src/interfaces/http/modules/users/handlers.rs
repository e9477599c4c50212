//! Users API handlers
//!
//! The users service exposes only static placeholder endpoints; its real
//! business surface (registration) lives outside this crate.

use axum::Json;

use super::dto::HelloWorldResponse;

#[utoipa::path(
    get,
    path = "/users-api",
    tag = "Users",
    responses(
        (status = 200, description = "Greeting payload", body = HelloWorldResponse)
    )
)]
pub async fn hello_world() -> Json<HelloWorldResponse> {
    Json(HelloWorldResponse {
        hello_world_msg: "Hello World!!!".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/users-api/hello",
    tag = "Users",
    responses(
        (status = 200, description = "Health check", body = String)
    )
)]
pub async fn health() -> &'static str {
    "OK"
}
