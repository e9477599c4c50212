//! User DTOs

use serde::Serialize;
use utoipa::ToSchema;

/// Fixed greeting payload returned by the users root endpoint
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HelloWorldResponse {
    pub hello_world_msg: String,
}
