//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::OrderService;

use super::modules::orders::{self, dto::OrderRequestBody, dto::OrderResponse, AppState};
use super::modules::users::{self, dto::HelloWorldResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Orders
        orders::handlers::list_orders,
        orders::handlers::get_order,
        orders::handlers::create_order,
        orders::handlers::update_order,
        orders::handlers::delete_order,
        // Users (placeholders)
        users::handlers::hello_world,
        users::handlers::health,
    ),
    components(schemas(OrderResponse, OrderRequestBody, HelloWorldResponse)),
    tags(
        (name = "Orders", description = "Order CRUD endpoints"),
        (name = "Users", description = "Users service placeholder endpoints")
    )
)]
struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(order_service: Arc<OrderService>) -> Router {
    let state = AppState {
        orders: order_service,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let order_routes = Router::new()
        .route(
            "/",
            get(orders::handlers::list_orders).post(orders::handlers::create_order),
        )
        .route(
            "/{id}",
            get(orders::handlers::get_order)
                .put(orders::handlers::update_order)
                .delete(orders::handlers::delete_order),
        )
        .with_state(state);

    let user_routes = Router::new()
        .route("/", get(users::handlers::hello_world))
        .route("/hello", get(users::handlers::health));

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .nest("/api/orders", order_routes)
        .nest("/users-api", user_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::infrastructure::storage::InMemoryOrderRepository;

    fn router() -> Router {
        let repository = Arc::new(InMemoryOrderRepository::new());
        create_api_router(Arc::new(OrderService::new(repository)))
    }

    async fn body_json(body: Body) -> Value {
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn list_orders_empty_is_200_with_empty_array() {
        let app = router();
        let response = app.oneshot(get_request("/api/orders")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response.into_body()).await, json!([]));
    }

    #[tokio::test]
    async fn create_order_returns_201_with_camel_case_body() {
        let app = router();
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/orders",
                json!({
                    "customerEmail": "a@b.com",
                    "description": "x",
                    "totalAmount": "99.99",
                    "status": null
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["customerEmail"], "a@b.com");
        assert_eq!(body["description"], "x");
        assert_eq!(body["totalAmount"], "99.99");
        assert_eq!(body["status"], "PENDING");
        assert!(body["id"].as_str().is_some());
        assert_eq!(body["createdAt"], body["updatedAt"]);
    }

    #[tokio::test]
    async fn create_order_keeps_supplied_status() {
        let app = router();
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/orders",
                json!({"status": "SHIPPED"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["status"], "SHIPPED");
    }

    #[tokio::test]
    async fn get_order_missing_id_is_404() {
        let app = router();
        let response = app
            .oneshot(get_request(&format!("/api/orders/{}", Uuid::new_v4())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn get_order_returns_created_resource() {
        let app = router();
        let created = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/orders",
                json!({"description": "keep me"}),
            ))
            .await
            .unwrap();
        let created = body_json(created.into_body()).await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(get_request(&format!("/api/orders/{}", id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["id"], id.as_str());
        assert_eq!(body["description"], "keep me");
    }

    #[tokio::test]
    async fn update_order_merges_partial_body() {
        let app = router();
        let created = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/orders",
                json!({
                    "customerEmail": "a@b.com",
                    "description": "x",
                    "totalAmount": "10.00"
                }),
            ))
            .await
            .unwrap();
        let created = body_json(created.into_body()).await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/api/orders/{}", id),
                json!({
                    "status": "COMPLETED",
                    "customerEmail": null,
                    "description": null,
                    "totalAmount": null
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["status"], "COMPLETED");
        assert_eq!(body["customerEmail"], "a@b.com");
        assert_eq!(body["description"], "x");
        assert_eq!(body["totalAmount"], "10.00");
    }

    #[tokio::test]
    async fn update_order_missing_id_is_404() {
        let app = router();
        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/api/orders/{}", Uuid::new_v4()),
                json!({"status": "COMPLETED"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_order_is_204_then_404() {
        let app = router();
        let created = app
            .clone()
            .oneshot(json_request("POST", "/api/orders", json!({})))
            .await
            .unwrap();
        let created = body_json(created.into_body()).await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/orders/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/orders/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn users_root_returns_greeting_payload() {
        let app = router();
        let response = app.oneshot(get_request("/users-api")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response.into_body()).await,
            json!({"helloWorldMsg": "Hello World!!!"})
        );
    }

    #[tokio::test]
    async fn users_hello_returns_literal_ok() {
        let app = router();
        let response = app.oneshot(get_request("/users-api/hello")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }
}
