use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pingpong_api::config::ServerConfig;
use pingpong_api::router::build_router;
use pingpong_api::state::AppState;

/// Build a base-variant `ServerConfig` (no `api_version`, `/api/ping` only).
pub fn base_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        api_version: None,
    }
}

/// Build a versioned-variant `ServerConfig` (`api_version = "v3"`, both routes).
pub fn versioned_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        api_version: Some("v3".to_string()),
    }
}

/// Build the application router for the given config.
///
/// Goes through `build_router` so integration tests exercise the same
/// stack (routes, tracing layer, state) that production uses.
pub fn build_test_app(config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };
    build_router(state)
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a request with an arbitrary method and empty body.
pub async fn request(app: Router, method: &str, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
