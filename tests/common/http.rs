//! HTTP helpers
//!
//! Drive the Axum router in-process through `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use sso::backend::routes::create_router;
use sso::backend::server::AppState;

use super::database::TestDatabase;

/// Build the full router over a test database
pub fn test_router(db: &TestDatabase) -> Router {
    create_router(AppState::new(db.auth_service()), &db.config.http)
}

/// POST a JSON body and return the status and the parsed response body
pub async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    send(router, request).await
}

/// Send a request and return the status and the parsed response body
///
/// Non-JSON bodies come back as `Value::String`.
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, body)
}
