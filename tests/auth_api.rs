//! HTTP API integration tests
//!
//! Drives the full router (layers, handlers, service, SQLite) in-process.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use common::*;
use sso::backend::auth::decode_claims;

#[tokio::test]
async fn test_register_login_is_admin() {
    let db = TestDatabase::new().await;
    let router = test_router(&db);
    let email = unique_email();

    let (status, body) = post_json(
        &router,
        "/api/auth/register",
        json!({ "email": email, "password": "secret" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let user_id = body["user_id"].as_i64().expect("user_id in response");
    assert!(user_id > 0);

    let (status, body) = post_json(
        &router,
        "/api/auth/login",
        json!({ "email": email, "password": "secret", "app_id": APP_ID }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().expect("token in response");

    let claims = decode_claims(token, APP_SECRET).expect("token verifies with app secret");
    assert_eq!(claims.user_id, user_id);
    assert_eq!(claims.email, email);
    assert_eq!(claims.app_id, APP_ID);

    let (status, body) = post_json(&router, "/api/auth/is-admin", json!({ "user_id": user_id })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "is_admin": false }));
}

#[tokio::test]
async fn test_is_admin_true_for_promoted_user() {
    let db = TestDatabase::new().await;
    let router = test_router(&db);

    let (_, body) = post_json(
        &router,
        "/api/auth/register",
        json!({ "email": unique_email(), "password": "secret" }),
    )
    .await;
    let user_id = body["user_id"].as_i64().expect("user_id in response");
    make_admin(&db.storage, user_id).await;

    let (status, body) = post_json(&router, "/api/auth/is-admin", json!({ "user_id": user_id })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "is_admin": true }));
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let db = TestDatabase::new().await;
    let router = test_router(&db);
    let email = unique_email();
    let request = json!({ "email": email, "password": "secret" });

    let (status, _) = post_json(&router, "/api/auth/register", request.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_json(&router, "/api/auth/register", request).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "user already exists");
    assert_eq!(body["status"], 409);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let db = TestDatabase::new().await;
    let router = test_router(&db);
    let email = unique_email();

    post_json(
        &router,
        "/api/auth/register",
        json!({ "email": email, "password": "secret" }),
    )
    .await;

    let (wrong_status, wrong_body) = post_json(
        &router,
        "/api/auth/login",
        json!({ "email": email, "password": "not-it", "app_id": APP_ID }),
    )
    .await;
    let (unknown_status, unknown_body) = post_json(
        &router,
        "/api/auth/login",
        json!({ "email": unique_email(), "password": "secret", "app_id": APP_ID }),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["error"], "invalid email or password");
}

#[tokio::test]
async fn test_login_unknown_app() {
    let db = TestDatabase::new().await;
    let router = test_router(&db);
    let email = unique_email();

    post_json(
        &router,
        "/api/auth/register",
        json!({ "email": email, "password": "secret" }),
    )
    .await;

    let (status, body) = post_json(
        &router,
        "/api/auth/login",
        json!({ "email": email, "password": "secret", "app_id": 999 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid app_id");
}

#[tokio::test]
async fn test_is_admin_unknown_user() {
    let db = TestDatabase::new().await;
    let router = test_router(&db);

    let (status, body) = post_json(&router, "/api/auth/is-admin", json!({ "user_id": 4242 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "user not found");
}

#[tokio::test]
async fn test_missing_fields_are_rejected() {
    let db = TestDatabase::new().await;
    let router = test_router(&db);

    let cases = [
        ("/api/auth/register", json!({ "password": "secret" }), "email is required"),
        ("/api/auth/register", json!({ "email": "a@b.c" }), "password is required"),
        (
            "/api/auth/login",
            json!({ "email": "a@b.c", "password": "secret" }),
            "app_id is required",
        ),
        ("/api/auth/login", json!({ "app_id": APP_ID }), "email is required"),
        ("/api/auth/is-admin", json!({}), "user_id is required"),
    ];

    for (uri, request, message) in cases {
        let (status, body) = post_json(&router, uri, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], message, "{uri}");
    }
}

#[tokio::test]
async fn test_health() {
    let db = TestDatabase::new().await;
    let router = test_router(&db);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("Failed to build request");
    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("ok"));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let db = TestDatabase::new().await;
    let router = test_router(&db);

    let request = Request::builder()
        .uri("/api/auth/logout")
        .body(Body::empty())
        .expect("Failed to build request");
    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

fn raw_post(uri: &str, content_type: Option<&str>, body: &'static str) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    builder.body(Body::from(body)).expect("Failed to build request")
}

#[tokio::test]
async fn test_unreadable_bodies_use_json_error_shape() {
    let db = TestDatabase::new().await;
    let router = test_router(&db);

    let cases = [
        (
            raw_post(
                "/api/auth/login",
                Some("application/json"),
                r#"{"email":"a@b.c","password":"secret","app_id":"abc"}"#,
            ),
            "invalid request body",
        ),
        (
            raw_post("/api/auth/login", Some("application/json"), "{not json"),
            "malformed JSON body",
        ),
        (
            raw_post(
                "/api/auth/register",
                Some("text/plain"),
                r#"{"email":"a@b.c","password":"secret"}"#,
            ),
            "expected an application/json body",
        ),
        (
            raw_post("/api/auth/is-admin", None, r#"{"user_id":1}"#),
            "expected an application/json body",
        ),
    ];

    for (request, message) in cases {
        let uri = request.uri().to_string();
        let (status, body) = send(&router, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], message, "{uri}");
        assert_eq!(body["status"], 400, "{uri}");
    }
}

#[tokio::test]
async fn test_rejected_body_does_not_echo_parser_detail() {
    let db = TestDatabase::new().await;
    let router = test_router(&db);

    let request = raw_post(
        "/api/auth/login",
        Some("application/json"),
        r#"{"email":"a@b.c","password":"secret","app_id":"abc"}"#,
    );
    let (_, body) = send(&router, request).await;

    let rendered = body.to_string();
    assert!(!rendered.contains("i64"), "{rendered}");
    assert!(!rendered.contains("deserialize"), "{rendered}");
}

mod slow {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use sso::backend::auth::{AuthService, PasswordHasher};
    use sso::backend::storage::{AppProvider, StorageError, UserProvider, UserSaver};
    use sso::shared::{App, User};

    /// Storage that takes longer to answer than any request timeout in these tests
    pub struct SlowStorage;

    const DELAY: Duration = Duration::from_secs(30);

    #[async_trait]
    impl UserSaver for SlowStorage {
        async fn save_user(&self, _: &str, _: &[u8]) -> Result<i64, StorageError> {
            tokio::time::sleep(DELAY).await;
            Ok(1)
        }
    }

    #[async_trait]
    impl UserProvider for SlowStorage {
        async fn user(&self, _: &str) -> Result<User, StorageError> {
            tokio::time::sleep(DELAY).await;
            Err(StorageError::UserNotFound)
        }

        async fn is_admin(&self, _: i64) -> Result<bool, StorageError> {
            tokio::time::sleep(DELAY).await;
            Ok(false)
        }
    }

    #[async_trait]
    impl AppProvider for SlowStorage {
        async fn app(&self, _: i64) -> Result<App, StorageError> {
            tokio::time::sleep(DELAY).await;
            Err(StorageError::AppNotFound)
        }
    }

    pub fn auth_service() -> AuthService {
        let storage = Arc::new(SlowStorage);
        AuthService::new(
            storage.clone(),
            storage.clone(),
            storage,
            PasswordHasher::new(4).expect("Failed to build hasher"),
            Duration::from_secs(3600),
        )
    }
}

#[tokio::test]
async fn test_slow_request_times_out() {
    use sso::backend::routes::create_router;
    use sso::backend::server::AppState;
    use sso::shared::HttpConfig;

    let http = HttpConfig {
        port: 0,
        timeout_secs: 1,
    };
    let router = create_router(AppState::new(slow::auth_service()), &http);

    let started = std::time::Instant::now();
    let (status, _) = post_json(
        &router,
        "/api/auth/login",
        json!({ "email": "a@b.c", "password": "secret", "app_id": APP_ID }),
    )
    .await;

    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert!(started.elapsed() < std::time::Duration::from_secs(10));
}
