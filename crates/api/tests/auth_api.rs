//! Integration tests for authentication: token enforcement on protected
//! routes and register-input validation.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get_with_auth, send_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Token enforcement
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_authorization_header_is_401() {
    let app = common::build_test_app();
    let response = common::get(app, "/api/v1/leads").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn non_bearer_authorization_is_401() {
    let app = common::build_test_app();
    let response = get_with_auth(app, "/api/v1/leads", "Basic dXNlcjpwYXNz").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_401() {
    let app = common::build_test_app();
    let response = get_with_auth(app, "/api/v1/leads", "Bearer not-a-real-token").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Invalid or expired token");
}

#[tokio::test]
async fn catalog_routes_require_auth_too() {
    for uri in ["/api/v1/products", "/api/v1/services"] {
        let app = common::build_test_app();
        let response = common::get(app, uri).await;
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{uri} must be auth-gated"
        );
    }
}

// ---------------------------------------------------------------------------
// Register validation (runs before any storage access)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn register_rejects_malformed_email() {
    let app = common::build_test_app();
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        json!({
            "email": "not-an-email",
            "password": "long-enough-password",
            "full_name": "Priya Sharma"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["details"]["email"].is_array());
}

#[tokio::test]
async fn register_rejects_short_password() {
    let app = common::build_test_app();
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        json!({
            "email": "priya@example.com",
            "password": "short",
            "full_name": "Priya Sharma"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
