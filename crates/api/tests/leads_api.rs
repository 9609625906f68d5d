//! Integration tests for the leads resource: DTO validation and error
//! envelopes, exercised through the full router and middleware stack.

mod common;

use assert_matches::assert_matches;
use axum::http::{Method, StatusCode};
use common::{bearer_for, body_json, get_with_auth, send_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Create validation (rejected before any storage access)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_rejects_out_of_range_score_with_details() {
    let app = common::build_test_app();
    let auth = bearer_for(1, "priya@example.com");

    let response = send_json(
        app,
        Method::POST,
        "/api/v1/leads",
        Some(&auth),
        json!({
            "full_name": "Priya Sharma",
            "email": "priya@example.com",
            "address": "12 Lake Road",
            "lead_score": 101
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_matches!(body["details"]["lead_score"], serde_json::Value::Array(_));
}

#[tokio::test]
async fn create_rejects_blank_required_fields() {
    let app = common::build_test_app();
    let auth = bearer_for(1, "priya@example.com");

    let response = send_json(
        app,
        Method::POST,
        "/api/v1/leads",
        Some(&auth),
        json!({
            "full_name": "",
            "email": "priya@example.com",
            "address": ""
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"]["full_name"].is_array());
    assert!(body["details"]["address"].is_array());
}

#[tokio::test]
async fn create_rejects_negative_manual_amount() {
    let app = common::build_test_app();
    let auth = bearer_for(1, "priya@example.com");

    let response = send_json(
        app,
        Method::POST,
        "/api/v1/leads",
        Some(&auth),
        json!({
            "full_name": "Priya Sharma",
            "email": "priya@example.com",
            "address": "12 Lake Road",
            "potential_amount": "-10.00"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"]["potential_amount"].is_array());
}

// ---------------------------------------------------------------------------
// Storage failure surfaces the sanitized 500 envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_storage_returns_internal_error_envelope() {
    let app = common::build_test_app();
    let auth = bearer_for(1, "priya@example.com");

    // Listing passes auth and goes straight to the (unreachable) pool.
    let response = get_with_auth(app, "/api/v1/leads", &auth).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Filter query parameters are accepted on the list route
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_accepts_status_and_type_filters() {
    let app = common::build_test_app();
    let auth = bearer_for(1, "priya@example.com");

    // The filter tokens deserialize before the storage call; a bad token
    // would be a 400 from the query extractor instead.
    let response = get_with_auth(
        app,
        "/api/v1/leads?status=Closed&lead_type=Agent",
        &auth,
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
