//! Authentication API integration tests
//!
//! Tests for the registration and login endpoints.

use axum::http::StatusCode;
use serde_json::json;

use customer_search::backend::auth::UserStore;

use crate::assert_error_response;
use crate::common::{create_test_user, login, register, TestApp};

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/register")
        .json(&json!({ "username": "alice", "password": "password123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({ "message": "user registered successfully" }));

    let stored = app.store.find_by_username("alice").await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "password123");
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/register")
        .json(&json!({ "username": "alice" }))
        .await;

    assert_error_response!(
        response,
        StatusCode::BAD_REQUEST,
        "username is required and password is required"
    );
}

#[tokio::test]
async fn test_register_malformed_body() {
    let app = TestApp::new().await;

    let response = app.server.post("/register").text("{not json").await;
    assert_error_response!(response, StatusCode::BAD_REQUEST, "bad request");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new().await;
    register(&app.server, "alice", "password123").await;

    let response = app
        .server
        .post("/register")
        .json(&json!({ "username": "alice", "password": "different" }))
        .await;

    assert_error_response!(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal server error"
    );
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice").await;

    let claims = app.tokens.validate(&user.token).unwrap();
    let stored = app.store.find_by_username(&user.username).await.unwrap().unwrap();
    assert_eq!(claims.user_id(), stored.id);

    let again = login(&app.server, &user.username, &user.password).await;
    assert_eq!(app.tokens.validate(&again).unwrap().user_id(), stored.id);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    register(&app.server, "alice", "password123").await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "username": "alice", "password": "wrongpassword" }))
        .await;

    assert_error_response!(response, StatusCode::UNAUTHORIZED, "invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_user_matches_wrong_password() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "username": "nobody", "password": "password123" }))
        .await;

    assert_error_response!(response, StatusCode::UNAUTHORIZED, "invalid credentials");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "username": "", "password": "" }))
        .await;

    assert_error_response!(
        response,
        StatusCode::BAD_REQUEST,
        "username is required and password is required"
    );
}

#[tokio::test]
async fn test_login_without_signing_key() {
    let app = TestApp::with_secret(None).await;
    register(&app.server, "alice", "password123").await;

    let response = app
        .server
        .post("/login")
        .json(&json!({ "username": "alice", "password": "password123" }))
        .await;

    assert_error_response!(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal server error"
    );
}

#[tokio::test]
async fn test_each_login_issues_a_valid_token() {
    let app = TestApp::new().await;
    register(&app.server, "alice", "password123").await;

    let first = login(&app.server, "alice", "password123").await;
    let second = login(&app.server, "alice", "password123").await;

    assert!(app.tokens.validate(&first).is_ok());
    assert!(app.tokens.validate(&second).is_ok());
}
