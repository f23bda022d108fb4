//! Authentication test helpers
//!
//! Provides utilities for registering test users and obtaining tokens
//! through the public endpoints.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

/// Test user credentials
pub struct TestUser {
    pub username: String,
    pub password: String,
    pub token: String,
}

/// Register a user through `POST /register`
pub async fn register(server: &TestServer, username: &str, password: &str) {
    let response = server
        .post("/register")
        .json(&json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
}

/// Log in through `POST /login` and return the token
pub async fn login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/login")
        .json(&json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    body["token"]
        .as_str()
        .expect("login response has no token")
        .to_string()
}

/// Register and log in a fresh user
pub async fn create_test_user(server: &TestServer, username: &str) -> TestUser {
    let password = "test_password_123";
    register(server, username, password).await;
    let token = login(server, username, password).await;

    TestUser {
        username: username.to_string(),
        password: password.to_string(),
        token,
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
