//! Customer search API integration tests
//!
//! Tests for `GET /customers`, including the bearer token requirement.

use axum::http::{header, HeaderValue, StatusCode};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;

use customer_search::backend::customers::SearchResponse;
use customer_search::shared::{BankAccount, Customer, Pocket, TermDeposit};

use crate::common::{auth_header, create_test_user, TestApp};
use crate::{assert_contains, assert_error_response};

async fn search(app: &TestApp, token: &str, params: &[(&str, &str)]) -> axum_test::TestResponse {
    let mut request = app.server.get("/customers").authorization_bearer(token);
    for (key, value) in params {
        request = request.add_query_param(key, value);
    }
    request.await
}

fn john_doe() -> Customer {
    Customer {
        id: 1,
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        bank_accounts: vec![BankAccount {
            account_number: "1234567890".to_string(),
        }],
        pockets: vec![Pocket {
            name: "Savings".to_string(),
            balance: 500.0,
        }],
        term_deposits: vec![TermDeposit {
            amount: 2000.0,
            duration: 12,
        }],
    }
}

#[tokio::test]
async fn test_search_by_account_number() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice").await;

    let response = search(&app, &user.token, &[("account_number", "1234567890")]).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: SearchResponse = response.json();
    assert_eq!(body.data, vec![john_doe()]);
}

#[tokio::test]
async fn test_search_by_name() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice").await;

    let response = search(&app, &user.token, &[("name", "John Doe")]).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: SearchResponse = response.json();
    assert_eq!(body.data.len(), 1);
    assert_eq!(body.data[0].name, "John Doe");
    assert_eq!(body.data[0].bank_accounts[0].account_number, "1234567890");
}

#[tokio::test]
async fn test_search_combined_filters() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice").await;

    let response = search(
        &app,
        &user.token,
        &[("name", "John"), ("email", "john@example.com")],
    )
    .await;

    let body: SearchResponse = response.json();
    assert_eq!(body.data, vec![john_doe()]);
}

#[tokio::test]
async fn test_search_not_found() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice").await;

    let response = search(&app, &user.token, &[("name", "Unknown")]).await;
    assert_error_response!(response, StatusCode::NOT_FOUND, "customer not found");
}

#[tokio::test]
async fn test_search_without_filter() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice").await;

    let response = search(&app, &user.token, &[]).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_contains!(response.text(), "at least name, email, or account_number");

    let blank = search(&app, &user.token, &[("name", ""), ("email", "")]).await;
    assert_eq!(blank.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_malformed_query_is_json_error() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice").await;

    let response = search(&app, &user.token, &[("name", "a"), ("name", "b")]).await;
    assert_error_response!(response, StatusCode::BAD_REQUEST, "bad request");
}

#[tokio::test]
async fn test_search_requires_token() {
    let app = TestApp::new().await;

    let response = app
        .server
        .get("/customers")
        .add_query_param("name", "John")
        .await;

    assert_error_response!(response, StatusCode::UNAUTHORIZED, "unauthorized");
}

#[tokio::test]
async fn test_search_bare_bearer_scheme() {
    let app = TestApp::new().await;

    let response = app
        .server
        .get("/customers")
        .add_query_param("name", "John")
        .add_header(header::AUTHORIZATION, HeaderValue::from_static("Bearer"))
        .await;

    assert_error_response!(response, StatusCode::UNAUTHORIZED, "unauthorized");
}

#[tokio::test]
async fn test_search_lowercase_scheme() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice").await;
    let value = auth_header(&user.token).replacen("Bearer", "bearer", 1);

    let response = app
        .server
        .get("/customers")
        .add_query_param("name", "John")
        .add_header(header::AUTHORIZATION, HeaderValue::from_str(&value).unwrap())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_search_expired_token() {
    let app = TestApp::new().await;
    let expired = app
        .tokens
        .issue_with_expiry(1, Utc::now() - Duration::hours(1))
        .unwrap();

    let response = search(&app, &expired, &[("name", "John")]).await;
    assert_error_response!(response, StatusCode::UNAUTHORIZED, "unauthorized");
}

#[tokio::test]
async fn test_search_tampered_token() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.server, "alice").await;
    let tampered = format!("{}x", user.token);

    let response = search(&app, &tampered, &[("name", "John")]).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
