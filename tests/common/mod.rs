//! Test helpers shared across integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use http_body_util::BodyExt;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tower::util::ServiceExt;

use srpush::endpoints::create_router;
use srpush::middleware::CredentialTable;
use srpush::migrations::Migrator;
use srpush::state::AppState;

pub const TEST_USER: &str = "hurley";
pub const TEST_PASSWORD: &str = "4815162342";

/// Create an in-memory SQLite database for testing
pub async fn create_test_db() -> DatabaseConnection {
    // Each connection gets its own database
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run test migrations");

    db
}

/// Credential table containing only the test operator
pub fn test_credentials() -> CredentialTable {
    let secret = BASE64.encode(format!(r#"{{"{}": "{}"}}"#, TEST_USER, TEST_PASSWORD));
    CredentialTable::from_secret(Some(&secret))
}

/// Build a router over a fresh database; returns both so tests can
/// inspect rows directly.
pub async fn build_test_app() -> (Router, DatabaseConnection) {
    let db = create_test_db().await;
    let state = AppState::new(db.clone(), test_credentials());
    (create_router(state), db)
}

/// Authorization header value for HTTP Basic
pub fn basic_auth(username: &str, password: &str) -> String {
    format!(
        "Basic {}",
        BASE64.encode(format!("{}:{}", username, password))
    )
}

pub fn test_auth() -> String {
    basic_auth(TEST_USER, TEST_PASSWORD)
}

/// POST a form body and return (status, body)
pub async fn post_form(
    app: Router,
    uri: &str,
    auth: Option<&str>,
    body: &str,
) -> (StatusCode, String) {
    let mut builder = Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).to_string())
}

/// GET a path and return (status, body)
pub async fn get(app: Router, uri: &str, auth: Option<&str>) -> (StatusCode, String) {
    let mut builder = Request::builder().uri(uri).method("GET");
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).to_string())
}

/// Create a push through the HTTP surface and return its id
pub async fn create_push(app: Router, form: &str) -> i64 {
    let (status, body) = post_form(app, "/srpush", Some(&test_auth()), form).await;
    assert_eq!(status, StatusCode::OK, "create_push failed: {}", body);
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    parsed["pushid"].as_i64().expect("pushid missing")
}

/// The Scenario A push: SR1 by alice, {broadband, umts} x {linux}
pub const SCENARIO_A_FORM: &str =
    "srid=SR1&ldap=alice&sha=abc123&netconfig=broadband&netconfig=umts&operating_system=linux";
