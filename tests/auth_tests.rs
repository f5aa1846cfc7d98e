//! Credential gate integration tests
//!
//! Covers:
//! - Gated routes reject missing, malformed, and wrong credentials with 401
//! - Every 401 carries the `WWW-Authenticate: Basic` challenge
//! - A registered operator with the right password gets through
//! - The landing page stays open
//! - An empty credential table (missing or garbled secret) rejects everyone

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::util::ServiceExt;

mod common;
use common::{basic_auth, build_test_app, get, post_form, test_auth, test_credentials};

use srpush::endpoints::create_router;
use srpush::middleware::CredentialTable;
use srpush::state::AppState;

#[tokio::test]
async fn test_index_requires_no_auth() {
    let (app, _db) = build_test_app().await;
    let (status, body) = get(app, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Nothing to see here"));
}

#[tokio::test]
async fn test_missing_header_rejected_with_challenge() {
    let (app, _db) = build_test_app().await;

    let request = Request::builder()
        .uri("/list_unhandled")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let challenge = response
        .headers()
        .get(header::WWW_AUTHENTICATE)
        .expect("401 without WWW-Authenticate challenge");
    assert_eq!(
        challenge.to_str().unwrap(),
        "Basic realm=\"Stone Ridge Pushers\""
    );
}

#[tokio::test]
async fn test_wrong_password_rejected() {
    let (app, _db) = build_test_app().await;
    let (status, _) = get(
        app,
        "/list_unhandled",
        Some(&basic_auth(common::TEST_USER, "wrong")),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_user_rejected() {
    let (app, _db) = build_test_app().await;
    let (status, _) = get(
        app,
        "/list_unhandled",
        Some(&basic_auth("ben", common::TEST_PASSWORD)),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_basic_scheme_rejected() {
    let (app, _db) = build_test_app().await;
    let (status, _) = get(app, "/list_unhandled", Some("Bearer abcdef")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbled_basic_payload_rejected() {
    let (app, _db) = build_test_app().await;
    let (status, _) = get(app, "/list_unhandled", Some("Basic !!!not-base64!!!")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Decodes fine but has no colon separator
    let (app, _db) = build_test_app().await;
    let (status, _) = get(app, "/list_unhandled", Some("Basic aHVybGV5")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_registered_operator_accepted() {
    let (app, _db) = build_test_app().await;
    let (status, body) = get(app, "/list_unhandled", Some(&test_auth())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_all_mutating_routes_are_gated() {
    let (app, _db) = build_test_app().await;

    for (uri, form) in [
        ("/srpush", common::SCENARIO_A_FORM),
        ("/mark_handled", "id=1"),
        ("/status/update", "srid=SR1&status=done"),
    ] {
        let (status, _) = post_form(app.clone(), uri, None, form).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "route {} is not gated", uri);
    }
}

#[tokio::test]
async fn test_unauthorized_request_writes_nothing() {
    use sea_orm::{EntityTrait, PaginatorTrait};
    use srpush::models::prelude::*;

    let (app, db) = build_test_app().await;
    let (status, _) = post_form(app, "/srpush", None, common::SCENARIO_A_FORM).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(Push::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_empty_credential_table_rejects_valid_looking_creds() {
    let db = common::create_test_db().await;
    let state = AppState::new(db, CredentialTable::from_secret(None));
    let app = create_router(state);

    let (status, _) = get(app, "/list_unhandled", Some(&test_auth())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbled_secret_rejects_everyone() {
    let db = common::create_test_db().await;
    let state = AppState::new(db, CredentialTable::from_secret(Some("%%%")));
    let app = create_router(state);

    let (status, _) = get(app, "/list_unhandled", Some(&test_auth())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// The helper only checks which credentials a table accepts; keep a
// sanity check that the table used across these tests is non-trivial.
#[test]
fn test_fixture_credentials_parse() {
    let table = test_credentials();
    assert!(!table.is_empty());
    assert!(table.authorize(common::TEST_USER, common::TEST_PASSWORD));
}
