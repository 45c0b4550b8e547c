//! Authentication integration tests
//!
//! Register, login and logout through the HTTP surface.

mod common;

use axum::http::{header::COOKIE, HeaderValue, StatusCode};
use common::*;
use notekeeper::backend::auth::users::{count_users_with_username, get_user_by_username};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_root_redirects_to_login() {
    let db = TestDatabase::new().await;
    let server = browser(&db);

    let response = server.get("/").await;
    assert_redirect(&response, "/login");
}

#[tokio::test]
async fn test_forms_render() {
    let db = TestDatabase::new().await;
    let server = browser(&db);

    let response = server.get("/login").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("action=\"/login\""));

    let response = server.get("/register").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("action=\"/register\""));
}

#[tokio::test]
async fn test_register_redirects_to_login_without_signing_in() {
    let db = TestDatabase::new().await;
    let server = browser(&db);

    let response = register(&server, "alice", "pw1").await;
    assert_redirect(&response, "/login");

    let response = server.get("/notes").await;
    assert_redirect(&response, "/login");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let db = TestDatabase::new().await;
    let server = browser(&db);

    register(&server, "alice", "pw1").await;
    let response = register(&server, "alice", "other").await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(response.text(), "Username already exists!");
    assert_eq!(count_users_with_username(db.pool(), "alice").await.unwrap(), 1);
}

#[tokio::test]
async fn test_register_empty_username() {
    let db = TestDatabase::new().await;
    let server = browser(&db);

    let response = register(&server, "", "pw1").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Username cannot be empty");
}

#[tokio::test]
async fn test_password_is_stored_hashed_and_salted() {
    let db = TestDatabase::new().await;
    let server = browser(&db);

    register(&server, "alice", "abc123").await;
    register(&server, "bob", "abc123").await;

    let alice = get_user_by_username(db.pool(), "alice").await.unwrap().unwrap();
    let bob = get_user_by_username(db.pool(), "bob").await.unwrap().unwrap();

    assert_ne!(alice.password_hash, "abc123");
    assert_ne!(bob.password_hash, "abc123");
    assert_ne!(alice.password_hash, bob.password_hash);
}

#[tokio::test]
async fn test_login_success_sets_session() {
    let db = TestDatabase::new().await;
    let server = browser(&db);

    register(&server, "alice", "pw1").await;
    let response = login(&server, "alice", "pw1").await;

    assert_redirect(&response, "/notes");
    let cookie = response.header("set-cookie");
    assert!(cookie.to_str().unwrap().starts_with("notekeeper_session="));

    let response = server.get("/notes").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_unknown_user() {
    let db = TestDatabase::new().await;
    let server = browser(&db);

    let response = login(&server, "ghost", "pw1").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.text(), "Invalid credentials!");
}

#[tokio::test]
async fn test_login_wrong_password_looks_like_unknown_user() {
    let db = TestDatabase::new().await;
    let server = browser(&db);
    register(&server, "alice", "pw1").await;

    let wrong_password = login(&server, "alice", "pw2").await;
    let unknown_user = login(&server, "mallory", "pw1").await;

    assert_eq!(wrong_password.status_code(), unknown_user.status_code());
    assert_eq!(wrong_password.text(), unknown_user.text());

    let response = server.get("/notes").await;
    assert_redirect(&response, "/login");
}

#[tokio::test]
async fn test_logout_ends_session() {
    let db = TestDatabase::new().await;
    let server = signed_in_browser(&db, "alice", "pw1").await;

    let response = server.get("/logout").await;
    assert_redirect(&response, "/login");

    let response = server.get("/notes").await;
    assert_redirect(&response, "/login");
}

#[tokio::test]
async fn test_logout_when_anonymous() {
    let db = TestDatabase::new().await;
    let server = browser(&db);

    assert_redirect(&server.get("/logout").await, "/login");
    assert_redirect(&server.get("/logout").await, "/login");
}

/// The `name=value` part of the session cookie set by `response`
fn session_cookie_pair(response: &axum_test::TestResponse) -> String {
    let header = response.header("set-cookie");
    let cookie = header.to_str().unwrap();
    cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn test_made_up_session_id_is_anonymous() {
    let db = TestDatabase::new().await;
    let server = browser(&db);
    register(&server, "alice", "pw1").await;

    let response = server
        .get("/notes")
        .add_header(
            COOKIE,
            HeaderValue::from_static("notekeeper_session=AAAAAAAAAAAAAAAAAAAAAA"),
        )
        .await;
    assert_redirect(&response, "/login");
}

#[tokio::test]
async fn test_cookie_is_worthless_after_logout() {
    let db = TestDatabase::new().await;
    let server = browser(&db);
    register(&server, "alice", "pw1").await;
    let response = login(&server, "alice", "pw1").await;
    let stolen = session_cookie_pair(&response);

    let other_device = browser(&db);
    let response = other_device
        .get("/notes")
        .add_header(COOKIE, HeaderValue::from_str(&stolen).unwrap())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    assert_redirect(&server.get("/logout").await, "/login");

    let response = other_device
        .get("/notes")
        .add_header(COOKIE, HeaderValue::from_str(&stolen).unwrap())
        .await;
    assert_redirect(&response, "/login");
}

#[tokio::test]
async fn test_login_replaces_session_id() {
    let db = TestDatabase::new().await;
    let server = browser(&db);
    register(&server, "alice", "pw1").await;

    let first = session_cookie_pair(&login(&server, "alice", "pw1").await);
    let second = session_cookie_pair(&login(&server, "alice", "pw1").await);
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_forged_cookie_is_anonymous() {
    let db = TestDatabase::new().await;
    let server = browser(&db);

    let response = server
        .get("/notes")
        .add_header(COOKIE, HeaderValue::from_static("notekeeper_session=not.a.token"))
        .await;
    assert_redirect(&response, "/login");
}

#[tokio::test]
async fn test_unknown_route() {
    let db = TestDatabase::new().await;
    let server = browser(&db);

    let response = server.get("/nope").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "404 Not Found");
}
