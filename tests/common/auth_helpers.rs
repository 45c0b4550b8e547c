//! Authentication test helpers
//!
//! Each `TestServer` keeps its own cookie jar, so one server per simulated
//! browser. Several servers can share one database.

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use notekeeper::backend::server::config::MIN_BCRYPT_COST;
use notekeeper::backend::server::{create_app_with_pool, ServerConfig};

use super::database::TestDatabase;

/// Configuration with the cheapest bcrypt cost
pub fn test_config() -> ServerConfig {
    ServerConfig {
        bcrypt_cost: MIN_BCRYPT_COST,
        ..ServerConfig::default()
    }
}

/// A browser: a test server over the shared database that remembers cookies
pub fn browser(db: &TestDatabase) -> TestServer {
    let app = create_app_with_pool(db.pool().clone(), &test_config());
    TestServer::builder()
        .save_cookies()
        .build(app)
        .expect("Failed to create test server")
}

/// Submit the registration form
pub async fn register(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post("/register")
        .form(&[("username", username), ("password", password)])
        .await
}

/// Submit the login form
pub async fn login(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post("/login")
        .form(&[("username", username), ("password", password)])
        .await
}

/// Register and log in, asserting both succeed
pub async fn signed_in_browser(db: &TestDatabase, username: &str, password: &str) -> TestServer {
    let server = browser(db);

    let response = register(&server, username, password).await;
    assert_redirect(&response, "/login");

    let response = login(&server, username, password).await;
    assert_redirect(&response, "/notes");

    server
}

/// Add a note through the form
pub async fn create_note(server: &TestServer, content: &str) -> TestResponse {
    server.post("/notes").form(&[("note", content)]).await
}

/// Assert a 303 redirect to `location`
pub fn assert_redirect(response: &TestResponse, location: &str) {
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), location);
}
