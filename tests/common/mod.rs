#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

use alias_shortener::api::middleware::auth::Credentials;
use alias_shortener::application::services::AliasPolicy;
use alias_shortener::routes::app_router;
use alias_shortener::state::AppState;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";

/// `Authorization` value for `admin:secret`.
pub const AUTH_HEADER: &str = "Basic YWRtaW46c2VjcmV0";

/// `Authorization` value for `admin:wrong`.
pub const BAD_AUTH_HEADER: &str = "Basic YWRtaW46d3Jvbmc=";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(
        Arc::new(pool),
        AliasPolicy::default(),
        Credentials::new(TEST_USER, TEST_PASSWORD),
    )
}

/// Full application router, with every middleware, behind a test server.
pub fn create_test_server(pool: SqlitePool) -> TestServer {
    let app = app_router(create_test_state(pool), Duration::from_secs(4));
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub async fn create_test_alias(pool: &SqlitePool, alias: &str, url: &str) -> i64 {
    sqlx::query("INSERT INTO url (alias, destination_url) VALUES (?1, ?2)")
        .bind(alias)
        .bind(url)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn count_aliases(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn destination_of(pool: &SqlitePool, alias: &str) -> Option<String> {
    sqlx::query_scalar("SELECT destination_url FROM url WHERE alias = ?1")
        .bind(alias)
        .fetch_optional(pool)
        .await
        .unwrap()
}
