mod common;

use serde_json::{Value, json};
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_save_with_alias(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/url")
        .add_header("Authorization", common::AUTH_HEADER)
        .json(&json!({ "url": "https://example.com", "alias": "abc123" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    assert_eq!(body["alias"], "abc123");
    assert_eq!(body["url"], "https://example.com");
    assert_eq!(
        common::destination_of(&pool, "abc123").await.as_deref(),
        Some("https://example.com")
    );
}

#[sqlx::test]
async fn test_save_generates_alias(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/url")
        .add_header("Authorization", common::AUTH_HEADER)
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    let alias = body["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 6);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(
        common::destination_of(&pool, alias).await.as_deref(),
        Some("https://example.com")
    );
}

#[sqlx::test]
async fn test_save_empty_alias_generates_one(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/url")
        .add_header("Authorization", common::AUTH_HEADER)
        .json(&json!({ "url": "https://example.com", "alias": "" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    assert_eq!(body["alias"].as_str().unwrap().len(), 6);
}

#[sqlx::test]
async fn test_save_duplicate_alias(pool: SqlitePool) {
    common::create_test_alias(&pool, "taken", "https://example.com").await;
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/url")
        .add_header("Authorization", common::AUTH_HEADER)
        .json(&json!({ "url": "https://other.com", "alias": "taken" }))
        .await;

    assert_eq!(response.status_code(), 409);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "conflict");
    assert_eq!(body["error"]["details"]["alias"], "taken");
    assert_eq!(
        common::destination_of(&pool, "taken").await.as_deref(),
        Some("https://example.com")
    );
}

#[sqlx::test]
async fn test_save_invalid_url(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/url")
        .add_header("Authorization", common::AUTH_HEADER)
        .json(&json!({ "url": "not a url" }))
        .await;

    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["details"]["url"].is_array());
    assert_eq!(common::count_aliases(&pool).await, 0);
}

#[sqlx::test]
async fn test_save_invalid_alias(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    for alias in ["has space", "a/b", "health", "url"] {
        let response = server
            .post("/url")
            .add_header("Authorization", common::AUTH_HEADER)
            .json(&json!({ "url": "https://example.com", "alias": alias }))
            .await;

        assert_eq!(
            response.status_code(),
            400,
            "alias '{}' should be rejected",
            alias
        );
    }
}

#[sqlx::test]
async fn test_save_requires_auth(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "abc" }))
        .await;

    assert_eq!(response.status_code(), 401);
    assert!(response.headers().contains_key("www-authenticate"));
    assert_eq!(common::count_aliases(&pool).await, 0);
}

#[sqlx::test]
async fn test_save_wrong_password(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/url")
        .add_header("Authorization", common::BAD_AUTH_HEADER)
        .json(&json!({ "url": "https://example.com", "alias": "abc" }))
        .await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(common::count_aliases(&pool).await, 0);
}
