#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use link_page::api::handlers::health_handler;
use link_page::api::routes::link_routes;
use link_page::state::AppState;

/// Inserts a link directly and returns its id.
pub async fn create_test_link(pool: &PgPool, name: &str, order: i32) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (name, url, icon, color, sort_order) VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(name)
    .bind(format!("https://example.com/{}", name.to_lowercase()))
    .bind("icon")
    .bind("#333")
    .bind(order)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn set_clicks(pool: &PgPool, id: i64, clicks: i64) {
    sqlx::query("UPDATE links SET clicks = $2 WHERE id = $1")
        .bind(id)
        .bind(clicks)
        .execute(pool)
        .await
        .unwrap();
}

/// Backdates a link's creation time, e.g. `"2024-01-15T12:00:00Z"`.
pub async fn set_created_at(pool: &PgPool, id: i64, created_at: &str) {
    sqlx::query("UPDATE links SET created_at = $2::timestamptz WHERE id = $1")
        .bind(id)
        .bind(created_at)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn get_clicks(pool: &PgPool, id: i64) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

/// Test server with the full API mounted under `/api` and `/health`,
/// without rate limiting.
pub fn make_server(pool: PgPool) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", link_routes())
        .with_state(create_test_state(pool));

    TestServer::new(app).unwrap()
}
