#![allow(dead_code)]

//! Test infrastructure for gk-server API tests

use gk_auth::AuthPolicy;
use gk_router::CommandRouter;
use gk_server::AppState;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Owner identity wired into every test router.
pub const OWNER: i64 = 1000;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    // In-memory SQLite lives and dies with its connection, so the pool
    // must not open a second one.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    gk_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let router = CommandRouter::new(pool.clone(), AuthPolicy::new(OWNER));

    AppState { pool, router }
}

/// Register a user row directly, bypassing the dispatch path
pub async fn seed_user(pool: &SqlitePool, identity: i64, role: &str) {
    sqlx::query("INSERT INTO users (identity, role, created_at) VALUES (?, ?, ?)")
        .bind(identity)
        .bind(role)
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await
        .expect("Failed to seed user");
}
