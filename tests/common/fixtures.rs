/// Test fixtures and utilities for integration tests
/// Provides database setup, settings, and test data creation
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use seclab_service::config::{
    AuthSettings, CorsSettings, CsrfSettings, DatabaseSettings, ServerSettings, Settings,
};
use seclab_service::db::user_repo;
use seclab_service::models::User;
use seclab_service::security::hash_password;

/// Create a fresh in-memory database with migrations applied.
///
/// A `:memory:` database lives and dies with its connection, so the pool
/// is pinned to a single connection that is never recycled. Every query
/// in a test then sees the same database.
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("parse sqlite url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("connect sqlite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");

    pool
}

/// Settings with fixed secrets so tokens are reproducible across the test
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        auth: AuthSettings {
            jwt_secret: "test-jwt-secret".to_string(),
            token_ttl_secs: 1800,
        },
        csrf: CsrfSettings {
            secret: "test-csrf-secret".to_string(),
            ttl_secs: 3600,
        },
        cors: CorsSettings {
            allowed_origins: "*".to_string(),
        },
    }
}

/// Insert a user through the repository, hashing the password the same
/// way the registration endpoint does.
pub async fn seed_user(pool: &SqlitePool, name: &str, email: &str, password: &str) -> User {
    let hashed = hash_password(password).expect("hash password");
    user_repo::create_user(pool, name, email, &hashed)
        .await
        .expect("insert user")
}
