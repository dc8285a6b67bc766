/// User repository - handles all database operations for users
use crate::models::User;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Create a new user in the database
pub async fn create_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    hashed_password: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, hashed_password)
        VALUES (?, ?, ?)
        RETURNING id, name, email, hashed_password
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(hashed_password)
    .fetch_one(pool)
    .await
}

/// Find a user by ID
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, hashed_password
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Find a user by email
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, hashed_password
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Find a user by name via a prepared statement with a bound parameter.
/// The whole path segment is treated as a literal value, injection
/// payloads included.
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, hashed_password
        FROM users
        WHERE name = ?
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await
}

/// Find a user by name via dynamically assembled SQL. The statement text
/// is built at runtime but the value still travels as a bind parameter,
/// so this stays injection-proof.
pub async fn find_by_name_dynamic(
    pool: &SqlitePool,
    name: &str,
) -> Result<Option<User>, sqlx::Error> {
    let mut query: QueryBuilder<Sqlite> =
        QueryBuilder::new("SELECT id, name, email, hashed_password FROM users WHERE name = ");
    query.push_bind(name);

    query.build_query_as::<User>().fetch_optional(pool).await
}

/// INTENTIONALLY VULNERABLE: interpolates the name straight into the SQL
/// text, so `' OR '1'='1` matches every row. Exists only to demonstrate
/// injection next to the parameterized variants above. DO NOT use this
/// pattern anywhere else.
pub async fn find_by_name_interpolated(
    pool: &SqlitePool,
    name: &str,
) -> Result<Vec<User>, sqlx::Error> {
    let sql = format!("SELECT * FROM users WHERE name = '{}'", name);

    sqlx::query_as::<_, User>(&sql).fetch_all(pool).await
}

/// List users with offset/limit pagination
pub async fn list(pool: &SqlitePool, skip: i64, limit: i64) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, hashed_password
        FROM users
        ORDER BY id
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

/// Delete a user by ID, returning the number of rows removed
pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
