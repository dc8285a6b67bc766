/// Item repository - handles all database operations for items
use crate::models::Item;
use sqlx::SqlitePool;

/// Create a new item owned by the given user
pub async fn create_item(
    pool: &SqlitePool,
    title: &str,
    description: Option<&str>,
    owner_id: i64,
) -> Result<Item, sqlx::Error> {
    sqlx::query_as::<_, Item>(
        r#"
        INSERT INTO items (title, description, owner_id)
        VALUES (?, ?, ?)
        RETURNING id, title, description, owner_id
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(owner_id)
    .fetch_one(pool)
    .await
}

/// List items with offset/limit pagination
pub async fn list(pool: &SqlitePool, skip: i64, limit: i64) -> Result<Vec<Item>, sqlx::Error> {
    sqlx::query_as::<_, Item>(
        r#"
        SELECT id, title, description, owner_id
        FROM items
        ORDER BY id
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}
