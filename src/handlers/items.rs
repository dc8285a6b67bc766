use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::db::{item_repo, user_repo};
use crate::error::ApiError;
use crate::models::{CreateItemRequest, Pagination};

/// POST /api/v1/users/{id}/items
pub async fn create_item_for_user(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    req: web::Json<CreateItemRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let owner_id = path.into_inner();
    if user_repo::find_by_id(pool.get_ref(), owner_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("User not found".into()));
    }

    let item = item_repo::create_item(
        pool.get_ref(),
        &req.title,
        req.description.as_deref(),
        owner_id,
    )
    .await?;

    Ok(HttpResponse::Created().json(item))
}

/// GET /api/v1/items
pub async fn list_items(
    pool: web::Data<SqlitePool>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let items = item_repo::list(pool.get_ref(), query.skip, query.limit).await?;

    Ok(HttpResponse::Ok().json(items))
}
