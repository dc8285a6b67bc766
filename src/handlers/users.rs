use actix_web::{web, HttpRequest, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::db::user_repo;
use crate::error::ApiError;
use crate::handlers::csrf::check_double_submit;
use crate::metrics;
use crate::middleware::AuthenticatedUser;
use crate::models::{CreateUserRequest, Pagination, UserResponse};
use crate::security::{csrf::CsrfSigner, escape_html, hash_password};

/// POST /api/v1/users
pub async fn create_user(
    pool: web::Data<SqlitePool>,
    req: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    if user_repo::find_by_email(pool.get_ref(), &req.email)
        .await?
        .is_some()
    {
        return Err(ApiError::BadRequest("Email already registered".into()));
    }

    let hashed = hash_password(&req.password)?;
    // Concurrent registrations can both pass the email pre-check; the
    // losing INSERT then hits the UNIQUE index on users.email.
    let user = user_repo::create_user(pool.get_ref(), &req.name, &req.email, &hashed)
        .await
        .map_err(|e| ApiError::conflict_on_unique(e, "Email already registered"))?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// GET /api/v1/users
pub async fn list_users(
    pool: web::Data<SqlitePool>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let users = user_repo::list(pool.get_ref(), query.skip, query.limit).await?;
    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/v1/users/encoded
/// Same listing with name and email HTML-entity-encoded, so stored
/// markup renders inert when a page interpolates it into the DOM.
pub async fn list_users_encoded(
    pool: web::Data<SqlitePool>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let users = user_repo::list(pool.get_ref(), query.skip, query.limit).await?;
    let body: Vec<UserResponse> = users
        .into_iter()
        .map(|u| UserResponse {
            id: u.id,
            name: escape_html(&u.name),
            email: escape_html(&u.email),
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/v1/users/me
pub async fn get_current_user(
    user: AuthenticatedUser,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    match user_repo::find_by_id(pool.get_ref(), user.0).await? {
        Some(u) => Ok(HttpResponse::Ok().json(UserResponse::from(u))),
        None => Err(ApiError::NotFound("User not found".into())),
    }
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    match user_repo::find_by_id(pool.get_ref(), path.into_inner()).await? {
        Some(user) => Ok(HttpResponse::Ok().json(UserResponse::from(user))),
        None => Err(ApiError::NotFound("User not found".into())),
    }
}

/// GET /api/v1/users/safe1/{name}
/// Lookup via a prepared statement with a bound parameter.
pub async fn get_user_by_name(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    match user_repo::find_by_name(pool.get_ref(), &path.into_inner()).await? {
        Some(user) => Ok(HttpResponse::Ok().json(UserResponse::from(user))),
        None => Err(ApiError::NotFound("User not found".into())),
    }
}

/// GET /api/v1/users/safe2/{name}
/// Lookup via dynamically assembled SQL that still binds the value.
pub async fn get_user_by_name_dynamic(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    match user_repo::find_by_name_dynamic(pool.get_ref(), &path.into_inner()).await? {
        Some(user) => Ok(HttpResponse::Ok().json(UserResponse::from(user))),
        None => Err(ApiError::NotFound("User not found".into())),
    }
}

/// GET /api/v1/users/unsafe/{name}
/// Lookup via string-interpolated SQL - the injectable counterpart of the
/// two routes above. Responds 200 with every matching row verbatim,
/// password hashes included, to show the full blast radius.
pub async fn get_user_by_name_raw(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    metrics::inc_raw_sql_lookups();

    match user_repo::find_by_name_interpolated(pool.get_ref(), &path.into_inner()).await {
        Ok(users) => Ok(HttpResponse::Ok().json(users)),
        // Payloads that break the interpolated statement surface the
        // database parse error; the error text is part of the lesson.
        Err(e) => Err(ApiError::BadRequest(format!("Query failed: {}", e))),
    }
}

/// DELETE /api/v1/users/{id}
/// No CSRF protection and no existence check: reports success for any id.
/// This is the vulnerable baseline for the guarded variant below.
pub async fn delete_user(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    user_repo::delete_by_id(pool.get_ref(), id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("User with id {} successfully deleted", id)
    })))
}

/// DELETE /api/v1/users/safe/{id}
/// Same operation guarded by a double-submit CSRF check.
pub async fn delete_user_protected(
    req: HttpRequest,
    pool: web::Data<SqlitePool>,
    signer: web::Data<CsrfSigner>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    check_double_submit(&req, signer.get_ref())?;

    let id = path.into_inner();
    user_repo::delete_by_id(pool.get_ref(), id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("User with id {} successfully deleted", id)
    })))
}
