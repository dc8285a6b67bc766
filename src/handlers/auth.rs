use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::config::Settings;
use crate::db::user_repo;
use crate::error::ApiError;
use crate::metrics;
use crate::models::{TokenRequest, TokenResponse};
use crate::security::{token, verify_password};

/// POST /api/v1/auth/token
/// Exchanges form-encoded name/password credentials for a signed access
/// token. Lookup failures and hash mismatches return the same message so
/// the response does not reveal which half was wrong.
pub async fn issue_token(
    pool: web::Data<SqlitePool>,
    settings: web::Data<Settings>,
    form: web::Form<TokenRequest>,
) -> Result<HttpResponse, ApiError> {
    metrics::inc_token_requests();

    let user = match user_repo::find_by_name(pool.get_ref(), &form.username).await? {
        Some(user) => user,
        None => {
            metrics::inc_token_failures();
            return Err(ApiError::Unauthorized(
                "Incorrect username or password".into(),
            ));
        }
    };

    if verify_password(&form.password, &user.hashed_password).is_err() {
        metrics::inc_token_failures();
        return Err(ApiError::Unauthorized(
            "Incorrect username or password".into(),
        ));
    }

    let access_token = token::issue_access_token(
        &settings.auth.jwt_secret,
        user.id,
        settings.auth.token_ttl_secs,
    )?;

    Ok(HttpResponse::Ok().json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
        expires_in: settings.auth.token_ttl_secs,
    }))
}
