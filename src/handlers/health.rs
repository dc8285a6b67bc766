use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    database: &'static str,
}

/// GET /api/v1/health
/// Quick liveness probe: one round trip to the database.
pub async fn health_check(pool: web::Data<SqlitePool>) -> impl Responder {
    let database_ok = sqlx::query("SELECT 1")
        .fetch_one(pool.get_ref())
        .await
        .is_ok();

    HttpResponse::Ok().json(HealthResponse {
        status: if database_ok { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: if database_ok { "healthy" } else { "unhealthy" },
    })
}
