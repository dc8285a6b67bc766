//! Route configuration
//!
//! Centralized route setup extracted from main.rs
//! Each domain (users, items, auth) manages its own routes

use crate::config::AuthSettings;
use crate::handlers;
use crate::middleware::RequireAuth;
use actix_web::{web, HttpResponse};

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig, auth: &AuthSettings) {
    cfg
        // Static/public endpoints
        .route("/", web::get().to(demo_handler))
        .route("/metrics", web::get().to(crate::metrics::metrics_handler))
        .route(
            crate::openapi::ApiDoc::openapi_json_path(),
            web::get().to(openapi_handler),
        )
        .route("/swagger-ui", web::get().to(swagger_ui_handler))
        .route("/docs", web::get().to(docs_handler))
        // API routes
        .service(
            web::scope("/api/v1")
                .route("/health", web::get().to(handlers::health_check))
                // Modular route configuration
                .configure(routes::auth::configure)
                .configure(|c| routes::users::configure(c, auth))
                .configure(routes::items::configure),
        );
}

/// Interactive demo page showing escaped vs. unescaped rendering
async fn demo_handler() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../static/demo.html"))
}

/// OpenAPI JSON endpoint
async fn openapi_handler() -> HttpResponse {
    use utoipa::OpenApi;
    HttpResponse::Ok()
        .content_type("application/json")
        .json(crate::openapi::ApiDoc::openapi())
}

/// Swagger UI handler
async fn swagger_ui_handler() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../static/swagger-ui.html"))
}

/// API Documentation entry point
async fn docs_handler() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../static/docs.html"))
}

// Sub-modules for each domain
mod routes {
    use super::*;

    pub mod auth {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/auth")
                    .route("/token", web::post().to(handlers::issue_token))
                    .route("/csrf-token", web::get().to(handlers::issue_csrf_token)),
            );
        }
    }

    pub mod users {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig, auth: &AuthSettings) {
            cfg
                // /users/me must be registered before /users/{id} so the
                // literal segment is not swallowed by the id capture.
                .service(
                    web::scope("/users/me")
                        .wrap(RequireAuth::new(auth.clone()))
                        .route("", web::get().to(handlers::get_current_user)),
                )
                .service(
                    web::scope("/users")
                        .route("", web::post().to(handlers::create_user))
                        .route("", web::get().to(handlers::list_users))
                        .route("/encoded", web::get().to(handlers::list_users_encoded))
                        .route("/safe1/{name}", web::get().to(handlers::get_user_by_name))
                        .route("/safe2/{name}", web::get().to(handlers::get_user_by_name_dynamic))
                        .route("/unsafe/{name}", web::get().to(handlers::get_user_by_name_raw))
                        .route("/safe/{id}", web::delete().to(handlers::delete_user_protected))
                        .route("/{id}", web::get().to(handlers::get_user))
                        .route("/{id}", web::delete().to(handlers::delete_user))
                        .route("/{id}/items", web::post().to(handlers::create_item_for_user)),
                );
        }
    }

    pub mod items {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/items").route("", web::get().to(handlers::list_items)),
            );
        }
    }
}
