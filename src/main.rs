use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seclab_service::{
    config::Settings,
    db::{create_pool, run_migrations},
    metrics, routes,
    security::CsrfSigner,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::from_env().expect("Failed to load configuration");

    tracing::info!("Starting seclab-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::warn!(
        "This service hosts intentionally vulnerable endpoints. \
         Never expose it to an untrusted network."
    );

    // Initialize Prometheus metrics
    metrics::init_metrics();
    tracing::info!("Prometheus metrics initialized");

    // Create database connection pool
    let db_pool = create_pool(&settings.database.url, settings.database.max_connections)
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool created with {} max connections",
        settings.database.max_connections
    );

    tracing::info!("Running database migrations...");
    run_migrations(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations completed");

    let csrf_signer = CsrfSigner::new(settings.csrf.secret.clone(), settings.csrf.ttl_secs);

    // Clone settings for server closure
    let server_settings = settings.clone();
    let bind_address = format!("{}:{}", settings.server.host, settings.server.port);

    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        // Build CORS configuration from allowed_origins
        let mut cors = Cors::default();
        for origin in server_settings.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        let auth_settings = server_settings.auth.clone();

        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(web::Data::new(server_settings.clone()))
            .app_data(web::Data::new(csrf_signer.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(|cfg| routes::configure_routes(cfg, &auth_settings))
    })
    .bind(&bind_address)?
    .workers(4)
    .run()
    .await
}
