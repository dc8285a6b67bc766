//! Configuration management for the SecLab demo service
//!
//! Loads settings from:
//! 1. Environment variables
//! 2. .env file (local development)
//!
//! Every setting has a development default so the service boots with no
//! environment at all. The JWT and CSRF secrets fall back to well-known
//! dev values and log a warning when they do.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub csrf: CsrfSettings,
    pub cors: CorsSettings,
}

impl Settings {
    /// Load settings from environment variables (and .env in debug builds)
    pub fn from_env() -> Result<Self> {
        if cfg!(debug_assertions) {
            dotenvy::dotenv().ok();
        }

        Ok(Settings {
            server: ServerSettings::from_env()?,
            database: DatabaseSettings::from_env()?,
            auth: AuthSettings::from_env()?,
            csrf: CsrfSettings::from_env()?,
            cors: CorsSettings::from_env(),
        })
    }
}

/// HTTP server bind settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("Invalid SERVER_PORT")?,
        })
    }
}

/// Database connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:seclab.db".to_string()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("Invalid DATABASE_MAX_CONNECTIONS")?,
        })
    }
}

/// Access-token signing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
}

impl AuthSettings {
    fn from_env() -> Result<Self> {
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, using development default");
            "dev-jwt-secret-change-me".to_string()
        });

        Ok(Self {
            jwt_secret,
            token_ttl_secs: env::var("TOKEN_TTL_SECS")
                .unwrap_or_else(|_| "1800".to_string())
                .parse()
                .context("Invalid TOKEN_TTL_SECS")?,
        })
    }
}

/// CSRF token signing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsrfSettings {
    pub secret: String,
    pub ttl_secs: u64,
}

impl CsrfSettings {
    fn from_env() -> Result<Self> {
        let secret = env::var("CSRF_SECRET").unwrap_or_else(|_| {
            warn!("CSRF_SECRET not set, using development default");
            "dev-csrf-secret-change-me".to_string()
        });

        Ok(Self {
            secret,
            ttl_secs: env::var("CSRF_TTL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .context("Invalid CSRF_TTL_SECS")?,
        })
    }
}

/// CORS settings: comma-separated origins, `*` allows any
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsSettings {
    pub allowed_origins: String,
}

impl CorsSettings {
    fn from_env() -> Self {
        Self {
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        }
    }
}
