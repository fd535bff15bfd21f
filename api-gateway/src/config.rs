//! Configuration loaded from environment variables.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub auth: AuthConfig,
    pub identity_db: DatabaseConfig,
    pub content_db: DatabaseConfig,
    pub promo_db: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
}

/// One database per backend service; there is no shared schema.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig {
                host: std::env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("GATEWAY_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            auth: AuthConfig {
                jwt_secret: std::env::var("JWT_SECRET")
                    .map_err(|_| "JWT_SECRET is required".to_string())?,
                token_ttl_secs: std::env::var("TOKEN_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3600),
            },
            identity_db: DatabaseConfig::from_env("IDENTITY_DATABASE_URL")?,
            content_db: DatabaseConfig::from_env("CONTENT_DATABASE_URL")?,
            promo_db: DatabaseConfig::from_env("PROMO_DATABASE_URL")?,
        })
    }
}

impl DatabaseConfig {
    fn from_env(url_var: &str) -> Result<Self, String> {
        Ok(DatabaseConfig {
            url: std::env::var(url_var).map_err(|_| format!("{} is required", url_var))?,
            max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}
