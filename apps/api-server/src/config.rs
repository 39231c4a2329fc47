//! Application configuration loaded from environment variables.

use std::env;

use blogroll_core::domain::UpdatePolicy;
use blogroll_infra::JwtConfig;

#[cfg(feature = "postgres")]
use blogroll_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    pub update_policy: UpdatePolicy,
    /// Username seeded into the in-memory store at startup, for local use.
    pub dev_user: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let update_policy = match env::var("UPDATE_POLICY") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}; falling back to open updates", e);
                UpdatePolicy::Open
            }),
            Err(_) => UpdatePolicy::Open,
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3003),
            #[cfg(feature = "postgres")]
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            update_policy,
            dev_user: env::var("DEV_USERNAME").ok().filter(|u| !u.is_empty()),
        }
    }
}
