//! Application state - shared across all handlers.

use std::sync::Arc;

use blogroll_core::domain::{UpdatePolicy, User};
use blogroll_core::ports::{BaseRepository, PostRepository, TokenService, UserRepository};
use blogroll_core::services::{PostService, TokenAuthorizer};
use blogroll_infra::{InMemoryPostRepository, InMemoryUserRepository, JwtTokenService};

#[cfg(feature = "postgres")]
use blogroll_infra::{PostgresPostRepository, PostgresUserRepository, database};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub authorizer: TokenAuthorizer,
    /// Name of the storage backend, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenService>,
        update_policy: UpdatePolicy,
        storage: &'static str,
    ) -> Self {
        Self {
            posts: PostService::new(posts, users, update_policy),
            authorizer: TokenAuthorizer::new(tokens),
            storage,
        }
    }

    /// Build the application state with appropriate implementations.
    pub async fn from_config(config: &AppConfig) -> Self {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));

        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                match database::connect(db_config).await {
                    Ok(conn) => {
                        let posts = Arc::new(PostgresPostRepository::new(conn.clone()));
                        let users = Arc::new(PostgresUserRepository::new(conn));
                        tracing::info!(policy = ?config.update_policy, "Application state initialized");
                        return Self::new(posts, users, tokens, config.update_policy, "postgres");
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        let users = Arc::new(InMemoryUserRepository::new());
        if let Some(username) = &config.dev_user {
            seed_dev_user(users.as_ref(), tokens.as_ref(), username).await;
        }

        tracing::info!(policy = ?config.update_policy, "Application state initialized");
        Self::new(
            Arc::new(InMemoryPostRepository::new()),
            users,
            tokens,
            config.update_policy,
            "memory",
        )
    }
}

/// Create a local user and print a token for it, so the in-memory server can
/// be exercised without an external identity provider.
async fn seed_dev_user(users: &dyn UserRepository, tokens: &dyn TokenService, username: &str) {
    let user = match users.save(User::new(username.to_string(), None)).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("Could not seed development user: {}", e);
            return;
        }
    };

    match tokens.generate_token(user.id, &user.username) {
        Ok(token) => tracing::info!(
            user_id = %user.id,
            username = %user.username,
            "Development user seeded; use header `Authorization: Bearer {}`",
            token
        ),
        Err(e) => tracing::error!("Could not sign development token: {}", e),
    }
}
