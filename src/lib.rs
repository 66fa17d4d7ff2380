//! Recipe API
//!
//! Per-user recipes, tags and ingredients behind email-based authentication:
//! - Email identity with Argon2 password hashes and JWT bearer tokens
//! - Owner-scoped CRUD with an `assigned_only` filter for tags and ingredients
//! - In-memory or PostgreSQL storage

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::warn;

use api::state::AppState;
use config::AuthConfig;
use infrastructure::auth::{JwtConfig, JwtGenerator, JwtService};
use infrastructure::storage::StorageFactory;
use infrastructure::user::Argon2Hasher;

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let repositories = StorageFactory::create(&config.storage).await?;

    Ok(AppState::from_repositories(
        repositories,
        Arc::new(Argon2Hasher::new()),
        create_jwt_service(&config.auth),
    ))
}

fn create_jwt_service(auth: &AuthConfig) -> Arc<dyn JwtGenerator> {
    if auth.jwt_secret == JwtConfig::default().secret {
        warn!("Using the built-in JWT secret. Set APP__AUTH__JWT_SECRET before exposing this service.");
    }

    Arc::new(JwtService::new(JwtConfig::new(
        auth.jwt_secret.clone(),
        auth.expiration_hours,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_state_uses_memory_backend() {
        let state = create_app_state().await.unwrap();

        assert_eq!(state.user_service.count().await.unwrap(), 0);
        assert_eq!(state.jwt_service.expiration_hours(), 24);
    }

    #[tokio::test]
    async fn test_unknown_backend_is_rejected() {
        let mut config = AppConfig::default();
        config.storage.backend = "sqlite".to_string();

        assert!(create_app_state_with_config(&config).await.is_err());
    }
}
