//! Storage factory for runtime backend selection

use std::str::FromStr;

use tracing::info;

use crate::config::StorageConfig;
use crate::domain::DomainError;

use super::in_memory::InMemoryDatabase;
use super::postgres::PostgresConfig;
use super::Repositories;

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl FromStr for StorageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Ok(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            other => Err(DomainError::validation(format!(
                "Unknown storage backend '{}'. Use 'memory' or 'postgres'.",
                other
            ))),
        }
    }
}

/// Factory for creating the repository set
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Build repositories for the configured backend
    pub async fn create(config: &StorageConfig) -> Result<Repositories, DomainError> {
        let storage_type: StorageType = config.backend.parse()?;
        info!(backend = ?storage_type, "Initializing storage");

        match storage_type {
            StorageType::InMemory => Ok(InMemoryDatabase::new().repositories()),
            StorageType::Postgres => {
                let url = config
                    .database_url
                    .clone()
                    .or_else(|| std::env::var("DATABASE_URL").ok())
                    .ok_or_else(|| {
                        DomainError::validation(
                            "storage.database_url or DATABASE_URL is required for the postgres backend",
                        )
                    })?;

                let pool = PostgresConfig::new(url)
                    .with_max_connections(config.max_connections)
                    .connect()
                    .await?;

                info!("PostgreSQL connection established");
                Ok(Repositories::postgres(pool))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRepository;

    #[test]
    fn test_storage_type_from_str() {
        assert_eq!("memory".parse::<StorageType>().unwrap(), StorageType::InMemory);
        assert_eq!("In-Memory".parse::<StorageType>().unwrap(), StorageType::InMemory);
        assert_eq!("postgres".parse::<StorageType>().unwrap(), StorageType::Postgres);
        assert_eq!("pg".parse::<StorageType>().unwrap(), StorageType::Postgres);
        assert!("unknown".parse::<StorageType>().is_err());
    }

    #[tokio::test]
    async fn test_create_in_memory() {
        let repositories = StorageFactory::create(&StorageConfig::default()).await.unwrap();
        assert_eq!(repositories.users.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_backend_rejected() {
        let config = StorageConfig {
            backend: "sqlite".to_string(),
            ..Default::default()
        };

        assert!(StorageFactory::create(&config).await.is_err());
    }
}
