//! Storage infrastructure - backend selection and the repository set

mod factory;
mod in_memory;
mod postgres;

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::{IngredientRepository, RecipeRepository, TagRepository, UserRepository};
use crate::infrastructure::recipe::{
    PostgresIngredientRepository, PostgresRecipeRepository, PostgresTagRepository,
};
use crate::infrastructure::user::PostgresUserRepository;

pub use factory::{StorageFactory, StorageType};
pub use in_memory::{
    InMemoryDatabase, InMemoryIngredientRepository, InMemoryRecipeRepository,
    InMemoryTagRepository, InMemoryUserRepository,
};
pub use postgres::PostgresConfig;

/// Repository handles for one storage backend
#[derive(Debug, Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub ingredients: Arc<dyn IngredientRepository>,
    pub recipes: Arc<dyn RecipeRepository>,
}

impl Repositories {
    /// Fresh in-memory repositories sharing one database
    pub fn in_memory() -> Self {
        InMemoryDatabase::new().repositories()
    }

    /// PostgreSQL repositories sharing one connection pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            tags: Arc::new(PostgresTagRepository::new(pool.clone())),
            ingredients: Arc::new(PostgresIngredientRepository::new(pool.clone())),
            recipes: Arc::new(PostgresRecipeRepository::new(pool)),
        }
    }
}
