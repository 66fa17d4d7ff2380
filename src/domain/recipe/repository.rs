//! Recipe repository trait

use async_trait::async_trait;

use super::entity::{Recipe, RecipeDraft, RecipeId};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Repository for managing recipes and their tag/ingredient associations
#[async_trait]
pub trait RecipeRepository: Send + Sync + std::fmt::Debug {
    /// Persist a new recipe for `owner`, assigning its ID
    async fn create(&self, owner: UserId, draft: RecipeDraft) -> Result<Recipe, DomainError>;

    /// Get a recipe by ID, regardless of owner
    async fn get(&self, id: RecipeId) -> Result<Option<Recipe>, DomainError>;

    /// List recipes owned by `owner`, newest first
    async fn list(&self, owner: UserId) -> Result<Vec<Recipe>, DomainError>;

    /// Replace a stored recipe, including its associations and image
    async fn update(&self, recipe: &Recipe) -> Result<Recipe, DomainError>;

    /// Delete a recipe and its associations
    async fn delete(&self, id: RecipeId) -> Result<bool, DomainError>;
}
