//! Ingredient repository trait

use async_trait::async_trait;

use super::entity::{Ingredient, IngredientId, NewIngredient};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Query parameters for listing a user's ingredients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientQuery {
    pub owner: UserId,
    /// Restrict to ingredients used by at least one of the owner's recipes
    pub assigned_only: bool,
}

impl IngredientQuery {
    pub fn new(owner: UserId) -> Self {
        Self {
            owner,
            assigned_only: false,
        }
    }

    pub fn with_assigned_only(mut self, assigned_only: bool) -> Self {
        self.assigned_only = assigned_only;
        self
    }
}

/// Repository for managing ingredients
#[async_trait]
pub trait IngredientRepository: Send + Sync + std::fmt::Debug {
    async fn create(&self, ingredient: NewIngredient) -> Result<Ingredient, DomainError>;

    /// Same ordering and deduplication contract as tag listing
    async fn list(&self, query: &IngredientQuery) -> Result<Vec<Ingredient>, DomainError>;

    /// Same lookup contract as `TagRepository::get_many`
    async fn get_many(&self, ids: &[IngredientId]) -> Result<Vec<Ingredient>, DomainError>;
}
