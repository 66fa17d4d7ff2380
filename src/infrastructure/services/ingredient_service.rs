//! Ingredient service

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    DomainError, Ingredient, IngredientQuery, IngredientRepository, NewIngredient, UserId,
};

/// Ingredient service, the counterpart of `TagService` for ingredients
#[derive(Debug)]
pub struct IngredientService<R: IngredientRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: IngredientRepository + ?Sized> IngredientService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list(
        &self,
        owner: UserId,
        assigned_only: bool,
    ) -> Result<Vec<Ingredient>, DomainError> {
        let query = IngredientQuery::new(owner).with_assigned_only(assigned_only);
        self.repository.list(&query).await
    }

    pub async fn create(
        &self,
        owner: UserId,
        name: Option<&str>,
    ) -> Result<Ingredient, DomainError> {
        let ingredient = self
            .repository
            .create(NewIngredient::new(owner, name)?)
            .await?;

        debug!(ingredient_id = %ingredient.id(), user_id = %owner, "Created ingredient");
        Ok(ingredient)
    }
}
