//! Recipe infrastructure module
//!
//! PostgreSQL repositories for tags, ingredients and recipes.

mod attribute_repository;
mod recipe_repository;

pub use attribute_repository::{PostgresIngredientRepository, PostgresTagRepository};
pub use recipe_repository::PostgresRecipeRepository;
