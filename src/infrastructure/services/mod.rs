//! Infrastructure services

mod ingredient_service;
mod recipe_service;
mod tag_service;

pub use ingredient_service::IngredientService;
pub use recipe_service::{CreateRecipeRequest, RecipeService, UpdateRecipeRequest};
pub use tag_service::TagService;
