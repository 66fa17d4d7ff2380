//! Domain layer - Core entities, validation rules and repository traits

pub mod error;
pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod user;
pub mod validation;

pub use error::DomainError;
pub use ingredient::{Ingredient, IngredientId, IngredientQuery, IngredientRepository, NewIngredient};
pub use recipe::{Price, Recipe, RecipeDetail, RecipeDraft, RecipeId, RecipeRepository};
pub use tag::{NewTag, Tag, TagId, TagQuery, TagRepository};
pub use user::{ExtraFields, NewUser, User, UserId, UserRepository};
