//! Recipe domain

mod entity;
mod price;
mod repository;

pub(crate) use entity::sorted_unique;
pub use entity::{Recipe, RecipeDetail, RecipeDraft, RecipeId};
pub use price::{Price, PriceError};
pub use repository::RecipeRepository;
