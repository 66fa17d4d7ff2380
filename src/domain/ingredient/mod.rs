//! Ingredient domain

mod entity;
mod repository;

pub use entity::{Ingredient, IngredientId, NewIngredient};
pub use repository::{IngredientQuery, IngredientRepository};
