//! Request and response shapes for tags, ingredients and recipes
//!
//! Recipes have three independent shapes: the list/write form with bare
//! tag and ingredient IDs, the read-only detail form with nested objects,
//! and the image form.

use serde::{Deserialize, Serialize};

use crate::domain::validation::REQUIRED_MESSAGE;
use crate::domain::{
    DomainError, Ingredient, IngredientId, Price, Recipe, RecipeDetail, RecipeId, Tag, TagId,
};
use crate::infrastructure::services::{CreateRecipeRequest, UpdateRecipeRequest};

/// Body for creating a tag or an ingredient
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAttributeRequest {
    pub name: Option<String>,
}

/// Query string for tag and ingredient listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttributeListQuery {
    /// Any non-zero value restricts the listing to assigned items
    pub assigned_only: Option<i64>,
}

impl AttributeListQuery {
    pub fn assigned_only(&self) -> bool {
        self.assigned_only.is_some_and(|v| v != 0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagResponse {
    pub id: TagId,
    pub name: String,
}

impl From<&Tag> for TagResponse {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id(),
            name: tag.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientResponse {
    pub id: IngredientId,
    pub name: String,
}

impl From<&Ingredient> for IngredientResponse {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id(),
            name: ingredient.name().to_string(),
        }
    }
}

/// Recipe in list/write form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub id: RecipeId,
    pub title: String,
    pub time_minutes: i32,
    pub tags: Vec<TagId>,
    pub ingredients: Vec<IngredientId>,
    pub price: Price,
    /// Empty when the recipe has no link
    pub link: String,
}

impl From<&Recipe> for RecipeResponse {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id(),
            title: recipe.title().to_string(),
            time_minutes: recipe.time_minutes(),
            tags: recipe.tags().to_vec(),
            ingredients: recipe.ingredients().to_vec(),
            price: recipe.price(),
            link: recipe.link().unwrap_or_default().to_string(),
        }
    }
}

/// Recipe in detail form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDetailResponse {
    pub id: RecipeId,
    pub title: String,
    pub time_minutes: i32,
    pub tags: Vec<TagResponse>,
    pub ingredients: Vec<IngredientResponse>,
    pub price: Price,
    pub link: String,
}

impl From<&RecipeDetail> for RecipeDetailResponse {
    fn from(detail: &RecipeDetail) -> Self {
        let recipe = &detail.recipe;

        Self {
            id: recipe.id(),
            title: recipe.title().to_string(),
            time_minutes: recipe.time_minutes(),
            tags: detail.tags.iter().map(TagResponse::from).collect(),
            ingredients: detail.ingredients.iter().map(IngredientResponse::from).collect(),
            price: recipe.price(),
            link: recipe.link().unwrap_or_default().to_string(),
        }
    }
}

/// Recipe in image form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeImageResponse {
    pub id: RecipeId,
    pub image: Option<String>,
}

impl From<&Recipe> for RecipeImageResponse {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id(),
            image: recipe.image().map(str::to_string),
        }
    }
}

/// Write-form body for create and full update. `id` is read-only and ignored.
///
/// `tags` and `ingredients` must be present; send `[]` for none.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeWriteRequest {
    pub title: Option<String>,
    pub time_minutes: Option<i32>,
    pub price: Option<Price>,
    pub link: Option<String>,
    pub tags: Option<Vec<TagId>>,
    pub ingredients: Option<Vec<IngredientId>>,
}

impl TryFrom<RecipeWriteRequest> for CreateRecipeRequest {
    type Error = DomainError;

    fn try_from(request: RecipeWriteRequest) -> Result<Self, Self::Error> {
        let tags = request
            .tags
            .ok_or_else(|| DomainError::invalid_field("tags", REQUIRED_MESSAGE))?;
        let ingredients = request
            .ingredients
            .ok_or_else(|| DomainError::invalid_field("ingredients", REQUIRED_MESSAGE))?;

        Ok(Self {
            title: request.title,
            time_minutes: request.time_minutes,
            price: request.price,
            link: request.link,
            tags,
            ingredients,
        })
    }
}

/// Write-form body for partial update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipePatchRequest {
    pub title: Option<String>,
    pub time_minutes: Option<i32>,
    pub price: Option<Price>,
    pub link: Option<String>,
    pub tags: Option<Vec<TagId>>,
    pub ingredients: Option<Vec<IngredientId>>,
}

impl From<RecipePatchRequest> for UpdateRecipeRequest {
    fn from(request: RecipePatchRequest) -> Self {
        Self {
            title: request.title,
            time_minutes: request.time_minutes,
            price: request.price,
            link: request.link,
            tags: request.tags,
            ingredients: request.ingredients,
        }
    }
}

/// Image-form body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeImageRequest {
    pub image: Option<String>,
}
