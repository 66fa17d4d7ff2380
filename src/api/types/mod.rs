//! API request and response types

pub mod error;
pub mod extract;
pub mod json;
pub mod recipe;
pub mod user;

pub use error::{ApiError, ApiErrorResponse};
pub use extract::{Path, Query};
pub use json::Json;
pub use recipe::{
    AttributeListQuery, CreateAttributeRequest, IngredientResponse, RecipeDetailResponse,
    RecipeImageRequest, RecipeImageResponse, RecipePatchRequest, RecipeResponse,
    RecipeWriteRequest, TagResponse,
};
pub use user::{CreateUserBody, TokenRequest, TokenResponse, UpdateMeRequest, UserResponse};
