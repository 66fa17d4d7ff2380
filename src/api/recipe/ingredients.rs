//! Ingredient endpoints

use axum::{extract::State, http::StatusCode};
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{
    ApiError, AttributeListQuery, CreateAttributeRequest, IngredientResponse, Json, Query,
};

/// GET /api/recipe/ingredients/
pub async fn list_ingredients(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Query(query): Query<AttributeListQuery>,
) -> Result<Json<Vec<IngredientResponse>>, ApiError> {
    let assigned_only = query.assigned_only();
    debug!(user_id = %user.id(), assigned_only, "Listing ingredients");

    let ingredients = state
        .ingredient_service
        .list(user.id(), assigned_only)
        .await?;

    Ok(Json(ingredients.iter().map(IngredientResponse::from).collect()))
}

/// POST /api/recipe/ingredients/
pub async fn create_ingredient(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(request): Json<CreateAttributeRequest>,
) -> Result<(StatusCode, Json<IngredientResponse>), ApiError> {
    debug!(user_id = %user.id(), name = ?request.name, "Creating ingredient");

    let ingredient = state
        .ingredient_service
        .create(user.id(), request.name.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(IngredientResponse::from(&ingredient))))
}
