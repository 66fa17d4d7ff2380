//! Tag endpoints

use axum::{extract::State, http::StatusCode};
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{
    ApiError, AttributeListQuery, CreateAttributeRequest, Json, Query, TagResponse,
};

/// GET /api/recipe/tags/
pub async fn list_tags(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Query(query): Query<AttributeListQuery>,
) -> Result<Json<Vec<TagResponse>>, ApiError> {
    let assigned_only = query.assigned_only();
    debug!(user_id = %user.id(), assigned_only, "Listing tags");

    let tags = state.tag_service.list(user.id(), assigned_only).await?;

    Ok(Json(tags.iter().map(TagResponse::from).collect()))
}

/// POST /api/recipe/tags/
pub async fn create_tag(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(request): Json<CreateAttributeRequest>,
) -> Result<(StatusCode, Json<TagResponse>), ApiError> {
    debug!(user_id = %user.id(), name = ?request.name, "Creating tag");

    let tag = state
        .tag_service
        .create(user.id(), request.name.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(TagResponse::from(&tag))))
}
