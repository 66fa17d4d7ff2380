//! Recipe API: tags, ingredients and recipes scoped to the caller

pub mod ingredients;
pub mod recipes;
pub mod tags;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create the recipe router
pub fn create_recipe_router() -> Router<AppState> {
    Router::new()
        .route("/tags/", get(tags::list_tags).post(tags::create_tag))
        .route(
            "/ingredients/",
            get(ingredients::list_ingredients).post(ingredients::create_ingredient),
        )
        .route(
            "/recipes/",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        .route(
            "/recipes/{id}/",
            get(recipes::get_recipe)
                .put(recipes::replace_recipe)
                .patch(recipes::update_recipe)
                .delete(recipes::delete_recipe),
        )
        .route("/recipes/{id}/upload-image/", post(recipes::upload_image))
}
