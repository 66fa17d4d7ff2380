//! Recipe endpoints

use axum::{extract::State, http::StatusCode};
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{
    ApiError, Json, Path, RecipeDetailResponse, RecipeImageRequest, RecipeImageResponse,
    RecipePatchRequest, RecipeResponse, RecipeWriteRequest,
};
use crate::domain::RecipeId;
use crate::infrastructure::services::CreateRecipeRequest;

/// GET /api/recipe/recipes/
pub async fn list_recipes(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    debug!(user_id = %user.id(), "Listing recipes");

    let recipes = state.recipe_service.list(user.id()).await?;

    Ok(Json(recipes.iter().map(RecipeResponse::from).collect()))
}

/// POST /api/recipe/recipes/
pub async fn create_recipe(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(request): Json<RecipeWriteRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), ApiError> {
    debug!(user_id = %user.id(), title = ?request.title, "Creating recipe");

    let request = CreateRecipeRequest::try_from(request)?;
    let recipe = state.recipe_service.create(user.id(), request).await?;

    Ok((StatusCode::CREATED, Json(RecipeResponse::from(&recipe))))
}

/// GET /api/recipe/recipes/{id}/
pub async fn get_recipe(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<RecipeId>,
) -> Result<Json<RecipeDetailResponse>, ApiError> {
    debug!(user_id = %user.id(), recipe_id = %id, "Getting recipe");

    let detail = state.recipe_service.get_detail(user.id(), id).await?;

    Ok(Json(RecipeDetailResponse::from(&detail)))
}

/// PUT /api/recipe/recipes/{id}/
pub async fn replace_recipe(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<RecipeId>,
    Json(request): Json<RecipeWriteRequest>,
) -> Result<Json<RecipeResponse>, ApiError> {
    debug!(user_id = %user.id(), recipe_id = %id, "Replacing recipe");

    let request = CreateRecipeRequest::try_from(request)?;
    let recipe = state
        .recipe_service
        .replace(user.id(), id, request)
        .await?;

    Ok(Json(RecipeResponse::from(&recipe)))
}

/// PATCH /api/recipe/recipes/{id}/
pub async fn update_recipe(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<RecipeId>,
    Json(request): Json<RecipePatchRequest>,
) -> Result<Json<RecipeResponse>, ApiError> {
    debug!(user_id = %user.id(), recipe_id = %id, "Updating recipe");

    let recipe = state
        .recipe_service
        .update(user.id(), id, request.into())
        .await?;

    Ok(Json(RecipeResponse::from(&recipe)))
}

/// DELETE /api/recipe/recipes/{id}/
pub async fn delete_recipe(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<RecipeId>,
) -> Result<StatusCode, ApiError> {
    debug!(user_id = %user.id(), recipe_id = %id, "Deleting recipe");

    state.recipe_service.delete(user.id(), id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/recipe/recipes/{id}/upload-image/
pub async fn upload_image(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<RecipeId>,
    Json(request): Json<RecipeImageRequest>,
) -> Result<Json<RecipeImageResponse>, ApiError> {
    debug!(user_id = %user.id(), recipe_id = %id, "Uploading recipe image");

    let recipe = state
        .recipe_service
        .upload_image(user.id(), id, request.image.as_deref())
        .await?;

    Ok(Json(RecipeImageResponse::from(&recipe)))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::api::test_support::TestApp;

    const RECIPES_URL: &str = "/api/recipe/recipes/";

    fn detail_url(id: i64) -> String {
        format!("/api/recipe/recipes/{}/", id)
    }

    #[tokio::test]
    async fn test_login_required() {
        let app = TestApp::new();

        let (status, _) = app.send(Method::GET, RECIPES_URL, None, None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_retrieve_recipes_newest_first() {
        let app = TestApp::new();
        let (user, token) = app.create_user("test@example.com").await;
        let first = app.create_recipe(user.id(), "First", vec![], vec![]).await;
        let second = app.create_recipe(user.id(), "Second", vec![], vec![]).await;

        let (status, body) = app.send(Method::GET, RECIPES_URL, Some(&token), None).await;

        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![second.id().as_i64(), first.id().as_i64()]);
        assert_eq!(body[0]["price"], "5.00");
    }

    #[tokio::test]
    async fn test_recipes_limited_to_user() {
        let app = TestApp::new();
        let (other, _) = app.create_user("other@example.com").await;
        app.create_recipe(other.id(), "Not mine", vec![], vec![]).await;

        let (user, token) = app.create_user("test@example.com").await;
        app.create_recipe(user.id(), "Mine", vec![], vec![]).await;

        let (_, body) = app.send(Method::GET, RECIPES_URL, Some(&token), None).await;

        let recipes = body.as_array().unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0]["title"], "Mine");
    }

    #[tokio::test]
    async fn test_view_recipe_detail_nests_objects() {
        let app = TestApp::new();
        let (user, token) = app.create_user("test@example.com").await;
        let tag = app.create_tag(user.id(), "Vegan").await;
        let ingredient = app.create_ingredient(user.id(), "Kale").await;
        let recipe = app
            .create_recipe(user.id(), "Kale salad", vec![tag.id()], vec![ingredient.id()])
            .await;

        let (status, body) = app
            .send(Method::GET, &detail_url(recipe.id().as_i64()), Some(&token), None)
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tags"], json!([{"id": tag.id().as_i64(), "name": "Vegan"}]));
        assert_eq!(
            body["ingredients"],
            json!([{"id": ingredient.id().as_i64(), "name": "Kale"}])
        );
    }

    #[tokio::test]
    async fn test_other_users_recipe_is_not_found() {
        let app = TestApp::new();
        let (other, _) = app.create_user("other@example.com").await;
        let recipe = app.create_recipe(other.id(), "Secret", vec![], vec![]).await;
        let (_, token) = app.create_user("test@example.com").await;

        let (status, _) = app
            .send(Method::GET, &detail_url(recipe.id().as_i64()), Some(&token), None)
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_basic_recipe() {
        let app = TestApp::new();
        let (_, token) = app.create_user("test@example.com").await;

        let (status, body) = app
            .send(
                Method::POST,
                RECIPES_URL,
                Some(&token),
                Some(json!({
                    "title": "Chocolate cheesecake",
                    "time_minutes": 30,
                    "price": 5.00,
                    "tags": [],
                    "ingredients": []
                })),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["title"], "Chocolate cheesecake");
        assert_eq!(body["time_minutes"], 30);
        assert_eq!(body["price"], "5.00");
        assert_eq!(body["link"], "");
    }

    #[tokio::test]
    async fn test_create_recipe_with_tags() {
        let app = TestApp::new();
        let (user, token) = app.create_user("test@example.com").await;
        let vegan = app.create_tag(user.id(), "Vegan").await;
        let dessert = app.create_tag(user.id(), "Dessert").await;

        let (status, body) = app
            .send(
                Method::POST,
                RECIPES_URL,
                Some(&token),
                Some(json!({
                    "title": "Avocado lime cheesecake",
                    "tags": [dessert.id().as_i64(), vegan.id().as_i64()],
                    "ingredients": [],
                    "time_minutes": 60,
                    "price": "20.00"
                })),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body["tags"],
            json!([vegan.id().as_i64(), dessert.id().as_i64()])
        );
    }

    #[tokio::test]
    async fn test_create_recipe_unknown_tag() {
        let app = TestApp::new();
        let (user, token) = app.create_user("test@example.com").await;

        let (status, body) = app
            .send(
                Method::POST,
                RECIPES_URL,
                Some(&token),
                Some(json!({
                    "title": "Ghost",
                    "tags": [999],
                    "ingredients": [],
                    "time_minutes": 5,
                    "price": "1.00"
                })),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["param"], "tags");
        assert!(app.state.recipe_service.list(user.id()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_recipe_missing_title() {
        let app = TestApp::new();
        let (_, token) = app.create_user("test@example.com").await;

        let (status, body) = app
            .send(
                Method::POST,
                RECIPES_URL,
                Some(&token),
                Some(json!({"time_minutes": 5, "price": "1.00", "tags": [], "ingredients": []})),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["param"], "title");
    }

    #[tokio::test]
    async fn test_create_recipe_missing_tags() {
        let app = TestApp::new();
        let (user, token) = app.create_user("test@example.com").await;

        let (status, body) = app
            .send(
                Method::POST,
                RECIPES_URL,
                Some(&token),
                Some(json!({"title": "Soup", "time_minutes": 5, "price": "1.00", "ingredients": []})),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["param"], "tags");
        assert_eq!(body["error"]["message"], "This field is required.");
        assert!(app.state.recipe_service.list(user.id()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_full_update_requires_ingredients() {
        let app = TestApp::new();
        let (user, token) = app.create_user("test@example.com").await;
        let recipe = app.create_recipe(user.id(), "Toast", vec![], vec![]).await;

        let (status, body) = app
            .send(
                Method::PUT,
                &detail_url(recipe.id().as_i64()),
                Some(&token),
                Some(json!({"title": "Bagel", "time_minutes": 5, "price": "1.00", "tags": []})),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["param"], "ingredients");
    }

    #[tokio::test]
    async fn test_create_recipe_non_numeric_minutes() {
        let app = TestApp::new();
        let (_, token) = app.create_user("test@example.com").await;

        let (status, _) = app
            .send(
                Method::POST,
                RECIPES_URL,
                Some(&token),
                Some(json!({"title": "Soup", "time_minutes": "soon", "price": "1.00"})),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_partial_update_recipe() {
        let app = TestApp::new();
        let (user, token) = app.create_user("test@example.com").await;
        let old_tag = app.create_tag(user.id(), "Old").await;
        let curry = app.create_tag(user.id(), "Curry").await;
        let recipe = app
            .create_recipe(user.id(), "Chicken tikka", vec![old_tag.id()], vec![])
            .await;

        let (status, body) = app
            .send(
                Method::PATCH,
                &detail_url(recipe.id().as_i64()),
                Some(&token),
                Some(json!({"title": "Chicken tikka masala", "tags": [curry.id().as_i64()]})),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Chicken tikka masala");
        assert_eq!(body["tags"], json!([curry.id().as_i64()]));
        assert_eq!(body["time_minutes"], 10);
    }

    #[tokio::test]
    async fn test_full_update_recipe() {
        let app = TestApp::new();
        let (user, token) = app.create_user("test@example.com").await;
        let tag = app.create_tag(user.id(), "Curry").await;
        let recipe = app
            .create_recipe(user.id(), "Chicken tikka", vec![tag.id()], vec![])
            .await;

        let (status, body) = app
            .send(
                Method::PUT,
                &detail_url(recipe.id().as_i64()),
                Some(&token),
                Some(json!({
                    "title": "Spaghetti carbonara",
                    "time_minutes": 25,
                    "price": "5.00",
                    "tags": [],
                    "ingredients": []
                })),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Spaghetti carbonara");
        assert_eq!(body["time_minutes"], 25);
        assert_eq!(body["tags"], json!([]));
    }

    #[tokio::test]
    async fn test_non_numeric_recipe_id_uses_error_body() {
        let app = TestApp::new();
        let (_, token) = app.create_user("test@example.com").await;

        let (status, body) = app
            .send(Method::GET, "/api/recipe/recipes/abc/", Some(&token), None)
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "invalid_request_error");
        assert_eq!(body["error"]["code"], "parse_error");
    }

    #[tokio::test]
    async fn test_delete_recipe() {
        let app = TestApp::new();
        let (user, token) = app.create_user("test@example.com").await;
        let recipe = app.create_recipe(user.id(), "Toast", vec![], vec![]).await;

        let (status, _) = app
            .send(Method::DELETE, &detail_url(recipe.id().as_i64()), Some(&token), None)
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = app
            .send(Method::GET, &detail_url(recipe.id().as_i64()), Some(&token), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upload_image() {
        let app = TestApp::new();
        let (user, token) = app.create_user("test@example.com").await;
        let recipe = app.create_recipe(user.id(), "Toast", vec![], vec![]).await;
        let url = format!("/api/recipe/recipes/{}/upload-image/", recipe.id().as_i64());

        let (status, body) = app
            .send(
                Method::POST,
                &url,
                Some(&token),
                Some(json!({"image": "uploads/recipe/toast.jpg"})),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"id": recipe.id().as_i64(), "image": "uploads/recipe/toast.jpg"})
        );
    }

    #[tokio::test]
    async fn test_upload_image_bad_request() {
        let app = TestApp::new();
        let (user, token) = app.create_user("test@example.com").await;
        let recipe = app.create_recipe(user.id(), "Toast", vec![], vec![]).await;
        let url = format!("/api/recipe/recipes/{}/upload-image/", recipe.id().as_i64());

        let (status, body) = app
            .send(Method::POST, &url, Some(&token), Some(json!({"image": ""})))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["param"], "image");
    }
}
