//! User endpoints: signup, token issue and the authenticated profile

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{
    ApiError, CreateUserBody, Json, TokenRequest, TokenResponse, UpdateMeRequest, UserResponse,
};

const BAD_CREDENTIALS: &str = "Unable to authenticate with provided credentials.";

/// Create the user router
pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/create/", post(create_user))
        .route("/token/", post(create_token))
        .route("/me/", get(get_me).patch(update_me))
}

/// POST /api/user/create/
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserBody>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    debug!(email = ?body.email, "Creating user");

    let user = state.user_service.register(body.into()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// POST /api/user/token/
///
/// Exchanges email and password for a bearer token. Wrong credentials are
/// a 400 rather than a 401 since the caller is not presenting a token.
pub async fn create_token(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let email = required(request.email.as_deref(), "email")?;
    let password = required(request.password.as_deref(), "password")?;

    debug!(email = %email, "Issuing token");

    let user = state
        .user_service
        .authenticate(email, password)
        .await?
        .ok_or_else(|| ApiError::bad_request(BAD_CREDENTIALS).with_code("authorization"))?;

    let token = state.jwt_service.generate(&user)?;

    Ok(Json(TokenResponse { token }))
}

/// GET /api/user/me/
pub async fn get_me(RequireUser(user): RequireUser) -> Json<UserResponse> {
    Json(UserResponse::from(&user))
}

/// PATCH /api/user/me/
pub async fn update_me(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(body): Json<UpdateMeRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %user.id(), "Updating profile");

    let user = state.user_service.update_profile(user.id(), body.into()).await?;

    Ok(Json(UserResponse::from(&user)))
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::bad_request("This field is required.").with_param(field)),
    }
}
