use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::logging_middleware;
use super::recipe;
use super::state::AppState;
use super::user;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints (no auth)
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Signup and token issue are public; /me requires a token
        .nest("/api/user", user::create_user_router())
        // Owner-scoped resources
        .nest("/api/recipe", recipe::create_recipe_router())
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use crate::api::test_support::TestApp;

    #[tokio::test]
    async fn test_health() {
        let app = TestApp::new();

        let (status, body) = app.send(Method::GET, "/health", None, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_live() {
        let app = TestApp::new();

        let (status, _) = app.send(Method::GET, "/live", None, None).await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = TestApp::new();

        let (status, _) = app.send(Method::GET, "/api/recipe/nope/", None, None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
