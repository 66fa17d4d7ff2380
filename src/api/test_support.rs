//! In-process test harness driving the full router over the in-memory store

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use super::router::create_router;
use super::state::AppState;
use crate::domain::{Ingredient, IngredientId, Price, Recipe, Tag, TagId, User, UserId};
use crate::infrastructure::auth::{JwtGenerator, JwtService};
use crate::infrastructure::services::CreateRecipeRequest;
use crate::infrastructure::storage::Repositories;
use crate::infrastructure::user::{Argon2Hasher, CreateUserRequest};

pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub const PASSWORD: &'static str = "testpass123";

    pub fn new() -> Self {
        let hasher = Argon2Hasher::with_cost(8, 1).unwrap();
        let state = AppState::from_repositories(
            Repositories::in_memory(),
            Arc::new(hasher),
            Arc::new(JwtService::with_default_config()),
        );

        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    /// Register a user and mint a bearer token for them
    pub async fn create_user(&self, email: &str) -> (User, String) {
        let user = self
            .state
            .user_service
            .register(CreateUserRequest {
                email: Some(email.to_string()),
                password: Some(Self::PASSWORD.to_string()),
                name: Some("Test User".to_string()),
            })
            .await
            .unwrap();
        let token = self.state.jwt_service.generate(&user).unwrap();

        (user, token)
    }

    pub async fn user_count(&self) -> usize {
        self.state.user_service.count().await.unwrap()
    }

    pub async fn create_tag(&self, owner: UserId, name: &str) -> Tag {
        self.state.tag_service.create(owner, Some(name)).await.unwrap()
    }

    pub async fn create_ingredient(&self, owner: UserId, name: &str) -> Ingredient {
        self.state
            .ingredient_service
            .create(owner, Some(name))
            .await
            .unwrap()
    }

    /// Recipe with 10 minutes and a price of 5.00
    pub async fn create_recipe(
        &self,
        owner: UserId,
        title: &str,
        tags: Vec<TagId>,
        ingredients: Vec<IngredientId>,
    ) -> Recipe {
        self.state
            .recipe_service
            .create(
                owner,
                CreateRecipeRequest {
                    title: Some(title.to_string()),
                    time_minutes: Some(10),
                    price: Some(Price::from_cents(500)),
                    link: None,
                    tags,
                    ingredients,
                },
            )
            .await
            .unwrap()
    }

    /// Send a request through the router. A body that is not JSON comes
    /// back as `Value::Null`.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }
}
