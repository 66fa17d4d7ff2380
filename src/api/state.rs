//! Application state for shared services

use std::sync::Arc;

use crate::domain::{
    DomainError, Ingredient, IngredientRepository, Recipe, RecipeDetail, RecipeId,
    RecipeRepository, Tag, TagRepository, User, UserId, UserRepository,
};
use crate::infrastructure::auth::JwtGenerator;
use crate::infrastructure::services::{
    CreateRecipeRequest, IngredientService, RecipeService, TagService, UpdateRecipeRequest,
};
use crate::infrastructure::storage::Repositories;
use crate::infrastructure::user::{
    CreateUserRequest, PasswordHasher, UpdateProfileRequest, UserService,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub tag_service: Arc<dyn TagServiceTrait>,
    pub ingredient_service: Arc<dyn IngredientServiceTrait>,
    pub recipe_service: Arc<dyn RecipeServiceTrait>,
    pub jwt_service: Arc<dyn JwtGenerator>,
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, request: CreateUserRequest) -> Result<User, DomainError>;
    async fn create_superuser(
        &self,
        email: Option<&str>,
        password: Option<&str>,
        name: Option<&str>,
    ) -> Result<User, DomainError>;
    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>, DomainError>;
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;
    async fn update_profile(
        &self,
        id: UserId,
        request: UpdateProfileRequest,
    ) -> Result<User, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

/// Trait for tag service operations
#[async_trait::async_trait]
pub trait TagServiceTrait: Send + Sync {
    async fn list(&self, owner: UserId, assigned_only: bool) -> Result<Vec<Tag>, DomainError>;
    async fn create(&self, owner: UserId, name: Option<&str>) -> Result<Tag, DomainError>;
}

/// Trait for ingredient service operations
#[async_trait::async_trait]
pub trait IngredientServiceTrait: Send + Sync {
    async fn list(&self, owner: UserId, assigned_only: bool)
        -> Result<Vec<Ingredient>, DomainError>;
    async fn create(&self, owner: UserId, name: Option<&str>) -> Result<Ingredient, DomainError>;
}

/// Trait for recipe service operations
#[async_trait::async_trait]
pub trait RecipeServiceTrait: Send + Sync {
    async fn list(&self, owner: UserId) -> Result<Vec<Recipe>, DomainError>;
    async fn get_detail(&self, owner: UserId, id: RecipeId) -> Result<RecipeDetail, DomainError>;
    async fn create(
        &self,
        owner: UserId,
        request: CreateRecipeRequest,
    ) -> Result<Recipe, DomainError>;
    async fn replace(
        &self,
        owner: UserId,
        id: RecipeId,
        request: CreateRecipeRequest,
    ) -> Result<Recipe, DomainError>;
    async fn update(
        &self,
        owner: UserId,
        id: RecipeId,
        request: UpdateRecipeRequest,
    ) -> Result<Recipe, DomainError>;
    async fn delete(&self, owner: UserId, id: RecipeId) -> Result<(), DomainError>;
    async fn upload_image(
        &self,
        owner: UserId,
        id: RecipeId,
        image: Option<&str>,
    ) -> Result<Recipe, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<R, H> UserServiceTrait for UserService<R, H>
where
    R: UserRepository + ?Sized + 'static,
    H: PasswordHasher + ?Sized + 'static,
{
    async fn register(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        UserService::register(self, request).await
    }

    async fn create_superuser(
        &self,
        email: Option<&str>,
        password: Option<&str>,
        name: Option<&str>,
    ) -> Result<User, DomainError> {
        UserService::create_superuser(self, email, password, name).await
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>, DomainError> {
        UserService::authenticate(self, email, password).await
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        UserService::get(self, id).await
    }

    async fn update_profile(
        &self,
        id: UserId,
        request: UpdateProfileRequest,
    ) -> Result<User, DomainError> {
        UserService::update_profile(self, id, request).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        UserService::count(self).await
    }
}

#[async_trait::async_trait]
impl<R: TagRepository + ?Sized + 'static> TagServiceTrait for TagService<R> {
    async fn list(&self, owner: UserId, assigned_only: bool) -> Result<Vec<Tag>, DomainError> {
        TagService::list(self, owner, assigned_only).await
    }

    async fn create(&self, owner: UserId, name: Option<&str>) -> Result<Tag, DomainError> {
        TagService::create(self, owner, name).await
    }
}

#[async_trait::async_trait]
impl<R: IngredientRepository + ?Sized + 'static> IngredientServiceTrait for IngredientService<R> {
    async fn list(
        &self,
        owner: UserId,
        assigned_only: bool,
    ) -> Result<Vec<Ingredient>, DomainError> {
        IngredientService::list(self, owner, assigned_only).await
    }

    async fn create(&self, owner: UserId, name: Option<&str>) -> Result<Ingredient, DomainError> {
        IngredientService::create(self, owner, name).await
    }
}

#[async_trait::async_trait]
impl<R, T, I> RecipeServiceTrait for RecipeService<R, T, I>
where
    R: RecipeRepository + ?Sized + 'static,
    T: TagRepository + ?Sized + 'static,
    I: IngredientRepository + ?Sized + 'static,
{
    async fn list(&self, owner: UserId) -> Result<Vec<Recipe>, DomainError> {
        RecipeService::list(self, owner).await
    }

    async fn get_detail(&self, owner: UserId, id: RecipeId) -> Result<RecipeDetail, DomainError> {
        RecipeService::get_detail(self, owner, id).await
    }

    async fn create(
        &self,
        owner: UserId,
        request: CreateRecipeRequest,
    ) -> Result<Recipe, DomainError> {
        RecipeService::create(self, owner, request).await
    }

    async fn replace(
        &self,
        owner: UserId,
        id: RecipeId,
        request: CreateRecipeRequest,
    ) -> Result<Recipe, DomainError> {
        RecipeService::replace(self, owner, id, request).await
    }

    async fn update(
        &self,
        owner: UserId,
        id: RecipeId,
        request: UpdateRecipeRequest,
    ) -> Result<Recipe, DomainError> {
        RecipeService::update(self, owner, id, request).await
    }

    async fn delete(&self, owner: UserId, id: RecipeId) -> Result<(), DomainError> {
        RecipeService::delete(self, owner, id).await
    }

    async fn upload_image(
        &self,
        owner: UserId,
        id: RecipeId,
        image: Option<&str>,
    ) -> Result<Recipe, DomainError> {
        RecipeService::upload_image(self, owner, id, image).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        user_service: Arc<dyn UserServiceTrait>,
        tag_service: Arc<dyn TagServiceTrait>,
        ingredient_service: Arc<dyn IngredientServiceTrait>,
        recipe_service: Arc<dyn RecipeServiceTrait>,
        jwt_service: Arc<dyn JwtGenerator>,
    ) -> Self {
        Self {
            user_service,
            tag_service,
            ingredient_service,
            recipe_service,
            jwt_service,
        }
    }

    /// Wire every service onto one repository set
    pub fn from_repositories(
        repositories: Repositories,
        hasher: Arc<dyn PasswordHasher>,
        jwt_service: Arc<dyn JwtGenerator>,
    ) -> Self {
        let Repositories {
            users,
            tags,
            ingredients,
            recipes,
        } = repositories;

        Self::new(
            Arc::new(UserService::new(users, hasher)),
            Arc::new(TagService::new(tags.clone())),
            Arc::new(IngredientService::new(ingredients.clone())),
            Arc::new(RecipeService::new(recipes, tags, ingredients)),
            jwt_service,
        )
    }
}
