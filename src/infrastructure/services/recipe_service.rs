//! Recipe service - owner-scoped CRUD for recipes and their associations

use std::sync::Arc;

use tracing::debug;

use crate::domain::recipe::sorted_unique;
use crate::domain::validation::{clean_optional_text, clean_required_text, REQUIRED_MESSAGE};
use crate::domain::{
    DomainError, IngredientId, IngredientRepository, Price, Recipe, RecipeDetail, RecipeDraft,
    RecipeId, RecipeRepository, TagId, TagRepository, UserId,
};

/// Full recipe payload, used for create and full replacement
#[derive(Debug, Clone, Default)]
pub struct CreateRecipeRequest {
    pub title: Option<String>,
    pub time_minutes: Option<i32>,
    pub price: Option<Price>,
    pub link: Option<String>,
    pub tags: Vec<TagId>,
    pub ingredients: Vec<IngredientId>,
}

/// Partial recipe update; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub time_minutes: Option<i32>,
    pub price: Option<Price>,
    /// An empty string clears the link
    pub link: Option<String>,
    pub tags: Option<Vec<TagId>>,
    pub ingredients: Option<Vec<IngredientId>>,
}

/// Recipe service
///
/// Every operation is scoped to the calling user: a recipe owned by someone
/// else is reported as not found.
#[derive(Debug)]
pub struct RecipeService<R, T, I>
where
    R: RecipeRepository + ?Sized,
    T: TagRepository + ?Sized,
    I: IngredientRepository + ?Sized,
{
    recipes: Arc<R>,
    tags: Arc<T>,
    ingredients: Arc<I>,
}

impl<R, T, I> RecipeService<R, T, I>
where
    R: RecipeRepository + ?Sized,
    T: TagRepository + ?Sized,
    I: IngredientRepository + ?Sized,
{
    pub fn new(recipes: Arc<R>, tags: Arc<T>, ingredients: Arc<I>) -> Self {
        Self {
            recipes,
            tags,
            ingredients,
        }
    }

    /// List the owner's recipes, newest first
    pub async fn list(&self, owner: UserId) -> Result<Vec<Recipe>, DomainError> {
        self.recipes.list(owner).await
    }

    /// Get one of the owner's recipes
    pub async fn get(&self, owner: UserId, id: RecipeId) -> Result<Recipe, DomainError> {
        self.recipes
            .get(id)
            .await?
            .filter(|recipe| recipe.is_owned_by(owner))
            .ok_or_else(|| DomainError::not_found(format!("Recipe '{}' not found", id)))
    }

    /// Get one of the owner's recipes with its tags and ingredients resolved
    pub async fn get_detail(&self, owner: UserId, id: RecipeId) -> Result<RecipeDetail, DomainError> {
        let recipe = self.get(owner, id).await?;
        let tags = self.tags.get_many(recipe.tags()).await?;
        let ingredients = self.ingredients.get_many(recipe.ingredients()).await?;

        Ok(RecipeDetail {
            recipe,
            tags,
            ingredients,
        })
    }

    /// Create a recipe owned by `owner`
    pub async fn create(
        &self,
        owner: UserId,
        request: CreateRecipeRequest,
    ) -> Result<Recipe, DomainError> {
        let draft = build_draft(request)?;
        self.ensure_references(&draft).await?;

        let recipe = self.recipes.create(owner, draft).await?;

        debug!(recipe_id = %recipe.id(), user_id = %owner, "Created recipe");
        Ok(recipe)
    }

    /// Replace every content field of a recipe
    pub async fn replace(
        &self,
        owner: UserId,
        id: RecipeId,
        request: CreateRecipeRequest,
    ) -> Result<Recipe, DomainError> {
        let mut recipe = self.get(owner, id).await?;

        let draft = build_draft(request)?;
        self.ensure_references(&draft).await?;

        recipe.apply(draft);
        self.recipes.update(&recipe).await
    }

    /// Apply a partial update to a recipe
    pub async fn update(
        &self,
        owner: UserId,
        id: RecipeId,
        request: UpdateRecipeRequest,
    ) -> Result<Recipe, DomainError> {
        let mut recipe = self.get(owner, id).await?;
        let mut draft = recipe.to_draft();

        if let Some(title) = request.title {
            draft.title = clean_required_text("title", Some(&title))?;
        }

        if let Some(time_minutes) = request.time_minutes {
            draft.time_minutes = time_minutes;
        }

        if let Some(price) = request.price {
            draft.price = price;
        }

        if let Some(link) = request.link {
            draft.link = clean_optional_text("link", Some(&link))?;
        }

        if let Some(tags) = request.tags {
            draft.tags = sorted_unique(tags);
        }

        if let Some(ingredients) = request.ingredients {
            draft.ingredients = sorted_unique(ingredients);
        }

        self.ensure_references(&draft).await?;

        recipe.apply(draft);
        self.recipes.update(&recipe).await
    }

    /// Delete one of the owner's recipes
    pub async fn delete(&self, owner: UserId, id: RecipeId) -> Result<(), DomainError> {
        let recipe = self.get(owner, id).await?;

        if !self.recipes.delete(recipe.id()).await? {
            return Err(DomainError::not_found(format!("Recipe '{}' not found", id)));
        }

        debug!(recipe_id = %id, user_id = %owner, "Deleted recipe");
        Ok(())
    }

    /// Attach an image reference to one of the owner's recipes
    pub async fn upload_image(
        &self,
        owner: UserId,
        id: RecipeId,
        image: Option<&str>,
    ) -> Result<Recipe, DomainError> {
        let mut recipe = self.get(owner, id).await?;

        recipe.set_image(clean_required_text("image", image)?);
        self.recipes.update(&recipe).await
    }

    /// Every referenced tag and ingredient must exist; ownership is not checked
    async fn ensure_references(&self, draft: &RecipeDraft) -> Result<(), DomainError> {
        let tags = self.tags.get_many(&draft.tags).await?;

        if let Some(missing) = draft
            .tags
            .iter()
            .find(|id| !tags.iter().any(|t| t.id() == **id))
        {
            return Err(does_not_exist("tags", missing));
        }

        let ingredients = self.ingredients.get_many(&draft.ingredients).await?;

        if let Some(missing) = draft
            .ingredients
            .iter()
            .find(|id| !ingredients.iter().any(|i| i.id() == **id))
        {
            return Err(does_not_exist("ingredients", missing));
        }

        Ok(())
    }
}

fn does_not_exist(field: &str, id: impl std::fmt::Display) -> DomainError {
    DomainError::invalid_field(
        field,
        format!("Invalid pk \"{}\" - object does not exist.", id),
    )
}

fn build_draft(request: CreateRecipeRequest) -> Result<RecipeDraft, DomainError> {
    let title = clean_required_text("title", request.title.as_deref())?;

    let time_minutes = request
        .time_minutes
        .ok_or_else(|| DomainError::invalid_field("time_minutes", REQUIRED_MESSAGE))?;

    let price = request
        .price
        .ok_or_else(|| DomainError::invalid_field("price", REQUIRED_MESSAGE))?;

    let link = clean_optional_text("link", request.link.as_deref())?;

    Ok(RecipeDraft {
        title,
        time_minutes,
        price,
        link,
        tags: sorted_unique(request.tags),
        ingredients: sorted_unique(request.ingredients),
    })
}
