//! Recipe entity and related types

use serde::{Deserialize, Serialize};

use super::price::Price;
use crate::domain::ingredient::{Ingredient, IngredientId};
use crate::domain::tag::{Tag, TagId};
use crate::domain::user::UserId;

/// Numeric recipe identifier assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(i64);

impl RecipeId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated recipe content, without identity or image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub time_minutes: i32,
    pub price: Price,
    pub link: Option<String>,
    pub tags: Vec<TagId>,
    pub ingredients: Vec<IngredientId>,
}

/// A recipe owned by one user
///
/// Tag and ingredient IDs are kept sorted and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    id: RecipeId,
    user_id: UserId,
    title: String,
    time_minutes: i32,
    price: Price,
    link: Option<String>,
    image: Option<String>,
    tags: Vec<TagId>,
    ingredients: Vec<IngredientId>,
}

impl Recipe {
    pub fn new(id: RecipeId, user_id: UserId, draft: RecipeDraft) -> Self {
        Self {
            id,
            user_id,
            title: draft.title,
            time_minutes: draft.time_minutes,
            price: draft.price,
            link: draft.link,
            image: None,
            tags: sorted_unique(draft.tags),
            ingredients: sorted_unique(draft.ingredients),
        }
    }

    /// Restore the image reference loaded from storage
    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn time_minutes(&self) -> i32 {
        self.time_minutes
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn tags(&self) -> &[TagId] {
        &self.tags
    }

    pub fn ingredients(&self) -> &[IngredientId] {
        &self.ingredients
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Current content as a draft, for partial updates
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.clone(),
            time_minutes: self.time_minutes,
            price: self.price,
            link: self.link.clone(),
            tags: self.tags.clone(),
            ingredients: self.ingredients.clone(),
        }
    }

    /// Replace every content field; identity, owner and image are kept
    pub fn apply(&mut self, draft: RecipeDraft) {
        self.title = draft.title;
        self.time_minutes = draft.time_minutes;
        self.price = draft.price;
        self.link = draft.link;
        self.tags = sorted_unique(draft.tags);
        self.ingredients = sorted_unique(draft.ingredients);
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = Some(image.into());
    }
}

/// A recipe together with its resolved tags and ingredients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    pub tags: Vec<Tag>,
    pub ingredients: Vec<Ingredient>,
}

/// Sort IDs and drop repeats
pub(crate) fn sorted_unique<T: Ord>(mut ids: Vec<T>) -> Vec<T> {
    ids.sort();
    ids.dedup();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> RecipeDraft {
        RecipeDraft {
            title: "Chocolate cheesecake".to_string(),
            time_minutes: 10,
            price: Price::from_cents(500),
            link: None,
            tags: vec![TagId::new(2), TagId::new(1), TagId::new(2)],
            ingredients: vec![IngredientId::new(4)],
        }
    }

    #[test]
    fn test_new_recipe_dedups_relations() {
        let recipe = Recipe::new(RecipeId::new(1), UserId::new(1), sample_draft());

        assert_eq!(recipe.tags(), &[TagId::new(1), TagId::new(2)]);
        assert_eq!(recipe.ingredients(), &[IngredientId::new(4)]);
        assert!(recipe.image().is_none());
    }

    #[test]
    fn test_ownership() {
        let recipe = Recipe::new(RecipeId::new(1), UserId::new(7), sample_draft());

        assert!(recipe.is_owned_by(UserId::new(7)));
        assert!(!recipe.is_owned_by(UserId::new(8)));
    }

    #[test]
    fn test_apply_keeps_image() {
        let mut recipe = Recipe::new(RecipeId::new(1), UserId::new(1), sample_draft());
        recipe.set_image("uploads/recipe/1.jpg");

        let mut draft = recipe.to_draft();
        draft.title = "Spaghetti".to_string();
        draft.tags.clear();
        recipe.apply(draft);

        assert_eq!(recipe.title(), "Spaghetti");
        assert!(recipe.tags().is_empty());
        assert_eq!(recipe.image(), Some("uploads/recipe/1.jpg"));
    }
}
