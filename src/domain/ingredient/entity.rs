//! Ingredient entity

use serde::{Deserialize, Serialize};

use crate::domain::user::UserId;
use crate::domain::validation::clean_required_text;
use crate::domain::DomainError;

/// Numeric ingredient identifier assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(i64);

impl IngredientId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated ingredient waiting to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIngredient {
    user_id: UserId,
    name: String,
}

impl NewIngredient {
    pub fn new(user_id: UserId, name: Option<&str>) -> Result<Self, DomainError> {
        let name = clean_required_text("name", name)?;
        Ok(Self { user_id, name })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ingredient a user can reference from recipes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    id: IngredientId,
    user_id: UserId,
    name: String,
}

impl Ingredient {
    pub fn new(id: IngredientId, user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            name: name.into(),
        }
    }

    pub fn from_new(id: IngredientId, new_ingredient: NewIngredient) -> Self {
        Self::new(id, new_ingredient.user_id, new_ingredient.name)
    }

    pub fn id(&self) -> IngredientId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ingredient() {
        let ingredient = NewIngredient::new(UserId::new(1), Some("Kale")).unwrap();
        assert_eq!(ingredient.name(), "Kale");
    }

    #[test]
    fn test_new_ingredient_rejects_whitespace_name() {
        let err = NewIngredient::new(UserId::new(1), Some("   ")).unwrap_err();
        assert_eq!(err.field(), Some("name"));
    }
}
