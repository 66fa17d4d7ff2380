//! Tag entity

use serde::{Deserialize, Serialize};

use crate::domain::user::UserId;
use crate::domain::validation::clean_required_text;
use crate::domain::DomainError;

/// Numeric tag identifier assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(i64);

impl TagId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated tag waiting to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    user_id: UserId,
    name: String,
}

impl NewTag {
    /// Validate the name and bind it to its owner
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

/// Label a user attaches to recipes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    id: TagId,
    user_id: UserId,
    name: String,
}

impl Tag {
    pub fn new(id: TagId, user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            name: name.into(),
        }
    }

    pub fn from_new(id: TagId, new_tag: NewTag) -> Self {
        Self::new(id, new_tag.user_id, new_tag.name)
    }

    pub fn id(&self) -> TagId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
