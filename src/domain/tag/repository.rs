//! Tag repository trait

use async_trait::async_trait;

use super::entity::{NewTag, Tag, TagId};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Query parameters for listing a user's tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagQuery {
    /// Only tags owned by this user are returned
    pub owner: UserId,
    /// Restrict to tags referenced by at least one of the owner's recipes
    pub assigned_only: bool,
}

impl TagQuery {
    pub fn new(owner: UserId) -> Self {
        Self {
            owner,
            assigned_only: false,
        }
    }

    pub fn with_assigned_only(mut self, assigned_only: bool) -> Self {
        self.assigned_only = assigned_only;
        self
    }
}

/// Repository for managing tags
#[async_trait]
pub trait TagRepository: Send + Sync + std::fmt::Debug {
    /// Persist a new tag, assigning its ID
    async fn create(&self, tag: NewTag) -> Result<Tag, DomainError>;

    /// List tags matching the query, ordered by name descending then ID
    /// ascending. Each tag appears at most once.
    async fn list(&self, query: &TagQuery) -> Result<Vec<Tag>, DomainError>;

    /// Fetch the tags with the given IDs, regardless of owner, ordered by
    /// ID. Unknown IDs are skipped.
    async fn get_many(&self, ids: &[TagId]) -> Result<Vec<Tag>, DomainError>;
}
