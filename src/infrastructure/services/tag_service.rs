//! Tag service - owner-scoped listing and creation of tags

use std::sync::Arc;

use tracing::debug;

use crate::domain::{DomainError, NewTag, Tag, TagQuery, TagRepository, UserId};

/// Tag service
#[derive(Debug)]
pub struct TagService<R: TagRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: TagRepository + ?Sized> TagService<R> {
    /// Create a new TagService with the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List the owner's tags, optionally only those used by the owner's recipes
    pub async fn list(&self, owner: UserId, assigned_only: bool) -> Result<Vec<Tag>, DomainError> {
        let query = TagQuery::new(owner).with_assigned_only(assigned_only);
        self.repository.list(&query).await
    }

    /// Create a tag owned by `owner`
    pub async fn create(&self, owner: UserId, name: Option<&str>) -> Result<Tag, DomainError> {
        let tag = self.repository.create(NewTag::new(owner, name)?).await?;

        debug!(tag_id = %tag.id(), user_id = %owner, "Created tag");
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExtraFields, NewUser, UserRepository};
    use crate::infrastructure::storage::{InMemoryDatabase, InMemoryTagRepository};

    async fn setup() -> (InMemoryDatabase, TagService<InMemoryTagRepository>, UserId) {
        let db = InMemoryDatabase::new();
        let user = db
            .users()
            .create(NewUser {
                email: "user@example.com".to_string(),
                password_hash: "hash".to_string(),
                extra: ExtraFields::default(),
            })
            .await
            .unwrap();

        let service = TagService::new(Arc::new(db.tags()));
        (db, service, user.id())
    }

    #[tokio::test]
    async fn test_create_tag() {
        let (_db, service, owner) = setup().await;

        let tag = service.create(owner, Some("Vegan")).await.unwrap();

        assert_eq!(tag.name(), "Vegan");
        assert_eq!(tag.user_id(), owner);
        assert_eq!(service.list(owner, false).await.unwrap(), vec![tag]);
    }

    #[tokio::test]
    async fn test_create_tag_invalid_name() {
        let (_db, service, owner) = setup().await;

        let err = service.create(owner, Some("")).await.unwrap_err();

        assert_eq!(err.field(), Some("name"));
        assert!(service.list(owner, false).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_ordered_by_name_desc() {
        let (_db, service, owner) = setup().await;

        service.create(owner, Some("Dessert")).await.unwrap();
        service.create(owner, Some("Vegan")).await.unwrap();
        service.create(owner, Some("Breakfast")).await.unwrap();

        let names: Vec<String> = service
            .list(owner, false)
            .await
            .unwrap()
            .iter()
            .map(|t| t.name().to_string())
            .collect();

        assert_eq!(names, vec!["Vegan", "Dessert", "Breakfast"]);
    }
}
