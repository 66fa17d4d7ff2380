//! In-memory storage implementation
//!
//! All tables live behind a single lock so that cross-table reads (the
//! `assigned_only` filter, cascading deletes) see a consistent snapshot.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    DomainError, Ingredient, IngredientId, IngredientQuery, IngredientRepository, NewIngredient,
    NewTag, NewUser, Recipe, RecipeDraft, RecipeId, RecipeRepository, Tag, TagId, TagQuery,
    TagRepository, User, UserId, UserRepository,
};
use crate::domain::recipe::sorted_unique;

use super::Repositories;

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    tags: BTreeMap<TagId, Tag>,
    ingredients: BTreeMap<IngredientId, Ingredient>,
    recipes: BTreeMap<RecipeId, Recipe>,
    user_seq: i64,
    tag_seq: i64,
    ingredient_seq: i64,
    recipe_seq: i64,
}

fn next_id(seq: &mut i64) -> i64 {
    *seq += 1;
    *seq
}

impl Tables {
    fn ensure_user(&self, id: UserId) -> Result<(), DomainError> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(DomainError::not_found(format!("User '{}' not found", id)))
        }
    }

    /// Association targets must exist, mirroring foreign-key checks
    fn ensure_references(&self, tags: &[TagId], ingredients: &[IngredientId]) -> Result<(), DomainError> {
        if let Some(missing) = tags.iter().find(|id| !self.tags.contains_key(id)) {
            return Err(DomainError::invalid_field(
                "tags",
                format!("Invalid pk \"{}\" - object does not exist.", missing),
            ));
        }

        if let Some(missing) = ingredients.iter().find(|id| !self.ingredients.contains_key(id)) {
            return Err(DomainError::invalid_field(
                "ingredients",
                format!("Invalid pk \"{}\" - object does not exist.", missing),
            ));
        }

        Ok(())
    }

    /// Remove a user and every row that depends on it
    fn cascade_delete_user(&mut self, id: UserId) -> bool {
        if self.users.remove(&id).is_none() {
            return false;
        }

        let removed_tags: HashSet<TagId> = self
            .tags
            .values()
            .filter(|t| t.user_id() == id)
            .map(Tag::id)
            .collect();
        let removed_ingredients: HashSet<IngredientId> = self
            .ingredients
            .values()
            .filter(|i| i.user_id() == id)
            .map(Ingredient::id)
            .collect();

        self.tags.retain(|_, t| t.user_id() != id);
        self.ingredients.retain(|_, i| i.user_id() != id);
        self.recipes.retain(|_, r| !r.is_owned_by(id));

        // Other users' recipes may still point at the removed rows
        for recipe in self.recipes.values_mut() {
            let mut draft = recipe.to_draft();
            let before = (draft.tags.len(), draft.ingredients.len());

            draft.tags.retain(|t| !removed_tags.contains(t));
            draft.ingredients.retain(|i| !removed_ingredients.contains(i));

            if before != (draft.tags.len(), draft.ingredients.len()) {
                recipe.apply(draft);
            }
        }

        true
    }

    fn recipes_of(&self, owner: UserId) -> impl Iterator<Item = &Recipe> {
        self.recipes.values().filter(move |r| r.is_owned_by(owner))
    }
}

type SharedTables = Arc<RwLock<Tables>>;

/// Thread-safe in-memory database
///
/// Useful for testing and development. Data is lost when the process terminates.
/// Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    tables: SharedTables,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> InMemoryUserRepository {
        InMemoryUserRepository {
            tables: self.tables.clone(),
        }
    }

    pub fn tags(&self) -> InMemoryTagRepository {
        InMemoryTagRepository {
            tables: self.tables.clone(),
        }
    }

    pub fn ingredients(&self) -> InMemoryIngredientRepository {
        InMemoryIngredientRepository {
            tables: self.tables.clone(),
        }
    }

    pub fn recipes(&self) -> InMemoryRecipeRepository {
        InMemoryRecipeRepository {
            tables: self.tables.clone(),
        }
    }

    /// Repository handles backed by this database
    pub fn repositories(&self) -> Repositories {
        Repositories {
            users: Arc::new(self.users()),
            tags: Arc::new(self.tags()),
            ingredients: Arc::new(self.ingredients()),
            recipes: Arc::new(self.recipes()),
        }
    }
}

/// In-memory implementation of UserRepository
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    tables: SharedTables,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email() == email).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.email() == user.email) {
            return Err(DomainError::conflict(format!(
                "A user with email '{}' already exists",
                user.email
            )));
        }

        let id = UserId::new(next_id(&mut tables.user_seq));
        let user = User::new(id, user);
        tables.users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;

        if !tables.users.contains_key(&user.id()) {
            return Err(DomainError::not_found(format!("User '{}' not found", user.id())));
        }

        let email_taken = tables
            .users
            .values()
            .any(|u| u.email() == user.email() && u.id() != user.id());

        if email_taken {
            return Err(DomainError::conflict(format!(
                "A user with email '{}' already exists",
                user.email()
            )));
        }

        tables.users.insert(user.id(), user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;
        Ok(tables.cascade_delete_user(id))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.len())
    }

    async fn record_login(&self, id: UserId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;

        match tables.users.get_mut(&id) {
            Some(user) => {
                user.record_login();
                Ok(())
            }
            None => Err(DomainError::not_found(format!("User '{}' not found", id))),
        }
    }
}

/// In-memory implementation of TagRepository
#[derive(Debug, Clone)]
pub struct InMemoryTagRepository {
    tables: SharedTables,
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn create(&self, tag: NewTag) -> Result<Tag, DomainError> {
        let mut tables = self.tables.write().await;
        tables.ensure_user(tag.user_id())?;

        let id = TagId::new(next_id(&mut tables.tag_seq));
        let tag = Tag::from_new(id, tag);
        tables.tags.insert(id, tag.clone());

        Ok(tag)
    }

    async fn list(&self, query: &TagQuery) -> Result<Vec<Tag>, DomainError> {
        let tables = self.tables.read().await;

        let assigned: Option<HashSet<TagId>> = query.assigned_only.then(|| {
            tables
                .recipes_of(query.owner)
                .flat_map(|r| r.tags().iter().copied())
                .collect()
        });

        let mut result: Vec<Tag> = tables
            .tags
            .values()
            .filter(|t| t.user_id() == query.owner)
            .filter(|t| assigned.as_ref().is_none_or(|ids| ids.contains(&t.id())))
            .cloned()
            .collect();

        // Code point order, as `COLLATE "C"` in the Postgres store
        result.sort_by(|a, b| b.name().cmp(a.name()).then(a.id().cmp(&b.id())));

        Ok(result)
    }

    async fn get_many(&self, ids: &[TagId]) -> Result<Vec<Tag>, DomainError> {
        let tables = self.tables.read().await;
        Ok(sorted_unique(ids.to_vec())
            .iter()
            .filter_map(|id| tables.tags.get(id).cloned())
            .collect())
    }
}

/// In-memory implementation of IngredientRepository
#[derive(Debug, Clone)]
pub struct InMemoryIngredientRepository {
    tables: SharedTables,
}

#[async_trait]
impl IngredientRepository for InMemoryIngredientRepository {
    async fn create(&self, ingredient: NewIngredient) -> Result<Ingredient, DomainError> {
        let mut tables = self.tables.write().await;
        tables.ensure_user(ingredient.user_id())?;

        let id = IngredientId::new(next_id(&mut tables.ingredient_seq));
        let ingredient = Ingredient::from_new(id, ingredient);
        tables.ingredients.insert(id, ingredient.clone());

        Ok(ingredient)
    }

    async fn list(&self, query: &IngredientQuery) -> Result<Vec<Ingredient>, DomainError> {
        let tables = self.tables.read().await;

        let assigned: Option<HashSet<IngredientId>> = query.assigned_only.then(|| {
            tables
                .recipes_of(query.owner)
                .flat_map(|r| r.ingredients().iter().copied())
                .collect()
        });

        let mut result: Vec<Ingredient> = tables
            .ingredients
            .values()
            .filter(|i| i.user_id() == query.owner)
            .filter(|i| assigned.as_ref().is_none_or(|ids| ids.contains(&i.id())))
            .cloned()
            .collect();

        result.sort_by(|a, b| b.name().cmp(a.name()).then(a.id().cmp(&b.id())));

        Ok(result)
    }

    async fn get_many(&self, ids: &[IngredientId]) -> Result<Vec<Ingredient>, DomainError> {
        let tables = self.tables.read().await;
        Ok(sorted_unique(ids.to_vec())
            .iter()
            .filter_map(|id| tables.ingredients.get(id).cloned())
            .collect())
    }
}

/// In-memory implementation of RecipeRepository
#[derive(Debug, Clone)]
pub struct InMemoryRecipeRepository {
    tables: SharedTables,
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn create(&self, owner: UserId, draft: RecipeDraft) -> Result<Recipe, DomainError> {
        let mut tables = self.tables.write().await;
        tables.ensure_user(owner)?;
        tables.ensure_references(&draft.tags, &draft.ingredients)?;

        let id = RecipeId::new(next_id(&mut tables.recipe_seq));
        let recipe = Recipe::new(id, owner, draft);
        tables.recipes.insert(id, recipe.clone());

        Ok(recipe)
    }

    async fn get(&self, id: RecipeId) -> Result<Option<Recipe>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.recipes.get(&id).cloned())
    }

    async fn list(&self, owner: UserId) -> Result<Vec<Recipe>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .recipes
            .values()
            .rev()
            .filter(|r| r.is_owned_by(owner))
            .cloned()
            .collect())
    }

    async fn update(&self, recipe: &Recipe) -> Result<Recipe, DomainError> {
        let mut tables = self.tables.write().await;

        if !tables.recipes.contains_key(&recipe.id()) {
            return Err(DomainError::not_found(format!(
                "Recipe '{}' not found",
                recipe.id()
            )));
        }

        tables.ensure_references(recipe.tags(), recipe.ingredients())?;
        tables.recipes.insert(recipe.id(), recipe.clone());

        Ok(recipe.clone())
    }

    async fn delete(&self, id: RecipeId) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;
        Ok(tables.recipes.remove(&id).is_some())
    }
}
