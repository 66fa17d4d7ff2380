//! PostgreSQL repositories for tags and ingredients
//!
//! Both tables share one shape (`id`, `user_id`, `name`) and are linked to
//! recipes through a join table, so the queries are written once against an
//! [`AttributeTable`] description.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::{
    DomainError, Ingredient, IngredientId, IngredientQuery, IngredientRepository, NewIngredient,
    NewTag, Tag, TagId, TagQuery, TagRepository, UserId,
};

/// Table layout of a user-owned recipe attribute
#[derive(Debug, Clone, Copy)]
struct AttributeTable {
    table: &'static str,
    link_table: &'static str,
    link_column: &'static str,
    label: &'static str,
}

const TAGS: AttributeTable = AttributeTable {
    table: "tags",
    link_table: "recipe_tags",
    link_column: "tag_id",
    label: "tag",
};

const INGREDIENTS: AttributeTable = AttributeTable {
    table: "ingredients",
    link_table: "recipe_ingredients",
    link_column: "ingredient_id",
    label: "ingredient",
};

/// Raw `(id, user_id, name)` row
type AttributeRow = (i64, UserId, String);

impl AttributeTable {
    fn insert_sql(&self) -> String {
        format!(
            "INSERT INTO {} (user_id, name) VALUES ($1, $2) RETURNING id, user_id, name",
            self.table
        )
    }

    /// `$1` is the owner, `$2` toggles the assigned-only restriction.
    /// Names compare by code point so the order is independent of the
    /// database locale and matches the in-memory store.
    fn list_sql(&self) -> String {
        format!(
            r#"
            SELECT a.id, a.user_id, a.name
            FROM {table} a
            WHERE a.user_id = $1
              AND (NOT $2 OR EXISTS (
                  SELECT 1
                  FROM {link} l
                  JOIN recipes r ON r.id = l.recipe_id
                  WHERE l.{column} = a.id AND r.user_id = $1
              ))
            ORDER BY a.name COLLATE "C" DESC, a.id ASC
            "#,
            table = self.table,
            link = self.link_table,
            column = self.link_column,
        )
    }

    fn get_many_sql(&self) -> String {
        format!(
            "SELECT id, user_id, name FROM {} WHERE id = ANY($1) ORDER BY id",
            self.table
        )
    }

    async fn insert(
        &self,
        pool: &PgPool,
        owner: UserId,
        name: &str,
    ) -> Result<AttributeRow, DomainError> {
        let row = sqlx::query(&self.insert_sql())
            .bind(owner.as_i64())
            .bind(name)
            .fetch_one(pool)
            .await
            .map_err(|e| {
                let msg = e.to_string();

                if msg.contains("foreign key") {
                    DomainError::not_found(format!("User '{}' not found", owner))
                } else {
                    DomainError::storage(format!("Failed to create {}: {}", self.label, e))
                }
            })?;

        Ok(read_row(&row))
    }

    async fn list(
        &self,
        pool: &PgPool,
        owner: UserId,
        assigned_only: bool,
    ) -> Result<Vec<AttributeRow>, DomainError> {
        let rows = sqlx::query(&self.list_sql())
            .bind(owner.as_i64())
            .bind(assigned_only)
            .fetch_all(pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list {}s: {}", self.label, e)))?;

        Ok(rows.iter().map(read_row).collect())
    }

    async fn get_many(&self, pool: &PgPool, ids: Vec<i64>) -> Result<Vec<AttributeRow>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(&self.get_many_sql())
            .bind(ids)
            .fetch_all(pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get {}s: {}", self.label, e)))?;

        Ok(rows.iter().map(read_row).collect())
    }
}

fn read_row(row: &sqlx::postgres::PgRow) -> AttributeRow {
    let id: i64 = row.get("id");
    let user_id: i64 = row.get("user_id");
    let name: String = row.get("name");

    (id, UserId::new(user_id), name)
}

/// PostgreSQL implementation of TagRepository
#[derive(Debug, Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_tag((id, user_id, name): AttributeRow) -> Tag {
    Tag::new(TagId::new(id), user_id, name)
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn create(&self, tag: NewTag) -> Result<Tag, DomainError> {
        TAGS.insert(&self.pool, tag.user_id(), tag.name())
            .await
            .map(to_tag)
    }

    async fn list(&self, query: &TagQuery) -> Result<Vec<Tag>, DomainError> {
        let rows = TAGS.list(&self.pool, query.owner, query.assigned_only).await?;
        Ok(rows.into_iter().map(to_tag).collect())
    }

    async fn get_many(&self, ids: &[TagId]) -> Result<Vec<Tag>, DomainError> {
        let ids = ids.iter().map(TagId::as_i64).collect();
        let rows = TAGS.get_many(&self.pool, ids).await?;
        Ok(rows.into_iter().map(to_tag).collect())
    }
}

/// PostgreSQL implementation of IngredientRepository
#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pool: PgPool,
}

impl PostgresIngredientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_ingredient((id, user_id, name): AttributeRow) -> Ingredient {
    Ingredient::new(IngredientId::new(id), user_id, name)
}

#[async_trait]
impl IngredientRepository for PostgresIngredientRepository {
    async fn create(&self, ingredient: NewIngredient) -> Result<Ingredient, DomainError> {
        INGREDIENTS
            .insert(&self.pool, ingredient.user_id(), ingredient.name())
            .await
            .map(to_ingredient)
    }

    async fn list(&self, query: &IngredientQuery) -> Result<Vec<Ingredient>, DomainError> {
        let rows = INGREDIENTS
            .list(&self.pool, query.owner, query.assigned_only)
            .await?;
        Ok(rows.into_iter().map(to_ingredient).collect())
    }

    async fn get_many(&self, ids: &[IngredientId]) -> Result<Vec<Ingredient>, DomainError> {
        let ids = ids.iter().map(IngredientId::as_i64).collect();
        let rows = INGREDIENTS.get_many(&self.pool, ids).await?;
        Ok(rows.into_iter().map(to_ingredient).collect())
    }
}
