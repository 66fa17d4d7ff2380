//! PostgreSQL recipe repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Row, Transaction};

use crate::domain::{
    DomainError, IngredientId, Price, Recipe, RecipeDraft, RecipeId, RecipeRepository, TagId,
    UserId,
};

const RECIPE_SELECT: &str = r#"
    SELECT r.id, r.user_id, r.title, r.time_minutes, r.price_cents, r.link, r.image,
           ARRAY(SELECT tag_id FROM recipe_tags
                 WHERE recipe_id = r.id ORDER BY tag_id) AS tag_ids,
           ARRAY(SELECT ingredient_id FROM recipe_ingredients
                 WHERE recipe_id = r.id ORDER BY ingredient_id) AS ingredient_ids
    FROM recipes r
"#;

/// PostgreSQL implementation of RecipeRepository
///
/// Associations live in `recipe_tags` and `recipe_ingredients`. A recipe row
/// and its association rows are always written in one transaction.
#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pool: PgPool,
}

impl PostgresRecipeRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: RecipeId) -> Result<Option<Recipe>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE r.id = $1", RECIPE_SELECT))
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get recipe: {}", e)))?;

        Ok(row.as_ref().map(row_to_recipe))
    }
}

#[async_trait]
impl RecipeRepository for PostgresRecipeRepository {
    async fn create(&self, owner: UserId, draft: RecipeDraft) -> Result<Recipe, DomainError> {
        let mut tx = begin(&self.pool).await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO recipes (user_id, title, time_minutes, price_cents, link)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(owner.as_i64())
        .bind(&draft.title)
        .bind(draft.time_minutes)
        .bind(draft.price.cents())
        .bind(draft.link.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if e.to_string().contains("foreign key") {
                DomainError::not_found(format!("User '{}' not found", owner))
            } else {
                DomainError::storage(format!("Failed to create recipe: {}", e))
            }
        })?;

        let recipe = Recipe::new(RecipeId::new(id), owner, draft);
        write_links(&mut tx, &recipe).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit recipe: {}", e)))?;

        Ok(recipe)
    }

    async fn get(&self, id: RecipeId) -> Result<Option<Recipe>, DomainError> {
        self.fetch(id).await
    }

    async fn list(&self, owner: UserId) -> Result<Vec<Recipe>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE r.user_id = $1 ORDER BY r.id DESC",
            RECIPE_SELECT
        ))
        .bind(owner.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list recipes: {}", e)))?;

        Ok(rows.iter().map(row_to_recipe).collect())
    }

    async fn update(&self, recipe: &Recipe) -> Result<Recipe, DomainError> {
        let mut tx = begin(&self.pool).await?;

        let result = sqlx::query(
            r#"
            UPDATE recipes
            SET title = $2, time_minutes = $3, price_cents = $4, link = $5, image = $6
            WHERE id = $1
            "#,
        )
        .bind(recipe.id().as_i64())
        .bind(recipe.title())
        .bind(recipe.time_minutes())
        .bind(recipe.price().cents())
        .bind(recipe.link())
        .bind(recipe.image())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update recipe: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Recipe '{}' not found",
                recipe.id()
            )));
        }

        for table in ["recipe_tags", "recipe_ingredients"] {
            sqlx::query(&format!("DELETE FROM {} WHERE recipe_id = $1", table))
                .bind(recipe.id().as_i64())
                .execute(&mut *tx)
                .await
                .map_err(|e| DomainError::storage(format!("Failed to clear {}: {}", table, e)))?;
        }

        write_links(&mut tx, recipe).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit recipe: {}", e)))?;

        Ok(recipe.clone())
    }

    async fn delete(&self, id: RecipeId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete recipe: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

async fn begin(pool: &PgPool) -> Result<Transaction<'static, Postgres>, DomainError> {
    pool.begin()
        .await
        .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))
}

/// Insert the association rows of `recipe`
async fn write_links(
    tx: &mut Transaction<'static, Postgres>,
    recipe: &Recipe,
) -> Result<(), DomainError> {
    let tag_ids: Vec<i64> = recipe.tags().iter().map(TagId::as_i64).collect();
    let ingredient_ids: Vec<i64> = recipe
        .ingredients()
        .iter()
        .map(IngredientId::as_i64)
        .collect();

    let links = [
        ("recipe_tags", "tag_id", "tags", tag_ids),
        ("recipe_ingredients", "ingredient_id", "ingredients", ingredient_ids),
    ];

    for (table, column, field, ids) in links {
        if ids.is_empty() {
            continue;
        }

        sqlx::query(&format!(
            "INSERT INTO {} (recipe_id, {}) SELECT $1, UNNEST($2::BIGINT[])",
            table, column
        ))
        .bind(recipe.id().as_i64())
        .bind(ids)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            if e.to_string().contains("foreign key") {
                DomainError::invalid_field(field, "Referenced object does not exist.")
            } else {
                DomainError::storage(format!("Failed to write {}: {}", table, e))
            }
        })?;
    }

    Ok(())
}

fn row_to_recipe(row: &sqlx::postgres::PgRow) -> Recipe {
    let id: i64 = row.get("id");
    let user_id: i64 = row.get("user_id");
    let price_cents: i64 = row.get("price_cents");
    let tag_ids: Vec<i64> = row.get("tag_ids");
    let ingredient_ids: Vec<i64> = row.get("ingredient_ids");

    let draft = RecipeDraft {
        title: row.get("title"),
        time_minutes: row.get("time_minutes"),
        price: Price::from_cents(price_cents),
        link: row.get("link"),
        tags: tag_ids.into_iter().map(TagId::new).collect(),
        ingredients: ingredient_ids.into_iter().map(IngredientId::new).collect(),
    };

    Recipe::new(RecipeId::new(id), UserId::new(user_id), draft).with_image(row.get("image"))
}
