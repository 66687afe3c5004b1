//! Repository for the `recipes` table.
//!
//! Every method that returns a recipe to a caller returns it together with
//! its ingredients ([`RecipeWithIngredients`]). Writes touching both tables
//! run in one transaction.

use std::collections::HashMap;

use recipe_core::ingredients::names_to_add;
use recipe_core::query::escape_like;
use recipe_core::types::DbId;
use sqlx::PgPool;

use crate::models::ingredient::IngredientInfo;
use crate::models::recipe::{
    CreateRecipe, Recipe, RecipeFilter, RecipeWithIngredients, UpdateRecipe,
};
use crate::repositories::IngredientRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description";

/// Provides CRUD operations for recipes.
pub struct RecipeRepo;

impl RecipeRepo {
    /// Insert a recipe and one ingredient row per nested entry.
    ///
    /// Ingredients are created in payload order, so their ids ascend in the
    /// same order. Nothing is persisted if any insert fails.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRecipe,
    ) -> Result<RecipeWithIngredients, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO recipes (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let recipe = sqlx::query_as::<_, Recipe>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await?;

        let mut ingredients = Vec::new();
        for entry in input.ingredients.iter().flatten() {
            let row = IngredientRepo::create(&mut *tx, recipe.id, &entry.name).await?;
            ingredients.push(IngredientInfo::from(row));
        }

        tx.commit().await?;
        Ok(RecipeWithIngredients {
            recipe,
            ingredients,
        })
    }

    /// Find a recipe row by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE id = $1");
        sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a recipe by id, enriched with its ingredients.
    pub async fn find_with_ingredients(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RecipeWithIngredients>, sqlx::Error> {
        let Some(recipe) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let ingredients = IngredientRepo::list_for_recipe(pool, id)
            .await?
            .into_iter()
            .map(IngredientInfo::from)
            .collect();
        Ok(Some(RecipeWithIngredients {
            recipe,
            ingredients,
        }))
    }

    /// List recipes ordered by id, applying the optional name and
    /// ingredient filters.
    ///
    /// The name filter is a literal, case-sensitive substring match. The
    /// ingredient filter keeps recipes owning at least one listed id.
    pub async fn list(
        pool: &PgPool,
        filter: &RecipeFilter,
    ) -> Result<Vec<RecipeWithIngredients>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM recipes
             WHERE ($1::TEXT IS NULL OR name LIKE '%' || $1::TEXT || '%')
               AND ($2::BIGINT[] IS NULL OR EXISTS (
                   SELECT 1 FROM ingredients i
                   WHERE i.recipe_id = recipes.id AND i.id = ANY($2::BIGINT[])
               ))
             ORDER BY id"
        );
        let recipes = sqlx::query_as::<_, Recipe>(&query)
            .bind(filter.name.as_deref().map(escape_like))
            .bind(filter.ingredient_ids.as_deref())
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = recipes.iter().map(|r| r.id).collect();
        let mut by_recipe: HashMap<DbId, Vec<IngredientInfo>> = HashMap::new();
        for row in IngredientRepo::list_for_recipes(pool, &ids).await? {
            by_recipe
                .entry(row.recipe_id)
                .or_default()
                .push(IngredientInfo::from(row));
        }

        Ok(recipes
            .into_iter()
            .map(|recipe| RecipeWithIngredients {
                ingredients: by_recipe.remove(&recipe.id).unwrap_or_default(),
                recipe,
            })
            .collect())
    }

    /// Update a recipe. Only non-`None` scalar fields are applied.
    ///
    /// If `ingredients` is `Some`, names not yet linked to the recipe are
    /// added; existing ingredients are never removed.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRecipe,
    ) -> Result<Option<RecipeWithIngredients>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE recipes SET
                name = COALESCE($2, name),
                description = COALESCE($3, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(recipe) = sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let mut current = IngredientRepo::list_for_recipe(&mut *tx, id).await?;

        if let Some(entries) = &input.ingredients {
            let incoming: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();
            let existing: Vec<&str> = current.iter().map(|i| i.name.as_str()).collect();
            let added: Vec<String> = names_to_add(&existing, &incoming)
                .into_iter()
                .map(str::to_string)
                .collect();

            for name in &added {
                let row = IngredientRepo::create(&mut *tx, id, name).await?;
                current.push(row);
            }

            if !added.is_empty() {
                tracing::debug!(recipe_id = id, added = added.len(), "Ingredients merged");
            }
        }

        tx.commit().await?;
        Ok(Some(RecipeWithIngredients {
            recipe,
            ingredients: current.into_iter().map(IngredientInfo::from).collect(),
        }))
    }

    /// Delete a recipe by id; its ingredients cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of recipe rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM recipes")
            .fetch_one(pool)
            .await
    }
}
