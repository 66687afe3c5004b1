//! Repository for the `ingredients` table.

use recipe_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::ingredient::{Ingredient, IngredientInfo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, recipe_id";

/// Provides create and list operations for ingredients.
///
/// There is no update or delete: ingredients disappear only when their
/// recipe is deleted (`ON DELETE CASCADE`).
pub struct IngredientRepo;

impl IngredientRepo {
    /// Insert an ingredient linked to `recipe_id`, returning the created row.
    ///
    /// Fails with a foreign-key violation if the recipe does not exist.
    pub async fn create<'e, E>(
        executor: E,
        recipe_id: DbId,
        name: &str,
    ) -> Result<Ingredient, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO ingredients (name, recipe_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ingredient>(&query)
            .bind(name)
            .bind(recipe_id)
            .fetch_one(executor)
            .await
    }

    /// All ingredients of one recipe, ordered by ascending id.
    pub async fn list_for_recipe<'e, E>(
        executor: E,
        recipe_id: DbId,
    ) -> Result<Vec<Ingredient>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM ingredients WHERE recipe_id = $1 ORDER BY id");
        sqlx::query_as::<_, Ingredient>(&query)
            .bind(recipe_id)
            .fetch_all(executor)
            .await
    }

    /// Ingredients of several recipes at once, ordered by recipe then id.
    pub async fn list_for_recipes(
        pool: &PgPool,
        recipe_ids: &[DbId],
    ) -> Result<Vec<Ingredient>, sqlx::Error> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM ingredients
             WHERE recipe_id = ANY($1)
             ORDER BY recipe_id, id"
        );
        sqlx::query_as::<_, Ingredient>(&query)
            .bind(recipe_ids)
            .fetch_all(pool)
            .await
    }

    /// List ingredients ordered by name descending (ties by id), without
    /// duplicates.
    ///
    /// With `assigned_only`, keeps only ingredients whose recipe exists.
    pub async fn list(
        pool: &PgPool,
        assigned_only: bool,
    ) -> Result<Vec<IngredientInfo>, sqlx::Error> {
        let query = if assigned_only {
            "SELECT DISTINCT i.id, i.name FROM ingredients i
             WHERE EXISTS (SELECT 1 FROM recipes r WHERE r.id = i.recipe_id)
             ORDER BY i.name DESC, i.id"
        } else {
            "SELECT DISTINCT i.id, i.name FROM ingredients i
             ORDER BY i.name DESC, i.id"
        };
        sqlx::query_as::<_, IngredientInfo>(query)
            .fetch_all(pool)
            .await
    }

    /// Total number of ingredient rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM ingredients")
            .fetch_one(pool)
            .await
    }
}
