//! Ingredient entity model and DTOs.

use std::fmt;

use recipe_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `ingredients` table.
#[derive(Debug, Clone, FromRow)]
pub struct Ingredient {
    pub id: DbId,
    pub name: String,
    pub recipe_id: DbId,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Public shape of an ingredient: `{ "id", "name" }`.
///
/// The owning recipe is implied by context and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct IngredientInfo {
    pub id: DbId,
    pub name: String,
}

impl From<Ingredient> for IngredientInfo {
    fn from(row: Ingredient) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

impl fmt::Display for IngredientInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Nested ingredient entry inside a recipe payload.
///
/// Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIngredient {
    pub name: String,
}

/// DTO for `POST /ingredients/`. `recipe` is the owning recipe's id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewIngredient {
    pub name: String,
    pub recipe: DbId,
}

/// Query parameters for `GET /ingredients/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IngredientListParams {
    /// Non-zero restricts the list to ingredients linked to a recipe.
    pub assigned_only: Option<i64>,
}

impl IngredientListParams {
    pub fn assigned_only(&self) -> bool {
        self.assigned_only.unwrap_or(0) != 0
    }
}
