//! Recipe entity model and DTOs.

use std::fmt;

use recipe_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::ingredient::{CreateIngredient, IngredientInfo};

/// A row from the `recipes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Recipe {
    pub id: DbId,
    pub name: String,
    pub description: String,
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A recipe enriched with its ingredients, ordered by ascending id.
///
/// This is the representation every recipe endpoint returns.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeWithIngredients {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub ingredients: Vec<IngredientInfo>,
}

impl fmt::Display for RecipeWithIngredients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.recipe, f)
    }
}

/// DTO for creating a recipe, optionally with nested ingredients.
///
/// An absent or `null` `ingredients` list means no ingredients.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecipe {
    pub name: String,
    pub description: String,
    pub ingredients: Option<Vec<CreateIngredient>>,
}

/// DTO for a partial update (`PATCH`). All fields are optional.
///
/// When `ingredients` is present the list is merged into the recipe's
/// current ingredients by name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRecipe {
    pub name: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<CreateIngredient>>,
}

/// DTO for a full update (`PUT`). Scalar fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceRecipe {
    pub name: String,
    pub description: String,
    pub ingredients: Option<Vec<CreateIngredient>>,
}

impl From<ReplaceRecipe> for UpdateRecipe {
    fn from(input: ReplaceRecipe) -> Self {
        Self {
            name: Some(input.name),
            description: Some(input.description),
            ingredients: input.ingredients,
        }
    }
}

/// Query parameters for `GET /recipes/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeListParams {
    /// Case-sensitive substring filter on `name`.
    pub name: Option<String>,
    /// Comma-separated ingredient ids; keeps recipes owning any of them.
    pub ingredients: Option<String>,
}

/// Repository-level recipe filter, built from [`RecipeListParams`] once the
/// id list has been parsed.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub name: Option<String>,
    pub ingredient_ids: Option<Vec<DbId>>,
}
