//! Handlers for the `/ingredients` resource (list and create only).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use recipe_core::error::CoreError;
use recipe_core::validation::{clean_name, FieldErrors};
use recipe_db::models::ingredient::{IngredientInfo, IngredientListParams, NewIngredient};
use recipe_db::repositories::{IngredientRepo, RecipeRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::state::AppState;

/// GET /ingredients
///
/// Name-descending; `?assigned_only=1` keeps only ingredients linked to a recipe.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<IngredientListParams>,
) -> AppResult<Json<Vec<IngredientInfo>>> {
    let ingredients = IngredientRepo::list(&state.pool, params.assigned_only()).await?;
    Ok(Json(ingredients))
}

/// POST /ingredients
///
/// The body names the owning recipe: `{ "name": "Basil", "recipe": 3 }`.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<NewIngredient>,
) -> AppResult<(StatusCode, Json<IngredientInfo>)> {
    let mut errors = FieldErrors::new();
    let name = errors.check("name", &input.name, clean_name);
    errors.finish()?;
    let name = name.unwrap_or_default();

    if RecipeRepo::find_by_id(&state.pool, input.recipe).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id: input.recipe,
        }));
    }

    let ingredient = IngredientRepo::create(&state.pool, input.recipe, &name).await?;

    tracing::info!(
        ingredient_id = ingredient.id,
        recipe_id = ingredient.recipe_id,
        name = %ingredient,
        "Ingredient created",
    );

    Ok((StatusCode::CREATED, Json(IngredientInfo::from(ingredient))))
}
