//! Handlers for the `/recipes` resource.
//!
//! Payloads are trimmed and validated here before anything is written;
//! persistence is delegated to [`RecipeRepo`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use recipe_core::error::CoreError;
use recipe_core::query::parse_id_list;
use recipe_core::types::DbId;
use recipe_core::validation::{clean_description, clean_name, FieldErrors};
use recipe_db::models::ingredient::CreateIngredient;
use recipe_db::models::recipe::{
    CreateRecipe, RecipeFilter, RecipeListParams, RecipeWithIngredients, ReplaceRecipe,
    UpdateRecipe,
};
use recipe_db::repositories::RecipeRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::state::AppState;

/// GET /recipes
///
/// Optional `?name=` substring filter and `?ingredients=1,2` id filter.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<RecipeListParams>,
) -> AppResult<Json<Vec<RecipeWithIngredients>>> {
    let ingredient_ids = params
        .ingredients
        .as_deref()
        .map(parse_id_list)
        .transpose()
        .map_err(|e| AppError::BadRequest(format!("ingredients: {e}")))?;

    let filter = RecipeFilter {
        name: params.name,
        ingredient_ids,
    };
    let recipes = RecipeRepo::list(&state.pool, &filter).await?;
    Ok(Json(recipes))
}

/// POST /recipes
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateRecipe>,
) -> AppResult<(StatusCode, Json<RecipeWithIngredients>)> {
    let input = clean_create(input)?;
    let recipe = RecipeRepo::create(&state.pool, &input).await?;

    tracing::info!(
        recipe_id = recipe.recipe.id,
        name = %recipe,
        ingredients = recipe.ingredients.len(),
        "Recipe created",
    );

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// GET /recipes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<RecipeWithIngredients>> {
    let recipe = RecipeRepo::find_with_ingredients(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id,
        }))?;
    Ok(Json(recipe))
}

/// PATCH /recipes/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateRecipe>,
) -> AppResult<Json<RecipeWithIngredients>> {
    apply_update(&state, id, input).await
}

/// PUT /recipes/{id}
///
/// Same merge semantics as PATCH, but `name` and `description` are required.
pub async fn replace(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ReplaceRecipe>,
) -> AppResult<Json<RecipeWithIngredients>> {
    apply_update(&state, id, UpdateRecipe::from(input)).await
}

/// DELETE /recipes/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = RecipeRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(recipe_id = id, "Recipe deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn apply_update(
    state: &AppState,
    id: DbId,
    input: UpdateRecipe,
) -> AppResult<Json<RecipeWithIngredients>> {
    let input = clean_update(input)?;
    let recipe = RecipeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id,
        }))?;

    tracing::info!(
        recipe_id = id,
        name = %recipe,
        ingredients = recipe.ingredients.len(),
        "Recipe updated",
    );

    Ok(Json(recipe))
}

/// Trim and validate a create payload.
fn clean_create(input: CreateRecipe) -> Result<CreateRecipe, CoreError> {
    let mut errors = FieldErrors::new();
    let name = errors.check("name", &input.name, clean_name);
    let description = errors.check("description", &input.description, clean_description);
    let ingredients = clean_ingredients(&mut errors, input.ingredients);
    errors.finish()?;

    Ok(CreateRecipe {
        name: name.unwrap_or_default(),
        description: description.unwrap_or_default(),
        ingredients,
    })
}

/// Trim and validate an update payload. Absent fields stay absent.
fn clean_update(input: UpdateRecipe) -> Result<UpdateRecipe, CoreError> {
    let mut errors = FieldErrors::new();
    let name = input
        .name
        .and_then(|value| errors.check("name", &value, clean_name));
    let description = input
        .description
        .and_then(|value| errors.check("description", &value, clean_description));
    let ingredients = clean_ingredients(&mut errors, input.ingredients);
    errors.finish()?;

    Ok(UpdateRecipe {
        name,
        description,
        ingredients,
    })
}

fn clean_ingredients(
    errors: &mut FieldErrors,
    entries: Option<Vec<CreateIngredient>>,
) -> Option<Vec<CreateIngredient>> {
    entries.map(|list| {
        list.iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                errors.check(format!("ingredients[{index}].name"), &entry.name, clean_name)
            })
            .map(|name| CreateIngredient { name })
            .collect()
    })
}
