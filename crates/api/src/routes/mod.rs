pub mod health;
pub mod ingredient;
pub mod recipe;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /recipes                  list, create
/// /recipes/{id}             get, patch, put, delete
///
/// /ingredients              list, create
/// ```
///
/// A trailing slash on any path is accepted; see [`crate::router`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/recipes", recipe::router())
        .nest("/ingredients", ingredient::router())
}
