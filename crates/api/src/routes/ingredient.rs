//! Route definitions for the `/ingredients` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::ingredient;
use crate::state::AppState;

/// Routes mounted at `/ingredients`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(ingredient::list).post(ingredient::create))
}
