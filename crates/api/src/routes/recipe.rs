//! Route definitions for the `/recipes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::recipe;
use crate::state::AppState;

/// Routes mounted at `/recipes`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// PUT    /{id}    -> replace
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipe::list).post(recipe::create))
        .route(
            "/{id}",
            get(recipe::get_by_id)
                .patch(recipe::update)
                .put(recipe::replace)
                .delete(recipe::delete),
        )
}
