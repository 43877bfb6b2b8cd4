//! Route definitions for the `/exhibitions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::exhibition;
use crate::state::AppState;

/// Routes mounted at `/exhibitions`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(exhibition::list).post(exhibition::create))
        .route(
            "/{id}",
            get(exhibition::get_by_id)
                .put(exhibition::update)
                .delete(exhibition::delete),
        )
}
