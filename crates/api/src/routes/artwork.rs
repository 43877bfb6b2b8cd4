//! Route definitions for the `/artworks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::artwork;
use crate::state::AppState;

/// Routes mounted at `/artworks`.
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
        .route("/", get(artwork::list).post(artwork::create))
        .route(
            "/{id}",
            get(artwork::get_by_id)
                .put(artwork::update)
                .delete(artwork::delete),
        )
}
