//! Route definitions for the `/museums` resource.
//!
//! Also nests the museum ↔ artwork association routes under
//! `/museums/{museum_id}/artworks`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{museum, museum_artwork};
use crate::state::AppState;

/// Routes mounted at `/museums`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
///
/// GET    /{museum_id}/artworks              -> list_associated
/// PUT    /{museum_id}/artworks              -> replace_all
/// GET    /{museum_id}/artworks/{artwork_id} -> find_associated
/// POST   /{museum_id}/artworks/{artwork_id} -> add
/// DELETE /{museum_id}/artworks/{artwork_id} -> remove
/// ```
pub fn router() -> Router<AppState> {
    let association_routes = Router::new()
        .route(
            "/",
            get(museum_artwork::list_associated).put(museum_artwork::replace_all),
        )
        .route(
            "/{artwork_id}",
            get(museum_artwork::find_associated)
                .post(museum_artwork::add)
                .delete(museum_artwork::remove),
        );

    Router::new()
        .route("/", get(museum::list).post(museum::create))
        .route(
            "/{id}",
            get(museum::get_by_id)
                .put(museum::update)
                .delete(museum::delete),
        )
        .nest("/{museum_id}/artworks", association_routes)
}
