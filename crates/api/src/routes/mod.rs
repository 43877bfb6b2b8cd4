pub mod artwork;
pub mod exhibition;
pub mod health;
pub mod museum;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /museums                                    CRUD (relations eagerly loaded)
/// /museums/{museum_id}/artworks               association list / replace
/// /museums/{museum_id}/artworks/{artwork_id}  association add / find / remove
/// /artworks                                   CRUD
/// /exhibitions                                CRUD
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/museums", museum::router())
        .nest("/artworks", artwork::router())
        .nest("/exhibitions", exhibition::router())
}
