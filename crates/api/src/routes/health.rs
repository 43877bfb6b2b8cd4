use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
    version: &'static str,
}

/// GET /health
///
/// Liveness plus a database round-trip. Reports `degraded` instead of
/// failing the request when the database is unreachable.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match musea_db::health_check(&state.pool).await {
        Ok(()) => "ok",
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            "unreachable"
        }
    };
    Json(HealthResponse {
        status: if database == "ok" { "ok" } else { "degraded" },
        database,
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
