//! HTTP-level integration tests for museum CRUD endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Museum CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_museum_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/museums",
        serde_json::json!({
            "name": "Museo del Prado",
            "description": "Spanish national art museum",
            "address": "C. de Ruiz de Alarcon, 23",
            "city": "Madrid",
            "image": "https://example.com/prado.jpg",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Museo del Prado");
    assert_eq!(json["city"], "Madrid");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_museum_rejects_invalid_image_url(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/museums",
        serde_json::json!({
            "name": "Museo del Prado",
            "description": "Spanish national art museum",
            "address": "C. de Ruiz de Alarcon, 23",
            "city": "Madrid",
            "image": "not-a-url",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_museum_rejects_empty_name(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/museums",
        serde_json::json!({
            "name": "",
            "description": "desc",
            "address": "addr",
            "city": "city",
            "image": "https://example.com/m.jpg",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_museum_by_id_includes_relations(pool: PgPool) {
    let museum_id = common::seed_museum(&pool, "Get Me").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/museums/{museum_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Get Me");
    // Relations are eagerly loaded, empty for a fresh museum.
    assert_eq!(json["artworks"], serde_json::json!([]));
    assert_eq!(json["exhibitions"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_museum_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/museums/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Museum with id 999999 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_museum_merges_fields(pool: PgPool) {
    let museum_id = common::seed_museum(&pool, "Original").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/museums/{museum_id}"),
        serde_json::json!({ "name": "Updated" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Updated");
    // Fields absent from the body keep their persisted values.
    assert_eq!(json["city"], "Bogota");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_museum_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/museums/999999",
        serde_json::json!({ "name": "Ghost" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_museum_returns_204(pool: PgPool) {
    let museum_id = common::seed_museum(&pool, "Delete Me").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/museums/{museum_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/museums/{museum_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_nonexistent_museum_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/museums/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_museums(pool: PgPool) {
    common::seed_museum(&pool, "M1").await;
    common::seed_museum(&pool, "M2").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/museums").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_deleting_museum_orphans_its_artworks(pool: PgPool) {
    let museum_id = common::seed_museum(&pool, "Short-lived").await;
    let artwork_id = common::seed_artwork(&pool, "Survivor").await;

    let app = common::build_test_app(pool.clone());
    common::post(app, &format!("/api/v1/museums/{museum_id}/artworks/{artwork_id}")).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/museums/{museum_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The artwork outlives its museum with the back-reference cleared.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/artworks/{artwork_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["museum_id"], serde_json::Value::Null);
}
