//! HTTP-level integration tests for the `/api/clubs` endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_clubs(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/clubs").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let clubs = json.as_array().expect("body should be an array");
    assert_eq!(clubs.len(), 24);

    let sunday = clubs
        .iter()
        .find(|c| c["code"] == "サンデーR")
        .expect("registry should include サンデーR");
    assert_eq!(sunday["display_name"], "サンデーレーシング");
    assert_eq!(sunday["style_class"], "sunday");
}
