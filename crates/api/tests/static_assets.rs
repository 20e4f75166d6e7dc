//! Dashboard asset serving and its interaction with the `/api` tree.

mod common;

use std::path::PathBuf;

use axum::http::StatusCode;
use common::{body_json, body_text, build_test_app, build_test_app_with, get, test_config};
use sqlx::PgPool;

/// Write a minimal built dashboard into a fresh directory.
fn spa_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gurukul-spa-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html>dashboard</html>").unwrap();
    dir
}

fn app_with_assets(pool: PgPool, name: &str) -> axum::Router {
    let mut config = test_config();
    config.static_dir = Some(spa_dir(name));
    build_test_app_with(pool, config)
}

#[sqlx::test(migrations = "../db/migrations")]
async fn client_routes_fall_back_to_index(pool: PgPool) {
    let response = get(app_with_assets(pool.clone(), "index"), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "<html>dashboard</html>");

    let response = get(app_with_assets(pool, "index"), "/rankings/floor-2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "<html>dashboard</html>");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_api_paths_are_json_404_with_assets_enabled(pool: PgPool) {
    for uri in ["/api/no-such-route", "/api/students/1/nope"] {
        let response = get(app_with_assets(pool.clone(), "api404"), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["error"], format!("Route '{uri}' not found"));
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn api_routes_still_served_with_assets_enabled(pool: PgPool) {
    let response = get(app_with_assets(pool, "routes"), "/api/stats").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["totalStudents"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_api_paths_are_json_404_without_assets(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/no-such-route").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
