#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use music_library_api::config::{AppEnv, ServerConfig};
use music_library_api::router::build_app_router;
use music_library_api::state::AppState;
use music_library_db::repositories::{TrackRepo, TrackStore};
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        app_env: AppEnv::Development,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
    }
}

/// Build the full application router backed by the given track store.
pub fn build_app_with_store(store: Arc<dyn TrackStore>) -> Router {
    build_app_router(AppState::new(store, test_config()))
}

/// Build the full application router backed by a real SQLite pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app_with_store(Arc::new(TrackRepo::new(pool)))
}

/// A complete, valid create/update payload.
pub fn track_payload(title: &str) -> serde_json::Value {
    serde_json::json!({
        "songTitle": title,
        "artistName": "B",
        "albumName": "C",
        "genre": "Rock",
        "duration": 200,
        "releaseYear": 2000
    })
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body.to_string())).await
}

/// A request with a JSON content type and an arbitrary (possibly invalid) body.
pub fn json_request(method: Method, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
