//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight to the router via `tower::ServiceExt`, so the
//! tests exercise the same middleware stack (CORS, tracing) as production.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use dorm_api::{AppState, Dorm, DormInput, DormStore};

/// Application router over the given pool, mirroring `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    dorm_api::app_router(AppState { pool })
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, &body.to_string()).await
}

/// POST a raw body string; used to exercise malformed-JSON handling.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

/// A well-formed create/update payload.
pub fn dorm_input(name: &str) -> DormInput {
    DormInput {
        name: name.to_string(),
        location: "123 Main St".to_string(),
        capacity: 50,
        price_per_month: 4500.0,
        is_available: true,
    }
}

/// Seed one dorm through the storage gateway.
pub async fn seed_dorm(pool: &PgPool, name: &str) -> Dorm {
    DormStore::create(pool, &dorm_input(name)).await.unwrap()
}

/// Seed one room for a dorm. There is no room write endpoint, so tests
/// insert directly.
pub async fn seed_room(pool: &PgPool, dorm_id: i32, room_number: &str, floor: i32) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO rooms (dorm_id, room_number, floor, size_sqm, is_occupied, price_per_month) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING id",
    )
    .bind(dorm_id)
    .bind(room_number)
    .bind(floor)
    .bind(24.5)
    .bind(false)
    .bind(1200.0)
    .fetch_one(pool)
    .await
    .unwrap()
}
