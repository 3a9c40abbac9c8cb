//! Router assembly: dorm API routes, operational routes, CORS and tracing.

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::docs::ApiDoc;
use crate::handlers::dorm;
use crate::state::AppState;

/// Full application router with CORS and request tracing applied.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(ops_routes(state.clone()))
        .nest("/api", dorm_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

fn dorm_routes(state: AppState) -> Router {
    Router::new()
        .route("/createDorms", post(dorm::create_dorm))
        .route("/dorms", get(dorm::list_dorms))
        .route("/dorms/with-rooms", get(dorm::list_dorms_with_rooms))
        .route("/dorms/:id", get(dorm::get_dorm))
        .route("/updateDorms/:id", post(dorm::update_dorm))
        .route("/deleteDorms/:id", delete(dorm::delete_dorm))
        .with_state(state)
}

/// Any origin is accepted. A wildcard cannot be combined with credentials,
/// so the request origin is mirrored back instead.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if sqlx::query("SELECT 1").fetch_optional(&state.pool).await.is_err() {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: "ok",
    }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn openapi_doc() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Operational routes: GET /health, /ready, /version, /swagger/doc.json.
fn ops_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/swagger/doc.json", get(openapi_doc))
        .with_state(state)
}
