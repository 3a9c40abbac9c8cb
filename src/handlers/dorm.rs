//! Dorm CRUD handlers: create, list, list-with-rooms, get, update, delete.
//!
//! Each handler is a pure request-to-response mapping; the pool inside
//! `AppState` is the only shared dependency.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{Dorm, DormInput, DormWithRooms};
use crate::state::AppState;
use crate::store::DormStore;

/// Parse a path id. Non-integer input surfaces the raw parse error as 400.
fn parse_id(id: &str) -> Result<i32, ApiError> {
    id.parse().map_err(|e: std::num::ParseIntError| ApiError::BadRequest(e.to_string()))
}

/// Decode a request body into `DormInput`. The body is extracted as loose
/// JSON first so shape errors (missing or unknown fields) also map to 400
/// with the raw serde message.
fn decode_input(body: Value) -> Result<DormInput, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}

#[utoipa::path(
    post,
    path = "/api/createDorms",
    tag = "dorms",
    request_body = DormInput,
    responses(
        (status = 200, description = "Created dorm with server-assigned id and created_at", body = Dorm),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Database error")
    )
)]
pub async fn create_dorm(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let input = decode_input(body)?;
    let dorm = DormStore::create(&state.pool, &input).await?;
    Ok((StatusCode::OK, Json(dorm)))
}

#[utoipa::path(
    get,
    path = "/api/dorms",
    tag = "dorms",
    responses(
        (status = 200, description = "All dorms in ascending id order", body = [Dorm]),
        (status = 500, description = "Database error")
    )
)]
pub async fn list_dorms(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let dorms = DormStore::list(&state.pool).await?;
    Ok(Json(dorms))
}

#[utoipa::path(
    get,
    path = "/api/dorms/with-rooms",
    tag = "dorms",
    responses(
        (status = 200, description = "All dorms, each with its rooms", body = [DormWithRooms]),
        (status = 500, description = "Database error")
    )
)]
pub async fn list_dorms_with_rooms(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let dorms = DormStore::list_with_rooms(&state.pool).await?;
    Ok(Json(dorms))
}

#[utoipa::path(
    get,
    path = "/api/dorms/{id}",
    tag = "dorms",
    params(("id" = i32, Path, description = "Dorm id")),
    responses(
        (status = 200, description = "One dorm; this path omits price_per_month and is_available", body = Dorm),
        (status = 400, description = "Non-integer id"),
        (status = 404, description = "No dorm with this id"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_dorm(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let dorm = DormStore::get(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(dorm))
}

#[utoipa::path(
    post,
    path = "/api/updateDorms/{id}",
    tag = "dorms",
    params(("id" = i32, Path, description = "Dorm id")),
    request_body = DormInput,
    responses(
        (status = 200, description = "Updated dorm with fresh updated_at", body = Dorm),
        (status = 400, description = "Non-integer id or malformed body"),
        (status = 404, description = "No dorm with this id"),
        (status = 500, description = "Database error")
    )
)]
pub async fn update_dorm(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let input = decode_input(body)?;
    let dorm = DormStore::update(&state.pool, id, &input)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(dorm))
}

#[utoipa::path(
    delete,
    path = "/api/deleteDorms/{id}",
    tag = "dorms",
    params(("id" = i32, Path, description = "Dorm id")),
    responses(
        (status = 204, description = "Dorm deleted; no body"),
        (status = 400, description = "Non-integer id"),
        (status = 404, description = "No dorm with this id"),
        (status = 500, description = "Database error")
    )
)]
pub async fn delete_dorm(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    if !DormStore::delete(&state.pool, id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
