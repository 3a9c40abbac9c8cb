//! Wire and storage types for dorms and rooms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `dorms` table.
///
/// Timestamps are `Option` because not every read path returns them: create
/// omits `updated_at`, get-by-id selects neither price nor availability and
/// omits `updated_at`, and the joined listing omits both timestamps. `None`
/// timestamps are skipped during serialization.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Dorm {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub price_per_month: f64,
    pub is_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A row from the `rooms` table. Each room belongs to exactly one dorm.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Room {
    pub id: i32,
    pub dorm_id: i32,
    pub room_number: String,
    pub floor: i32,
    pub size_sqm: f64,
    pub is_occupied: bool,
    pub price_per_month: f64,
}

/// Composite returned by the joined listing: a dorm plus all of its rooms.
/// Has no identity of its own and is rebuilt on every request.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DormWithRooms {
    #[serde(flatten)]
    pub dorm: Dorm,
    pub rooms: Vec<Room>,
}

/// Request body for create and update. All fields are required and unknown
/// fields are rejected, so a misspelled key fails at the boundary instead of
/// silently zero-defaulting a column.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct DormInput {
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub price_per_month: f64,
    pub is_available: bool,
}
