//! Storage gateway: parameterized SQL against PostgreSQL, rows mapped to
//! entities. Owns no business logic beyond that mapping.

use sqlx::{PgPool, Row};

use crate::models::{Dorm, DormInput, DormWithRooms, Room};

/// Column list for full `dorms` reads.
const DORM_COLUMNS: &str =
    "id, name, location, capacity, price_per_month, is_available, created_at, updated_at";

/// CRUD operations for dorm rows plus the joined dorm/room listing.
pub struct DormStore;

impl DormStore {
    /// Insert one dorm. The server assigns `id` and `created_at`; the
    /// returned entity carries no `updated_at`.
    pub async fn create(pool: &PgPool, input: &DormInput) -> Result<Dorm, sqlx::Error> {
        tracing::debug!(name = %input.name, "insert dorm");
        let row = sqlx::query(
            "INSERT INTO dorms (name, location, capacity, price_per_month, is_available) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, created_at",
        )
        .bind(&input.name)
        .bind(&input.location)
        .bind(input.capacity)
        .bind(input.price_per_month)
        .bind(input.is_available)
        .fetch_one(pool)
        .await?;

        Ok(Dorm {
            id: row.try_get("id")?,
            name: input.name.clone(),
            location: input.location.clone(),
            capacity: input.capacity,
            price_per_month: input.price_per_month,
            is_available: input.is_available,
            created_at: Some(row.try_get("created_at")?),
            updated_at: None,
        })
    }

    /// All dorms in ascending `id` order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Dorm>, sqlx::Error> {
        let query = format!("SELECT {DORM_COLUMNS} FROM dorms ORDER BY id");
        sqlx::query_as::<_, Dorm>(&query).fetch_all(pool).await
    }

    /// Fetch one dorm by id. This path selects a narrower column list than
    /// `list`: `price_per_month` and `is_available` come back zero-valued
    /// and `updated_at` is absent.
    pub async fn get(pool: &PgPool, id: i32) -> Result<Option<Dorm>, sqlx::Error> {
        let row = sqlx::query(
            "SELECT id, name, location, capacity, created_at FROM dorms WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        row.map(|r| -> Result<Dorm, sqlx::Error> {
            Ok(Dorm {
                id: r.try_get("id")?,
                name: r.try_get("name")?,
                location: r.try_get("location")?,
                capacity: r.try_get("capacity")?,
                price_per_month: 0.0,
                is_available: false,
                created_at: Some(r.try_get("created_at")?),
                updated_at: None,
            })
        })
        .transpose()
    }

    /// Overwrite all writable fields of one dorm and refresh `updated_at`.
    /// Returns `None` when no row matched.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        input: &DormInput,
    ) -> Result<Option<Dorm>, sqlx::Error> {
        tracing::debug!(id, "update dorm");
        let query = format!(
            "UPDATE dorms \
             SET name = $1, location = $2, capacity = $3, price_per_month = $4, \
                 is_available = $5, updated_at = NOW() \
             WHERE id = $6 \
             RETURNING {DORM_COLUMNS}"
        );
        sqlx::query_as::<_, Dorm>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .bind(input.capacity)
            .bind(input.price_per_month)
            .bind(input.is_available)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete one dorm. Returns true when at least one row was affected.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        tracing::debug!(id, "delete dorm");
        let result = sqlx::query("DELETE FROM dorms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All dorms with their rooms, from a single LEFT JOIN ordered by dorm
    /// id then room id. Dorms without rooms appear with an empty `rooms`
    /// vec; the join omits dorm timestamps.
    pub async fn list_with_rooms(pool: &PgPool) -> Result<Vec<DormWithRooms>, sqlx::Error> {
        let rows = sqlx::query_as::<_, DormRoomRow>(
            "SELECT d.id, d.name, d.location, d.capacity, d.price_per_month, d.is_available, \
                    r.id AS room_id, r.room_number, r.floor, r.size_sqm, r.is_occupied, \
                    r.price_per_month AS room_price \
             FROM dorms d \
             LEFT JOIN rooms r ON d.id = r.dorm_id \
             ORDER BY d.id, r.id",
        )
        .fetch_all(pool)
        .await?;

        Ok(group_join_rows(rows))
    }
}

/// One row of the dorm/room LEFT JOIN. Room columns are `Option` because a
/// dorm without rooms joins against NULLs.
#[derive(Debug, sqlx::FromRow)]
struct DormRoomRow {
    id: i32,
    name: String,
    location: String,
    capacity: i32,
    price_per_month: f64,
    is_available: bool,
    room_id: Option<i32>,
    room_number: Option<String>,
    floor: Option<i32>,
    size_sqm: Option<f64>,
    is_occupied: Option<bool>,
    room_price: Option<f64>,
}

/// Fold join rows (already sorted by dorm id, room id) into composites.
/// A NULL `room_id` contributes no room, so every dorm appears exactly once.
fn group_join_rows(rows: Vec<DormRoomRow>) -> Vec<DormWithRooms> {
    let mut out: Vec<DormWithRooms> = Vec::new();
    for row in rows {
        if out.last().map(|d| d.dorm.id) != Some(row.id) {
            out.push(DormWithRooms {
                dorm: Dorm {
                    id: row.id,
                    name: row.name.clone(),
                    location: row.location.clone(),
                    capacity: row.capacity,
                    price_per_month: row.price_per_month,
                    is_available: row.is_available,
                    created_at: None,
                    updated_at: None,
                },
                rooms: Vec::new(),
            });
        }
        if let (Some(entry), Some(room_id)) = (out.last_mut(), row.room_id) {
            entry.rooms.push(Room {
                id: room_id,
                dorm_id: row.id,
                room_number: row.room_number.unwrap_or_default(),
                floor: row.floor.unwrap_or_default(),
                size_sqm: row.size_sqm.unwrap_or_default(),
                is_occupied: row.is_occupied.unwrap_or_default(),
                price_per_month: row.room_price.unwrap_or_default(),
            });
        }
    }
    out
}
