//! Shared application state for all routes.

use sqlx::PgPool;

/// The connection pool is the only shared dependency between handlers;
/// everything else is request-scoped.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
