//! Dorm management REST API: axum handlers over a PostgreSQL store.

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use docs::ApiDoc;
pub use error::ApiError;
pub use models::{Dorm, DormInput, DormWithRooms, Room};
pub use routes::app_router;
pub use state::AppState;
pub use store::DormStore;
