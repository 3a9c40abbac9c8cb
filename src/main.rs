//! Service entry point: config, pool, schema, router, listener.

use std::net::SocketAddr;

use dorm_api::{app_router, AppConfig, AppState};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("dorm_api=info".parse()?))
        .init();

    let config = AppConfig::from_env();
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url())
        .await?;

    // Connectivity probe; refuse to start against an unreachable database.
    sqlx::query("SELECT 1").execute(&pool).await?;
    tracing::info!(host = %config.db_host, db = %config.db_name, "connected to PostgreSQL");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let app = app_router(AppState { pool });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
