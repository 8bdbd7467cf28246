//! Server binary: loads config from env, opens the catalog read-only, serves the catalog routes.

use dua_catalog::{app_router, AppState, ServerConfig, SqliteCatalog};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dua_catalog=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let catalog = SqliteCatalog::connect(&config.database_url, config.max_connections)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, url = %config.database_url, "error connecting to database");
            e
        })?;
    tracing::info!(url = %config.database_url, "connected to the database");

    let app = app_router(AppState::new(catalog), &config)?;
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("server is running on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
