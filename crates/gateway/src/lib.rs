//! API Gateway Library
//!
//! JSON HTTP surface over the hub service: user listing, todos and health.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use hub_service_lib::infra::Database;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Connect to the database, wire the services and serve HTTP.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let database = Database::connect(&config.database).await?;

    // Build app
    let state = AppState::from_database(database);
    let app = create_router(state);

    // Build address
    let addr: SocketAddr = config.server_addr().parse()?;
    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
