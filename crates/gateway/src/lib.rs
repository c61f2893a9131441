//! API Gateway Library
//!
//! HTTP REST API of the placement CRM. The placement service runs in-process;
//! this crate only translates requests into service calls and errors into
//! JSON responses.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use placement_service_lib::infra::Database;
use placement_service_lib::Services;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Connect to the database, apply migrations and serve HTTP until shutdown.
pub async fn run(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;

    let database = Database::connect(&config.placement.database).await?;
    let services = Services::new(&database, &config.placement);
    let app = create_router(AppState::new(services, database));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
