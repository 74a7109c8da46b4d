use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use domain::services::gateway::{NotificationGateway, RandomizedGateway};
use persistence::store::{CatalogStore, Latency};

mod app;
mod config;
mod error;
mod middleware;
mod routes;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging
    middleware::logging::init_logging(&config.logging);

    info!("Starting Photo Portal API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize metrics recorder
    middleware::metrics::init_metrics();

    // Seed the fixture catalog
    let latency = if config.mock.latency_enabled {
        Latency::simulated()
    } else {
        Latency::disabled()
    };
    let catalog = Arc::new(CatalogStore::seed(latency));
    info!(
        deals = catalog.deal_count(),
        groups = catalog.group_count(),
        latency_simulation = latency.is_enabled(),
        "Seeded fixture catalog"
    );

    // Build the mock notification gateway
    let gateway: Arc<dyn NotificationGateway> = Arc::new(RandomizedGateway::new(
        config.mock.gateway_success_rate,
        config.mock.gateway_delay_ms,
    ));

    // Build application
    let app = app::create_app(config.clone(), catalog, gateway);

    // Start server
    let addr = config.socket_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
