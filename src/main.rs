//! # Beer Catalog
//!
//! Application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool and migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use beer_catalog::config::Settings;
use beer_catalog::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    beer_catalog::telemetry::init_tracing();

    info!("Starting Beer Catalog...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
