//! Application Startup
//!
//! Dependency wiring and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{BeerService, BeerServiceImpl};
use crate::config::{CorsSettings, Settings};
use crate::infrastructure::database;
use crate::infrastructure::providers::RestCurrencyConverter;
use crate::infrastructure::repositories::MySqlBeerRepository;
use crate::presentation::http::routes;
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub beer_service: Arc<dyn BeerService>,
}

impl AppState {
    pub fn new(beer_service: Arc<dyn BeerService>) -> Self {
        Self { beer_service }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let db = database::create_pool(&settings.database)
            .await
            .context("failed to connect to MySQL")?;
        tracing::info!("Database connection pool created");

        database::run_migrations(&db)
            .await
            .context("failed to run database migrations")?;
        tracing::info!("Database migrations applied");

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.http_client.timeout_ms))
            .build()
            .context("failed to build HTTP client")?;

        let beer_repo = Arc::new(MySqlBeerRepository::new(db));
        let currency_converter = Arc::new(RestCurrencyConverter::from_settings(
            http_client,
            &settings.currency_converter,
        ));
        let beer_service = Arc::new(BeerServiceImpl::new(beer_repo, currency_converter));

        let router = build_router(AppState::new(beer_service), &settings.cors);

        let addr: SocketAddr = settings
            .server_addr()
            .parse()
            .with_context(|| format!("invalid server address {}", settings.server_addr()))?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until ctrl-c is received
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Router with tracing and CORS layers applied.
pub fn build_router(state: AppState, cors: &CorsSettings) -> Router {
    routes::create_router(state)
        .layer(create_trace_layer())
        .layer(create_cors_layer(cors))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
