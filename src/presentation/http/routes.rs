//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{routing::get, Router};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/beers", beer_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .with_state(state)
}

/// Beer catalog routes
fn beer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::beer::list_beers).post(handlers::beer::create_beer),
        )
        .route("/{beer_id}", get(handlers::beer::get_beer))
        .route("/{beer_id}/boxprice", get(handlers::beer::get_box_price))
}
