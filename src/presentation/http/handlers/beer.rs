//! Beer Handlers

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{BoxPriceQuery, BoxPriceResponse, CreateBeerRequest, BEER_CREATED};
use crate::domain::Beer;
use crate::presentation::http::extractors::BeerId;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all beers
pub async fn list_beers(State(state): State<AppState>) -> Result<Json<Vec<Beer>>, AppError> {
    let beers = state.beer_service.list_beers().await?;

    Ok(Json(beers))
}

/// Get beer by ID
pub async fn get_beer(
    State(state): State<AppState>,
    BeerId(beer_id): BeerId,
) -> Result<Json<Beer>, AppError> {
    let beer = state.beer_service.get_beer_by_id(beer_id).await?;

    Ok(Json(beer))
}

/// Price of a box of beers, optionally converted to another currency
pub async fn get_box_price(
    State(state): State<AppState>,
    BeerId(beer_id): BeerId,
    Query(query): Query<BoxPriceQuery>,
) -> Result<Json<BoxPriceResponse>, AppError> {
    let quantity = parse_quantity(query.quantity.as_deref())?;
    let currency = query.currency.unwrap_or_default();

    let total_price = state
        .beer_service
        .get_box_price(beer_id, &currency, quantity)
        .await?;

    Ok(Json(BoxPriceResponse { total_price }))
}

/// Create a new beer
///
/// The body is parsed as JSON whatever the request's Content-Type says.
pub async fn create_beer(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<&'static str>), AppError> {
    let body: CreateBeerRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected create beer body");
        AppError::BadRequest("invalid json body".into())
    })?;

    state.beer_service.create_beer(Beer::from(body)).await?;

    Ok((StatusCode::CREATED, Json(BEER_CREATED)))
}

/// An absent parameter is parsed as an empty string and rejected; only an
/// explicit `0` selects the default box size.
fn parse_quantity(raw: Option<&str>) -> Result<u64, AppError> {
    raw.unwrap_or_default()
        .parse()
        .map_err(|_| AppError::BadRequest("quantity should be a positive number".into()))
}
