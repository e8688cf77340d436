//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;

use crate::domain::Beer;

/// Create beer request
///
/// Absent and `null` fields fall back to their zero value so that entity
/// validation, not deserialization, reports them.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateBeerRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub brewery: Option<String>,
    pub country: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
}

impl From<CreateBeerRequest> for Beer {
    fn from(req: CreateBeerRequest) -> Self {
        Self {
            id: req.id.unwrap_or_default(),
            name: req.name.unwrap_or_default(),
            brewery: req.brewery.unwrap_or_default(),
            country: req.country.unwrap_or_default(),
            price: req.price.unwrap_or_default(),
            currency: req.currency.unwrap_or_default(),
        }
    }
}

/// Box price query parameters
///
/// Kept as raw strings so the handler can report parse failures with its own
/// messages.
#[derive(Debug, Default, Deserialize)]
pub struct BoxPriceQuery {
    pub currency: Option<String>,
    pub quantity: Option<String>,
}
