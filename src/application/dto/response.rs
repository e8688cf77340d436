//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::{Deserialize, Serialize};

/// Box price response
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BoxPriceResponse {
    pub total_price: f64,
}

/// Body returned after a beer is created.
pub const BEER_CREATED: &str = "Beer created";
