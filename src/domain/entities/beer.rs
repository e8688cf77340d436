//! Beer entity and repository trait.
//!
//! Maps to the `beer` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A single catalog item.
///
/// Maps to the `beer` table:
/// - id: BIGINT PRIMARY KEY (assigned by the caller)
/// - name: VARCHAR(45)
/// - brewery: VARCHAR(45)
/// - country: VARCHAR(45) NOT NULL
/// - price: DOUBLE
/// - currency: VARCHAR(32) NOT NULL
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Beer {
    /// Primary key, never generated by storage
    pub id: i64,

    pub name: String,

    pub brewery: String,

    pub country: String,

    /// Unit price, denominated in `currency`
    pub price: f64,

    /// Free-form currency code (e.g. "COP", "USD")
    pub currency: String,
}

impl Beer {
    /// Check that the record may be persisted.
    ///
    /// Fields are checked in the order id, name, brewery, country, price,
    /// currency and the first failing field is reported alone.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.id == 0 {
            return Err(invalid("Id", self.id));
        }

        if is_blank(&self.name) {
            return Err(invalid("Name", &self.name));
        }

        if is_blank(&self.brewery) {
            return Err(invalid("Brewery", &self.brewery));
        }

        if is_blank(&self.country) {
            return Err(invalid("Country", &self.country));
        }

        if self.price == 0.0 {
            return Err(invalid("Price", format!("{:.6}", self.price)));
        }

        if is_blank(&self.currency) {
            return Err(invalid("Currency", &self.currency));
        }

        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn invalid(field: &str, value: impl std::fmt::Display) -> AppError {
    AppError::BadRequest(format!("invalid {}: {}", field, value))
}

/// Repository trait for Beer data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BeerRepository: Send + Sync {
    /// Return every stored beer.
    async fn list(&self) -> Result<Vec<Beer>, AppError>;

    /// Find a beer by its ID. A missing row is reported as `NotFound`.
    async fn get_by_id(&self, id: i64) -> Result<Beer, AppError>;

    /// Insert a new beer. A duplicate ID is reported as `Conflict`.
    async fn save(&self, beer: &Beer) -> Result<(), AppError>;
}
