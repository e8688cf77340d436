//! Beer Service
//!
//! Catalog operations: listing, lookup, box pricing and creation.
//!
//! The service decides *when* to call the storage and currency collaborators
//! and never reinterprets their errors. The only errors it creates itself are
//! `BadRequest` for input it rejects before delegating.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Beer, BeerRepository, CurrencyConverter};
use crate::shared::error::AppError;

/// Quantity used for a box price when the caller asks for zero units.
pub const DEFAULT_BOX_QUANTITY: u64 = 6;

/// Beer service trait
#[async_trait]
pub trait BeerService: Send + Sync {
    /// List every beer in the catalog
    async fn list_beers(&self) -> Result<Vec<Beer>, AppError>;

    /// Get a beer by ID
    async fn get_beer_by_id(&self, beer_id: i64) -> Result<Beer, AppError>;

    /// Price of `quantity` units of a beer expressed in `currency`
    async fn get_box_price(
        &self,
        beer_id: i64,
        currency: &str,
        quantity: u64,
    ) -> Result<f64, AppError>;

    /// Validate and store a new beer
    async fn create_beer(&self, beer: Beer) -> Result<(), AppError>;
}

/// BeerService implementation
///
/// Both collaborators are optional. Operations that need an absent
/// collaborator panic: wiring a service without one is a programming error,
/// not a request failure.
#[derive(Clone, Default)]
pub struct BeerServiceImpl {
    beer_repo: Option<Arc<dyn BeerRepository>>,
    currency_converter: Option<Arc<dyn CurrencyConverter>>,
}

impl BeerServiceImpl {
    pub fn new(
        beer_repo: Arc<dyn BeerRepository>,
        currency_converter: Arc<dyn CurrencyConverter>,
    ) -> Self {
        Self {
            beer_repo: Some(beer_repo),
            currency_converter: Some(currency_converter),
        }
    }

    /// Service without currency conversion. Box prices can still be computed
    /// when the requested currency matches the beer's own.
    pub fn with_repository(beer_repo: Arc<dyn BeerRepository>) -> Self {
        Self {
            beer_repo: Some(beer_repo),
            currency_converter: None,
        }
    }

    fn beer_repo(&self) -> &dyn BeerRepository {
        self.beer_repo
            .as_deref()
            .expect("BeerServiceImpl used without a beer repository")
    }

    fn currency_converter(&self) -> &dyn CurrencyConverter {
        self.currency_converter
            .as_deref()
            .expect("BeerServiceImpl used without a currency converter")
    }
}

#[async_trait]
impl BeerService for BeerServiceImpl {
    async fn list_beers(&self) -> Result<Vec<Beer>, AppError> {
        self.beer_repo().list().await
    }

    async fn get_beer_by_id(&self, beer_id: i64) -> Result<Beer, AppError> {
        self.beer_repo().get_by_id(beer_id).await
    }

    async fn get_box_price(
        &self,
        beer_id: i64,
        currency: &str,
        quantity: u64,
    ) -> Result<f64, AppError> {
        if currency.trim().is_empty() {
            return Err(AppError::BadRequest("currency must not be empty".into()));
        }

        let quantity = if quantity == 0 {
            tracing::debug!(beer_id, "No quantity requested, using default box size");
            DEFAULT_BOX_QUANTITY
        } else {
            quantity
        };

        let beer = self.get_beer_by_id(beer_id).await?;

        if beer.currency == currency {
            tracing::debug!(beer_id, currency, "Same currency, skipping conversion");
            return Ok(beer.price * quantity as f64);
        }

        let unit_price = self
            .currency_converter()
            .convert(&beer.currency, currency, beer.price)
            .await?;

        tracing::debug!(
            beer_id,
            from = %beer.currency,
            to = currency,
            unit_price,
            "Converted unit price"
        );

        Ok(unit_price * quantity as f64)
    }

    async fn create_beer(&self, beer: Beer) -> Result<(), AppError> {
        beer.validate()?;

        self.beer_repo().save(&beer).await
    }
}
