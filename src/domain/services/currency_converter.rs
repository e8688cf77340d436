//! Currency conversion contract.

use async_trait::async_trait;

use crate::shared::error::AppError;

/// Converts an amount between two currency codes.
///
/// Implementations own their transport concerns (timeouts, connection reuse);
/// any failure is reported as `AppError::Internal`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CurrencyConverter: Send + Sync {
    /// Convert `amount` expressed in `from` into `to`.
    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64, AppError>;
}
