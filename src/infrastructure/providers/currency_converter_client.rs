//! Currency Converter Client
//!
//! REST implementation of the CurrencyConverter trait. The remote API answers
//! `GET {base_url}/exchange?from=..&to=..` with the bare exchange rate as a
//! JSON number.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::config::CurrencyConverterSettings;
use crate::domain::CurrencyConverter;
use crate::shared::error::AppError;

const API_KEY_HEADER: &str = "x-rapidapi-key";
const CONVERSION_ERROR: &str = "error trying to convert from one currency to another";

#[derive(Debug, thiserror::Error)]
enum ExchangeError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(StatusCode),
}

/// HTTP client for the currency exchange API.
#[derive(Clone)]
pub struct RestCurrencyConverter {
    client: Client,
    base_url: String,
    request_timeout: Duration,
    api_key: String,
}

impl RestCurrencyConverter {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        request_timeout: Duration,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            request_timeout,
            api_key: api_key.into(),
        }
    }

    /// Build a converter from settings, sharing the given client.
    pub fn from_settings(client: Client, settings: &CurrencyConverterSettings) -> Self {
        Self::new(
            client,
            settings.base_url.clone(),
            Duration::from_millis(settings.request_timeout_ms),
            settings.api_key.clone(),
        )
    }

    fn exchange_url(&self) -> String {
        format!("{}/exchange", self.base_url.trim_end_matches('/'))
    }

    async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64, ExchangeError> {
        let response = self
            .client
            .get(self.exchange_url())
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[("from", from), ("to", to)])
            .timeout(self.request_timeout)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ExchangeError::Status(response.status()));
        }

        Ok(response.json::<f64>().await?)
    }
}

#[async_trait]
impl CurrencyConverter for RestCurrencyConverter {
    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64, AppError> {
        let rate = self.fetch_rate(from, to).await.map_err(|e| {
            tracing::error!(from, to, error = %e, "Currency conversion failed");
            AppError::Internal(CONVERSION_ERROR.into())
        })?;

        Ok(rate * amount)
    }
}
