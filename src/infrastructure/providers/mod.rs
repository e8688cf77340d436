//! External Providers
//!
//! Clients for third-party HTTP APIs.

pub mod currency_converter_client;

pub use currency_converter_client::RestCurrencyConverter;
