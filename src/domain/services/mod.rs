//! # Domain Services
//!
//! Contracts for collaborators the domain depends on but does not implement.
//!
//! ## Services
//!
//! - **CurrencyConverter**: Converts an amount from one currency to another

mod currency_converter;

pub use currency_converter::*;
