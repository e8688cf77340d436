//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **BeerService**: Catalog listing, lookup, box pricing and creation

pub mod beer_service;

// Re-export beer service types
pub use beer_service::{BeerService, BeerServiceImpl, DEFAULT_BOX_QUANTITY};
