//! # Domain Entities
//!
//! Core domain entities representing the business objects of the catalog.
//! All entities map directly to their corresponding database tables.
//!
//! - **Beer**: A catalog item with its unit price and currency
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod beer;

pub use beer::{Beer, BeerRepository};

#[cfg(test)]
pub use beer::MockBeerRepository;
