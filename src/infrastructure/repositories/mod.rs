//! Repository Implementations
//!
//! MySQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **BeerRepository** - Beer catalog storage
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::MySqlPool;
//! use crate::infrastructure::repositories::MySqlBeerRepository;
//!
//! fn setup_repositories(pool: MySqlPool) {
//!     let beer_repo = MySqlBeerRepository::new(pool);
//! }
//! ```

pub mod beer_repository;

pub use beer_repository::MySqlBeerRepository;
