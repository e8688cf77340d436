//! # Beer Catalog Library
//!
//! A small catalog service for beers:
//! - list beers and fetch one by ID
//! - price a box of N units, optionally converted to another currency
//! - create new beer records
//!
//! ## Architecture
//!
//! - **Domain Layer**: Beer entity, its validation, and collaborator traits
//! - **Application Layer**: Beer service and DTOs
//! - **Infrastructure Layer**: MySQL repository and currency exchange client
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! beer_catalog/
//! +-- config/         Configuration management
//! +-- domain/         Entities and collaborator contracts
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Database and HTTP client implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
