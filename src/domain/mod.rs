//! # Domain Layer
//!
//! The domain layer contains the core business rules of the beer catalog.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (Beer) and their repository traits
//! - **services**: Contracts for external collaborators (currency conversion)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository and collaborator traits define data access contracts
//! - Entities encapsulate their own validation rules

pub mod entities;
pub mod services;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
