//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database repositories (MySQL)
//! - External API clients (currency conversion)

pub mod database;
pub mod providers;
pub mod repositories;
