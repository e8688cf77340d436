//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::shared::error::AppError;

const INVALID_ID: &str = "id should be a number";

/// Beer ID taken from the `{beer_id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeerId(pub i64);

impl<S> FromRequestParts<S> for BeerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(INVALID_ID.into()))?;

        raw.parse()
            .map(BeerId)
            .map_err(|_| AppError::BadRequest(INVALID_ID.into()))
    }
}
