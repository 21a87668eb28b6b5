//! Rakuten Books catalog integration.
//!
//! This module models the outbound search request (one of five modes),
//! assembles the endpoint query string and performs the single GET against
//! the Rakuten Books API. The success payload is treated as an opaque JSON
//! document and relayed to the caller untouched.

mod query;
mod rakuten;

pub use query::{EndpointQuery, MissingParameter, SearchMode, SearchRequest};
pub use rakuten::RakutenBooksClient;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when querying the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Trait for book catalog clients.
///
/// Implemented by [`RakutenBooksClient`] and by the mock in
/// [`crate::testing`], so handlers can be exercised without network access.
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// Perform one search against the catalog, returning the raw payload.
    async fn search(&self, request: &SearchRequest) -> Result<serde_json::Value, CatalogError>;
}
