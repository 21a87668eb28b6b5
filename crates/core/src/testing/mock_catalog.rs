//! Mock book catalog for testing.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::catalog::{BookCatalog, CatalogError, SearchRequest};

/// Mock implementation of the [`BookCatalog`] trait.
///
/// Provides controllable behavior for testing:
/// - Return a configurable payload
/// - Track performed searches for assertions
/// - Simulate upstream failures
pub struct MockBookCatalog {
    /// Payload returned on success.
    payload: Arc<RwLock<Value>>,
    /// Recorded search requests.
    requests: Arc<RwLock<Vec<SearchRequest>>>,
    /// If set, the next search fails with this error.
    next_error: Arc<RwLock<Option<CatalogError>>>,
}

impl Default for MockBookCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBookCatalog {
    /// Create a new mock catalog returning an empty item list.
    pub fn new() -> Self {
        Self {
            payload: Arc::new(RwLock::new(json!({ "Items": [] }))),
            requests: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the payload returned by subsequent searches.
    pub async fn set_payload(&self, payload: Value) {
        *self.payload.write().await = payload;
    }

    /// Get all recorded search requests.
    pub async fn recorded_requests(&self) -> Vec<SearchRequest> {
        self.requests.read().await.clone()
    }

    /// Get the number of searches performed.
    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }

    /// Clear recorded requests.
    pub async fn clear_recorded(&self) {
        self.requests.write().await.clear();
    }

    /// Configure the next search to fail with the given error.
    pub async fn set_next_error(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<CatalogError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl BookCatalog for MockBookCatalog {
    async fn search(&self, request: &SearchRequest) -> Result<Value, CatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.requests.write().await.push(request.clone());

        Ok(self.payload.read().await.clone())
    }
}
