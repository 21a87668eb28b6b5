//! Common test utilities for exercising the router in-process.
//!
//! The fixture wires the real router to a mock catalog so handler behavior
//! can be tested without network access or a running Rakuten endpoint.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use bookrelay_core::{testing::MockBookCatalog, BookCatalog, Config};
use bookrelay_server::api::create_router;
use bookrelay_server::state::AppState;

/// Test fixture with an in-process router and a controllable mock catalog.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock catalog - configure payloads, inject errors, inspect requests
    pub catalog: Arc<MockBookCatalog>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a test fixture with custom configuration.
    pub fn with_config(config: Config) -> Self {
        let catalog = Arc::new(MockBookCatalog::new());

        let state = Arc::new(AppState::new(
            config,
            Arc::clone(&catalog) as Arc<dyn BookCatalog>,
        ));

        Self {
            router: create_router(state),
            catalog,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
