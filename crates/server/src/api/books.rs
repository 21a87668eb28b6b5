//! Book search handlers.
//!
//! Each route validates its mode's required parameters, performs one search
//! against the catalog and writes exactly one reply. Failures are reported
//! inside the JSON body; the transport status is always 200, so callers
//! inspect the payload to detect errors.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use bookrelay_core::{SearchMode, SearchRequest};

use crate::state::AppState;

/// GET /api/v1/books/isbn?isbn=...
pub async fn search_by_isbn(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    dispatch(&state, SearchMode::Isbn, &params).await
}

/// GET /api/v1/books/title?title=...&page=...
pub async fn search_by_title(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    dispatch(&state, SearchMode::Title, &params).await
}

/// GET /api/v1/books/author?author=...&page=...
pub async fn search_by_author(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    dispatch(&state, SearchMode::Author, &params).await
}

/// GET /api/v1/books/publisher?publisher=...&page=...
pub async fn search_by_publisher(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    dispatch(&state, SearchMode::Publisher, &params).await
}

/// GET /api/v1/books/genre?genre=...&page=...
pub async fn search_by_genre(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    dispatch(&state, SearchMode::Genre, &params).await
}

/// Shared validate-then-fetch pipeline for all five modes.
async fn dispatch(
    state: &AppState,
    mode: SearchMode,
    params: &HashMap<String, String>,
) -> Json<Value> {
    let request = match SearchRequest::from_params(mode, params) {
        Ok(request) => request,
        Err(missing) => {
            warn!(mode = %mode, missing = missing.0, "Parameters were invalid.");
            return Json(api_error(412, "Precondition failed"));
        }
    };

    match state.catalog().search(&request).await {
        Ok(payload) => {
            info!(mode = %mode, "The connection is successful.");
            Json(payload)
        }
        Err(e) => {
            // The upstream detail goes to the log only, never to the caller.
            error!(mode = %mode, error = %e, "An error occurred.");
            Json(api_error(418, "I'm a teapot"))
        }
    }
}

fn api_error(status: u16, message: &str) -> Value {
    json!({
        "error": {
            "status": status,
            "message": message,
        }
    })
}
