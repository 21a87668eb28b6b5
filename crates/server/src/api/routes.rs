use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{books, handlers};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Book search, one route per mode
        .route("/books/isbn", get(books::search_by_isbn))
        .route("/books/title", get(books::search_by_title))
        .route("/books/author", get(books::search_by_author))
        .route("/books/publisher", get(books::search_by_publisher))
        .route("/books/genre", get(books::search_by_genre))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
}
