use std::sync::Arc;

use bookrelay_core::{BookCatalog, Config, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    catalog: Arc<dyn BookCatalog>,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<dyn BookCatalog>) -> Self {
        Self { config, catalog }
    }

    pub fn catalog(&self) -> &dyn BookCatalog {
        self.catalog.as_ref()
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }
}
