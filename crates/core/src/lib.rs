pub mod catalog;
pub mod config;
pub mod testing;

pub use catalog::{
    BookCatalog, CatalogError, EndpointQuery, MissingParameter, RakutenBooksClient, SearchMode,
    SearchRequest,
};
pub use config::{
    load_config, load_config_from_str, CatalogConfig, Config, ConfigError, SanitizedConfig,
    ServerConfig,
};
