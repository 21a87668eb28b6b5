use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Rakuten Books catalog configuration.
///
/// An empty `application_id` is accepted here on purpose: the upstream call
/// is still attempted with the empty credential and fails on the Rakuten
/// side, matching the behavior of the environment-variable based setup this
/// service replaces.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Rakuten Books search API route.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Rakuten application credential.
    #[serde(default)]
    pub application_id: String,
    /// Optional affiliate credential.
    #[serde(default)]
    pub affiliate_id: Option<String>,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            application_id: String::new(),
            affiliate_id: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://app.rakuten.co.jp/services/api/BooksBook/Search/20170404".to_string()
}

fn default_timeout() -> u32 {
    30
}

/// Sanitized config for API responses (credentials redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub catalog: SanitizedCatalogConfig,
}

/// Sanitized catalog config (credentials reduced to presence flags)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedCatalogConfig {
    pub base_url: String,
    pub application_id_configured: bool,
    pub affiliate_id_configured: bool,
    pub timeout_secs: u32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            catalog: SanitizedCatalogConfig {
                base_url: config.catalog.base_url.clone(),
                application_id_configured: !config.catalog.application_id.is_empty(),
                affiliate_id_configured: config
                    .catalog
                    .affiliate_id
                    .as_ref()
                    .is_some_and(|id| !id.is_empty()),
                timeout_secs: config.catalog.timeout_secs,
            },
        }
    }
}
