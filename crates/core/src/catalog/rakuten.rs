//! Rakuten Books API client.
//!
//! One GET per search, no retries and no result caching. Rate limiting is
//! left to Rakuten's side.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::CatalogConfig;

use super::query::{EndpointQuery, SearchRequest};
use super::{BookCatalog, CatalogError};

/// Rakuten Books API client.
pub struct RakutenBooksClient {
    client: Client,
    config: CatalogConfig,
}

impl RakutenBooksClient {
    /// Create a new client.
    ///
    /// An empty application credential is accepted; the request is sent
    /// anyway and surfaces as an upstream API error.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()?;

        Ok(Self { client, config })
    }

    /// Assemble the full endpoint URL for a search request.
    fn endpoint_url(&self, request: &SearchRequest) -> String {
        let query = EndpointQuery::for_request(&self.config, request);
        format!(
            "{}?{}",
            self.config.base_url.trim_end_matches('/'),
            query.to_query_string()
        )
    }
}

#[async_trait]
impl BookCatalog for RakutenBooksClient {
    async fn search(&self, request: &SearchRequest) -> Result<serde_json::Value, CatalogError> {
        let url = self.endpoint_url(request);

        // The URL carries credentials, so only the mode is logged.
        debug!(mode = %request.mode(), "Rakuten Books search");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                message: body.chars().take(200).collect::<String>(),
            });
        }

        let payload: serde_json::Value = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse search response: {}", e))
        })?;

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(config: CatalogConfig) -> RakutenBooksClient {
        RakutenBooksClient::new(config).unwrap()
    }

    #[test]
    fn test_endpoint_url_contains_base_and_pairs() {
        let config = CatalogConfig {
            application_id: "test-app-id".to_string(),
            ..CatalogConfig::default()
        };
        let client = client(config);

        let url = client.endpoint_url(&SearchRequest::ByIsbn {
            isbn: "9784101092058".to_string(),
        });
        assert!(url.starts_with(
            "https://app.rakuten.co.jp/services/api/BooksBook/Search/20170404?format=json"
        ));
        assert!(url.contains("applicationId=test-app-id"));
        assert!(url.ends_with("&isbn=9784101092058"));
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let config = CatalogConfig {
            base_url: "http://localhost:9117/books/".to_string(),
            application_id: "key".to_string(),
            ..CatalogConfig::default()
        };
        let client = client(config);

        let url = client.endpoint_url(&SearchRequest::ByTitle {
            title: "test".to_string(),
            page: "1".to_string(),
        });
        assert!(url.starts_with("http://localhost:9117/books?"));
    }

    #[test]
    fn test_endpoint_url_with_empty_credential() {
        let client = client(CatalogConfig::default());
        let url = client.endpoint_url(&SearchRequest::ByIsbn {
            isbn: "123".to_string(),
        });
        assert!(url.contains("applicationId=&"));
    }
}
