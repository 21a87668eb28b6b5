//! Search request model and endpoint query assembly.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::config::CatalogConfig;

/// A required inbound parameter was absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required parameter: {0}")]
pub struct MissingParameter(pub &'static str);

/// The five search dimensions offered by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Isbn,
    Title,
    Author,
    Publisher,
    Genre,
}

impl SearchMode {
    /// Keys that must be present in the inbound parameter map.
    ///
    /// Validation is presence-only: values are not type- or range-checked.
    pub fn required_keys(&self) -> &'static [&'static str] {
        match self {
            SearchMode::Isbn => &["isbn"],
            SearchMode::Title => &["title", "page"],
            SearchMode::Author => &["author", "page"],
            SearchMode::Publisher => &["publisher", "page"],
            SearchMode::Genre => &["genre", "page"],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchMode::Isbn => "isbn",
            SearchMode::Title => "title",
            SearchMode::Author => "author",
            SearchMode::Publisher => "publisher",
            SearchMode::Genre => "genre",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One outbound search, built once per inbound call.
///
/// All fields are carried as the raw strings delivered by the HTTP layer;
/// encoding happens at query-assembly time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    ByIsbn { isbn: String },
    ByTitle { title: String, page: String },
    ByAuthor { author: String, page: String },
    ByPublisher { publisher: String, page: String },
    ByGenre { genre: String, page: String },
}

impl SearchRequest {
    /// Build a request from the inbound parameter map.
    ///
    /// Fails with the first absent key from [`SearchMode::required_keys`];
    /// no upstream call happens in that case.
    pub fn from_params(
        mode: SearchMode,
        params: &HashMap<String, String>,
    ) -> Result<Self, MissingParameter> {
        for &key in mode.required_keys() {
            if !params.contains_key(key) {
                return Err(MissingParameter(key));
            }
        }

        let get = |key: &str| params[key].clone();

        Ok(match mode {
            SearchMode::Isbn => SearchRequest::ByIsbn { isbn: get("isbn") },
            SearchMode::Title => SearchRequest::ByTitle {
                title: get("title"),
                page: get("page"),
            },
            SearchMode::Author => SearchRequest::ByAuthor {
                author: get("author"),
                page: get("page"),
            },
            SearchMode::Publisher => SearchRequest::ByPublisher {
                publisher: get("publisher"),
                page: get("page"),
            },
            SearchMode::Genre => SearchRequest::ByGenre {
                genre: get("genre"),
                page: get("page"),
            },
        })
    }

    pub fn mode(&self) -> SearchMode {
        match self {
            SearchRequest::ByIsbn { .. } => SearchMode::Isbn,
            SearchRequest::ByTitle { .. } => SearchMode::Title,
            SearchRequest::ByAuthor { .. } => SearchMode::Author,
            SearchRequest::ByPublisher { .. } => SearchMode::Publisher,
            SearchRequest::ByGenre { .. } => SearchMode::Genre,
        }
    }

    /// Append this request's mode-specific pairs to the endpoint query.
    ///
    /// Free-text fields are encoded; identifier and page values pass through
    /// verbatim. Genre IDs get the literal `001` prefix selecting the book
    /// category in the Rakuten genre taxonomy.
    fn append_to(&self, query: &mut EndpointQuery) {
        match self {
            SearchRequest::ByIsbn { isbn } => {
                query.push_raw("isbn", isbn);
            }
            SearchRequest::ByTitle { title, page } => {
                query.push_encoded("title", title);
                query.push_raw("page", page);
                query.push_raw("sort", "sales");
            }
            SearchRequest::ByAuthor { author, page } => {
                query.push_encoded("author", author);
                query.push_raw("page", page);
                query.push_raw("sort", "sales");
            }
            SearchRequest::ByPublisher { publisher, page } => {
                query.push_encoded("publisherName", publisher);
                query.push_raw("page", page);
                query.push_raw("sort", "sales");
            }
            SearchRequest::ByGenre { genre, page } => {
                query.push_raw("booksGenreId", &format!("001{}", genre));
                query.push_raw("page", page);
                query.push_raw("sort", "sales");
            }
        }
    }
}

/// Ordered key/value pairs forming the outbound query string.
///
/// The base pairs (output format and credentials) are appended exactly once
/// at construction, before any mode-specific pairs. Credential values are
/// never logged.
#[derive(Debug, Clone)]
pub struct EndpointQuery {
    pairs: Vec<(String, String)>,
}

impl EndpointQuery {
    /// Build the fixed base query from the catalog configuration.
    ///
    /// An empty application credential is appended as-is; the upstream call
    /// is still attempted and fails on the Rakuten side.
    pub fn with_base(config: &CatalogConfig) -> Self {
        let mut query = Self { pairs: Vec::new() };
        query.push_raw("format", "json");
        query.push_raw("applicationId", &config.application_id);
        if let Some(affiliate_id) = &config.affiliate_id {
            query.push_raw("affiliateId", affiliate_id);
        }
        query
    }

    /// Build the full query for one search request.
    pub fn for_request(config: &CatalogConfig, request: &SearchRequest) -> Self {
        let mut query = Self::with_base(config);
        request.append_to(&mut query);
        query
    }

    /// Append a pair whose value is inserted verbatim.
    fn push_raw(&mut self, key: &str, value: &str) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// Append a free-text pair, normalizing the value to percent-encoded
    /// UTF-8. Values that arrive already percent-encoded are decoded first
    /// so they are not encoded twice.
    fn push_encoded(&mut self, key: &str, value: &str) {
        let decoded = urlencoding::decode(value)
            .map(|cow| cow.into_owned())
            .unwrap_or_else(|_| value.to_string());
        self.pairs
            .push((key.to_string(), urlencoding::encode(&decoded).into_owned()));
    }

    /// Render the query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}
