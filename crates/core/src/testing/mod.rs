//! Test doubles for the catalog client.

mod mock_catalog;

pub use mock_catalog::MockBookCatalog;
