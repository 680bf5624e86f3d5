use thiserror::Error;

use crate::browser::BrowserError;
use crate::utils::ConfigError;

/// Errors surfaced to callers of a business search
///
/// Scraping misses (no phone, no feed, no listings) never show up here; they
/// become missing fields, fewer records or the sentinel record.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid search criteria: {0}")]
    InvalidCriteria(String),

    #[error(transparent)]
    Infrastructure(#[from] BrowserError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Search failed: {0}")]
    SearchFailed(String),
}

impl From<ConfigError> for SearchError {
    fn from(err: ConfigError) -> Self {
        SearchError::Config(err.to_string())
    }
}
