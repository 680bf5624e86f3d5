//! Data structures and constants for business search

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

// =============================================================================
// Constants
// =============================================================================

pub const DEFAULT_RADIUS_KM: u32 = 10;

pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Upper bound on `max_results`
pub const MAX_RESULTS_LIMIT: usize = 100;

/// Name carried by the placeholder record returned when nothing was found
pub const NO_RESULTS_NAME: &str = "No results found";

// =============================================================================
// Data Structures
// =============================================================================

/// What to search for. Immutable for the duration of one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Business type, e.g. "bakery" or "plumbers"
    pub industry: String,

    /// Place to search around, e.g. "Ottawa, ON"
    pub location: String,

    /// Search radius in kilometres. Echoed, not used for scraping.
    #[serde(default = "default_radius_km")]
    pub radius_km: u32,

    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_radius_km() -> u32 {
    DEFAULT_RADIUS_KM
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl SearchCriteria {
    pub fn new(industry: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
            location: location.into(),
            radius_km: DEFAULT_RADIUS_KM,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    #[must_use]
    pub fn with_radius_km(mut self, radius_km: u32) -> Self {
        self.radius_km = radius_km;
        self
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.industry.trim().is_empty() {
            return Err(SearchError::InvalidCriteria("industry must not be empty".into()));
        }
        if self.location.trim().is_empty() {
            return Err(SearchError::InvalidCriteria("location must not be empty".into()));
        }
        if self.radius_km == 0 {
            return Err(SearchError::InvalidCriteria("radius_km must be positive".into()));
        }
        if !(1..=MAX_RESULTS_LIMIT).contains(&self.max_results) {
            return Err(SearchError::InvalidCriteria(format!(
                "max_results must be between 1 and {MAX_RESULTS_LIMIT}, got {}",
                self.max_results
            )));
        }
        Ok(())
    }

    /// Text typed into the provider: `"<industry> in <location>"`
    pub fn scrape_query(&self) -> String {
        format!("{} in {}", self.industry.trim(), self.location.trim())
    }

    /// Text echoed back to the caller: `"<industry> near <location>"`
    pub fn display_query(&self) -> String {
        format!("{} near {}", self.industry.trim(), self.location.trim())
    }
}

/// One business extracted from a listing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub name: String,

    /// `(AAA) BBB-CCCC` when the number has a North-American digit count,
    /// otherwise as scraped
    pub phone: Option<String>,

    /// Not published by the provider; always `None`
    pub email: Option<String>,

    pub address: Option<String>,

    /// Absolute URL outside the provider's own domain
    pub website: Option<String>,

    /// Nominally 0.0-5.0, not clamped
    pub rating: Option<f64>,

    pub reviews_count: Option<u64>,
}

impl BusinessRecord {
    /// Placeholder returned instead of an empty list
    pub fn no_results(query: &str) -> Self {
        Self {
            name: NO_RESULTS_NAME.to_string(),
            address: Some(format!("Searched for: {query}")),
            ..Self::default()
        }
    }

    pub fn is_no_results(&self) -> bool {
        self.name == NO_RESULTS_NAME
    }
}

/// Response returned at the request boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_results: usize,
    pub businesses: Vec<BusinessRecord>,
}

impl SearchResponse {
    #[must_use]
    pub fn new(query: String, businesses: Vec<BusinessRecord>) -> Self {
        Self {
            query,
            total_results: businesses.len(),
            businesses,
        }
    }
}

/// Append `query` to a provider URL prefix, joining words with `+`.
pub fn search_url(prefix: &str, query: &str) -> String {
    let words: Vec<_> = query.split_whitespace().map(urlencoding::encode).collect();
    format!("{prefix}{}", words.join("+"))
}
