//! Local business search over a maps provider's web UI
//!
//! Drives headless Chrome via chromiumoxide, extracts business records from
//! the results feed, and falls back to scanning generic search results when
//! the feed is unavailable.

pub mod browser;
pub mod browser_setup;
pub mod business_search;
pub mod config;
mod error;
pub mod extract;
mod utils;

pub use browser::{
    BrowserError, BrowserLauncher, BrowserPage, BrowserResult, BrowserSession, BrowserWrapper,
    ChromiumLauncher, PageElement, WaitPolicy,
};
pub use business_search::{
    BusinessRecord, BusinessSearchService, MapsScraperService, SearchCriteria, SearchResponse,
    handle_search, search_service,
};
pub use config::{Config, PacingPolicy, load_yaml_config};
pub use error::SearchError;
pub use utils::ConfigError;
