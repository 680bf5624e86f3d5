//! Business search using browser automation
//!
//! Orchestrates one browser session per search: the maps feed strategy runs
//! first, the generic web search runs only when the feed produced nothing,
//! and a sentinel record stands in when both come back empty.
//!
//! # Architecture
//! - `types` - Criteria, records, response and constants
//! - `selectors` - Provider markup selectors
//! - `detail_panel` - Reads phone/website/reviews from an opened listing
//! - `maps` - Primary results-feed strategy
//! - `web` - Fallback text-search strategy
//!
//! # Usage
//! ```no_run
//! use business_finder::business_search::{SearchCriteria, handle_search, search_service};
//! use business_finder::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = search_service(&Config::default());
//!     let criteria = SearchCriteria::new("bakery", "Ottawa").with_max_results(5);
//!     let response = handle_search(service.as_ref(), criteria).await?;
//!     println!("Found {} businesses", response.total_results);
//!     Ok(())
//! }
//! ```

pub mod detail_panel;
pub mod maps;
pub mod selectors;
mod types;
pub mod web;

pub use types::{
    BusinessRecord, DEFAULT_MAX_RESULTS, DEFAULT_RADIUS_KM, MAX_RESULTS_LIMIT, NO_RESULTS_NAME,
    SearchCriteria, SearchResponse, search_url,
};

use async_trait::async_trait;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::browser::{BrowserError, BrowserLauncher, BrowserSession, ChromiumLauncher};
use crate::config::Config;
use crate::error::SearchError;
use maps::MapsStrategy;
use web::WebSearchStrategy;

/// Anything that can turn criteria into business records
#[async_trait]
pub trait BusinessSearchService: Send + Sync {
    async fn search_businesses(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<BusinessRecord>, SearchError>;
}

/// Maps scraper: primary feed strategy, text-search fallback, sentinel on total miss
pub struct MapsScraperService<L: BrowserLauncher> {
    launcher: L,
    maps: MapsStrategy,
    web: WebSearchStrategy,
}

impl<L: BrowserLauncher> MapsScraperService<L> {
    pub fn new(launcher: L, config: Config) -> Self {
        Self {
            launcher,
            maps: MapsStrategy::new(config.clone()),
            web: WebSearchStrategy::new(config),
        }
    }

    /// Both strategies against one page. Only infrastructure faults escape.
    async fn run_strategies(
        &self,
        session: &L::Session,
        criteria: &SearchCriteria,
        query: &str,
    ) -> Result<Vec<BusinessRecord>, BrowserError> {
        let page = session.new_page().await?;
        let max_results = criteria.max_results;

        let businesses = match self
            .maps
            .run(&page, query, Some(criteria.location.as_str()), max_results)
            .await
        {
            Ok(businesses) => businesses,
            Err(e) if e.is_infrastructure() => return Err(e),
            Err(e) => {
                warn!("Maps scraping failed: {}", e);
                Vec::new()
            }
        };
        if !businesses.is_empty() {
            return Ok(businesses);
        }

        info!("No results from maps feed, trying web search");
        match self.web.run(&page, query, max_results).await {
            Ok(businesses) => Ok(businesses),
            Err(e) if e.is_infrastructure() => Err(e),
            Err(e) => {
                warn!("Web search failed: {}", e);
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait]
impl<L: BrowserLauncher> BusinessSearchService for MapsScraperService<L> {
    async fn search_businesses(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<BusinessRecord>, SearchError> {
        let query = criteria.scrape_query();
        let span = info_span!("business_search", search_id = %Uuid::new_v4(), query = %query);

        async {
            info!("Searching: {}", query);

            let mut session = self.launcher.launch().await?;
            let outcome = self.run_strategies(&session, criteria, &query).await;
            session.close().await;

            let mut businesses = outcome?;
            if businesses.is_empty() {
                info!("Both strategies came back empty");
                businesses.push(BusinessRecord::no_results(&query));
            }
            businesses.truncate(criteria.max_results);

            Ok::<_, SearchError>(businesses)
        }
        .instrument(span)
        .await
    }
}

/// The configured search service
pub fn search_service(config: &Config) -> Box<dyn BusinessSearchService> {
    Box::new(MapsScraperService::new(
        ChromiumLauncher::new(config.browser.clone()),
        config.clone(),
    ))
}

/// Request boundary: validate, search and build the response.
///
/// Any failure inside the service is reported as
/// [`SearchError::SearchFailed`] carrying the underlying message.
pub async fn handle_search(
    service: &dyn BusinessSearchService,
    criteria: SearchCriteria,
) -> Result<SearchResponse, SearchError> {
    criteria.validate()?;

    let businesses = service
        .search_businesses(&criteria)
        .await
        .map_err(|e| SearchError::SearchFailed(e.to_string()))?;

    Ok(SearchResponse::new(criteria.display_query(), businesses))
}
