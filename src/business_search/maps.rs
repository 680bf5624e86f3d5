//! Primary strategy: the maps results feed
//!
//! Navigate to the feed, wait for it, scroll it to load more listings, then
//! walk the listing links in document order. Each listing's accessible label
//! gives name, rating and address; clicking it opens the detail panel for
//! phone, website and review count.
//!
//! Listings are processed one at a time because they all share the same
//! detail panel.

use tracing::{debug, info, warn};

use super::detail_panel::DetailPanelReader;
use super::selectors::{FEED_SELECTOR, LISTING_SELECTOR};
use super::types::{BusinessRecord, search_url};
use crate::browser::{BrowserPage, BrowserResult, PageElement, WaitPolicy, pause};
use crate::config::Config;
use crate::extract::parse_listing_label;

pub struct MapsStrategy {
    config: Config,
    detail_reader: DetailPanelReader,
}

impl MapsStrategy {
    pub fn new(config: Config) -> Self {
        let detail_reader =
            DetailPanelReader::new(config.timeouts.selector(), config.provider.domain.clone());
        Self {
            config,
            detail_reader,
        }
    }

    /// Run the feed extraction for `query`.
    ///
    /// A feed that never appears yields `Ok(vec![])`. `locality` is the searched
    /// location, used as an extra hint when classifying addresses.
    pub async fn run<P: BrowserPage>(
        &self,
        page: &P,
        query: &str,
        locality: Option<&str>,
        max_results: usize,
    ) -> BrowserResult<Vec<BusinessRecord>> {
        let url = search_url(&self.config.provider.maps_search_url, query);
        info!("Loading maps feed: {}", url);

        page.navigate(
            &url,
            WaitPolicy::DomContentLoaded,
            self.config.timeouts.maps_navigation(),
        )
        .await?;
        pause(self.config.pacing.initial_load()).await;

        let Some(feed) = page
            .wait_for_selector(FEED_SELECTOR, self.config.timeouts.feed())
            .await
        else {
            info!("Results feed not found");
            return Ok(Vec::new());
        };
        info!("Results feed loaded");

        self.scroll_feed(&feed, max_results).await;

        let mut links = page.query_selector_all(LISTING_SELECTOR).await?;
        info!("Found {} business listings", links.len());
        links.truncate(max_results);

        let mut businesses = Vec::new();
        for (index, link) in links.iter().enumerate() {
            match self.extract_listing(page, link, locality).await {
                Ok(Some(business)) => {
                    debug!(
                        "[{}] {} | phone: {:?} | rating: {:?} ({:?} reviews)",
                        index + 1,
                        business.name,
                        business.phone,
                        business.rating,
                        business.reviews_count
                    );
                    businesses.push(business);
                    if businesses.len() >= max_results {
                        break;
                    }
                }
                Ok(None) => debug!("[{}] Not a business listing, skipped", index + 1),
                Err(e) => warn!("[{}] Listing extraction failed: {}", index + 1, e),
            }

            pause(self.config.pacing.per_listing()).await;
        }

        info!("Extracted {} businesses from maps feed", businesses.len());
        Ok(businesses)
    }

    /// Scroll errors only mean fewer listings get loaded.
    async fn scroll_feed<E: PageElement>(&self, feed: &E, max_results: usize) {
        let scrolls = self.config.scroll.scroll_count(max_results);
        for _ in 0..scrolls {
            if let Err(e) = feed.scroll_by(0, self.config.scroll.distance_px).await {
                debug!("Feed scroll failed, continuing with loaded listings: {}", e);
                return;
            }
            pause(self.config.pacing.scroll()).await;
        }
    }

    async fn extract_listing<P: BrowserPage>(
        &self,
        page: &P,
        link: &P::Element,
        locality: Option<&str>,
    ) -> BrowserResult<Option<BusinessRecord>> {
        let Some(label) = link.attribute("aria-label").await? else {
            return Ok(None);
        };
        let Some(listing) = parse_listing_label(&label, locality) else {
            return Ok(None);
        };

        link.click().await?;
        pause(self.config.pacing.settle()).await;

        let panel = self
            .detail_reader
            .read(page, listing.rating.is_none())
            .await;

        Ok(Some(BusinessRecord {
            name: listing.name,
            phone: panel.phone,
            email: None,
            address: listing.address,
            website: panel.website,
            rating: listing.rating.or(panel.rating),
            reviews_count: panel.reviews_count,
        }))
    }
}
