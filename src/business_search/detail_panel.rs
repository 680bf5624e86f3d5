//! Detail-panel reader
//!
//! After a listing is clicked the maps UI shows its detail panel. Each field
//! has a priority list of selectors (see [`super::selectors`]); for each one
//! we wait up to the selector timeout, prefer a structured attribute over
//! visible text, and stop at the first usable value. A selector that times
//! out or yields nothing just moves us on to the next one.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use url::Url;

use super::selectors::{PHONE_SELECTORS, RATING_SELECTORS, REVIEWS_SELECTORS, WEBSITE_SELECTORS};
use crate::browser::{BrowserPage, PageElement};
use crate::extract::{RatingStyle, extract_phone, extract_rating, extract_reviews_count, normalize_phone};

/// Bare host names as the panel shows them, e.g. `sweetcrumb.ca/menu`
static HOST_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:https?://)?(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}(?:/\S*)?")
        .expect("host pattern is valid")
});

/// Fields read from an open detail panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailPanel {
    pub phone: Option<String>,
    pub website: Option<String>,
    pub reviews_count: Option<u64>,
    pub rating: Option<f64>,
}

pub struct DetailPanelReader {
    selector_timeout: Duration,
    provider_domain: String,
}

impl DetailPanelReader {
    pub fn new(selector_timeout: Duration, provider_domain: impl Into<String>) -> Self {
        Self {
            selector_timeout,
            provider_domain: provider_domain.into().to_lowercase(),
        }
    }

    /// Read phone, website and review count. The rating is only read when
    /// `want_rating` is set, i.e. the listing label did not carry one.
    pub async fn read<P: BrowserPage>(&self, page: &P, want_rating: bool) -> DetailPanel {
        let phone = self.read_phone(page).await;
        let website = self.read_website(page).await;
        let reviews_count = self.read_reviews_count(page).await;
        let rating = if want_rating {
            self.read_rating(page).await
        } else {
            None
        };

        DetailPanel {
            phone,
            website,
            reviews_count,
            rating,
        }
    }

    pub async fn read_phone<P: BrowserPage>(&self, page: &P) -> Option<String> {
        for selector in PHONE_SELECTORS {
            let Some(element) = page.wait_for_selector(selector, self.selector_timeout).await else {
                continue;
            };

            if let Some(phone) = attribute(&element, "href")
                .await
                .and_then(|href| href.strip_prefix("tel:").map(|p| p.trim().to_string()))
                .filter(|p| !p.is_empty())
            {
                return Some(normalize_phone(&phone));
            }

            // data-item-id="phone:tel:+16135550100"
            if let Some(phone) = attribute(&element, "data-item-id")
                .await
                .and_then(|id| id.strip_prefix("phone:tel:").map(str::to_string))
                .filter(|p| !p.is_empty())
            {
                return Some(normalize_phone(&phone));
            }

            for text in [text(&element).await, attribute(&element, "aria-label").await]
                .into_iter()
                .flatten()
            {
                if let Some(phone) = extract_phone(&text) {
                    return Some(normalize_phone(&phone));
                }
            }

            debug!("Phone selector '{}' matched but held no number", selector);
        }
        None
    }

    pub async fn read_website<P: BrowserPage>(&self, page: &P) -> Option<String> {
        for selector in WEBSITE_SELECTORS {
            let Some(element) = page.wait_for_selector(selector, self.selector_timeout).await else {
                continue;
            };

            if let Some(href) = attribute(&element, "href").await
                && self.is_business_website(&href)
            {
                return Some(href);
            }

            for text in [text(&element).await, attribute(&element, "aria-label").await]
                .into_iter()
                .flatten()
            {
                if let Some(website) = self.website_from_text(&text) {
                    return Some(website);
                }
            }

            debug!("Website selector '{}' matched but held no usable link", selector);
        }
        None
    }

    pub async fn read_reviews_count<P: BrowserPage>(&self, page: &P) -> Option<u64> {
        for selector in REVIEWS_SELECTORS {
            let Some(element) = page.wait_for_selector(selector, self.selector_timeout).await else {
                continue;
            };

            let label = match attribute(&element, "aria-label").await {
                Some(label) => Some(label),
                None => text(&element).await,
            };
            if let Some(count) = label.as_deref().and_then(extract_reviews_count) {
                return Some(count);
            }
        }
        None
    }

    pub async fn read_rating<P: BrowserPage>(&self, page: &P) -> Option<f64> {
        for selector in RATING_SELECTORS {
            let Some(element) = page.wait_for_selector(selector, self.selector_timeout).await else {
                continue;
            };

            for label in [attribute(&element, "aria-label").await, text(&element).await]
                .into_iter()
                .flatten()
            {
                if let Some(rating) = extract_rating(&label, RatingStyle::LeadingToken) {
                    return Some(rating);
                }
            }
        }
        None
    }

    /// Absolute http(s) URL whose host is not the provider or one of its subdomains
    pub fn is_business_website(&self, href: &str) -> bool {
        let Ok(url) = Url::parse(href) else {
            return false;
        };
        if !matches!(url.scheme(), "http" | "https") {
            return false;
        }

        match url.host_str() {
            Some(host) => {
                let host = host.to_lowercase();
                let suffix = format!(".{}", self.provider_domain);
                host != self.provider_domain && !host.ends_with(&suffix)
            }
            None => false,
        }
    }

    fn website_from_text(&self, text: &str) -> Option<String> {
        let found = HOST_TEXT.find(text)?.as_str().trim_end_matches(['.', ',', ')']);
        let candidate = if found.starts_with("http://") || found.starts_with("https://") {
            found.to_string()
        } else {
            format!("https://{found}")
        };
        self.is_business_website(&candidate).then_some(candidate)
    }
}

async fn attribute<E: PageElement>(element: &E, name: &str) -> Option<String> {
    element.attribute(name).await.ok().flatten()
}

async fn text<E: PageElement>(element: &E) -> Option<String> {
    element
        .inner_text()
        .await
        .ok()
        .flatten()
        .filter(|t| !t.trim().is_empty())
}
