//! Fallback strategy: generic text search
//!
//! Used only when the maps feed produced nothing. The rendered page text is
//! scanned line by line; a line is admitted only if it carries a phone
//! number, since nothing else reliably separates a business entry from the
//! rest of the page. Businesses without a published phone are lost here.

use tracing::info;

use super::types::{BusinessRecord, search_url};
use crate::browser::{BrowserPage, BrowserResult, WaitPolicy, pause};
use crate::config::Config;
use crate::extract::{LABEL_DELIMITER, RatingStyle, extract_phone, extract_rating, extract_reviews_count, normalize_phone};

/// Lines at or below this many characters are a bare phone at best
const MIN_LINE_CHARS: usize = 10;

/// Lines at or above this many characters are prose, not an entry
const MAX_LINE_CHARS: usize = 200;

const MAX_NAME_CHARS: usize = 100;

pub struct WebSearchStrategy {
    config: Config,
}

impl WebSearchStrategy {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run<P: BrowserPage>(
        &self,
        page: &P,
        query: &str,
        max_results: usize,
    ) -> BrowserResult<Vec<BusinessRecord>> {
        let url = search_url(&self.config.provider.web_search_url, query);
        info!("Loading web search: {}", url);

        page.navigate(&url, WaitPolicy::Load, self.config.timeouts.web_navigation())
            .await?;
        pause(self.config.pacing.fallback_load()).await;

        let body = page.body_text().await?;
        let businesses = parse_result_lines(&body, max_results);

        info!("Extracted {} businesses from web search", businesses.len());
        Ok(businesses)
    }
}

/// Turn rendered search-page text into records, at most `max_results`.
pub fn parse_result_lines(text: &str, max_results: usize) -> Vec<BusinessRecord> {
    text.lines()
        .filter_map(parse_result_line)
        .take(max_results)
        .collect()
}

fn parse_result_line(line: &str) -> Option<BusinessRecord> {
    let phone = extract_phone(line)?;

    let length = line.chars().count();
    if length <= MIN_LINE_CHARS || length >= MAX_LINE_CHARS {
        return None;
    }

    let name: String = line
        .split(LABEL_DELIMITER)
        .next()
        .and_then(|head| head.split('(').next())
        .unwrap_or_default()
        .trim()
        .chars()
        .take(MAX_NAME_CHARS)
        .collect();
    if name.is_empty() {
        return None;
    }

    Some(BusinessRecord {
        name,
        phone: Some(normalize_phone(&phone)),
        rating: extract_rating(line, RatingStyle::StarSuffix),
        reviews_count: extract_reviews_count(line),
        ..BusinessRecord::default()
    })
}
