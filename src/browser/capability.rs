//! Capability traits the scraping pipeline drives the browser through
//!
//! One session per search, one page per session. None of these are shared
//! between concurrent searches.

use std::time::Duration;

use async_trait::async_trait;

use super::BrowserResult;

/// When a navigation counts as finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitPolicy {
    /// Return once the document is parsed; dynamic content may still be loading
    DomContentLoaded,
    /// Wait for the full load lifecycle
    Load,
}

/// Starts browsers
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    type Session: BrowserSession;

    async fn launch(&self) -> BrowserResult<Self::Session>;
}

/// A running browser owned by exactly one search
#[async_trait]
pub trait BrowserSession: Send + Sync {
    type Page: BrowserPage;

    /// Open a page configured with the session's user agent and viewport.
    async fn new_page(&self) -> BrowserResult<Self::Page>;

    /// Close the browser and release its resources. Safe to call twice.
    async fn close(&mut self);
}

#[async_trait]
pub trait BrowserPage: Send + Sync {
    type Element: PageElement;

    async fn navigate(&self, url: &str, wait: WaitPolicy, timeout: Duration) -> BrowserResult<()>;

    /// Poll for the first element matching `selector`. `None` on timeout.
    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Option<Self::Element>;

    /// All matching elements in document order.
    async fn query_selector_all(&self, selector: &str) -> BrowserResult<Vec<Self::Element>>;

    /// Rendered text of the document body.
    async fn body_text(&self) -> BrowserResult<String>;
}

#[async_trait]
pub trait PageElement: Send + Sync {
    async fn attribute(&self, name: &str) -> BrowserResult<Option<String>>;

    async fn inner_text(&self) -> BrowserResult<Option<String>>;

    async fn click(&self) -> BrowserResult<()>;

    async fn scroll_by(&self, dx: i64, dy: i64) -> BrowserResult<()>;
}

/// Sleep for `duration`; zero returns immediately.
pub async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
