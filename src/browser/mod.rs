//! Browser infrastructure for launching Chrome and driving pages
//!
//! The scraping strategies only see the capability traits in [`capability`];
//! the chromiumoxide-backed implementations live in [`wrapper`] and [`page`].

mod capability;
mod page;
mod wrapper;

pub use capability::{BrowserLauncher, BrowserPage, BrowserSession, PageElement, WaitPolicy, pause};
pub use page::{ChromiumElement, ChromiumPage};
pub use wrapper::{BrowserWrapper, ChromiumLauncher};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("Failed to find browser executable: {0}")]
    NotFound(String),

    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Failed to create page: {0}")]
    PageCreationFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Timed out after {0}ms: {1}")]
    Timeout(u128, String),

    #[error("Page script failed: {0}")]
    Script(String),

    #[error("Browser connection lost: {0}")]
    Disconnected(String),
}

pub type BrowserResult<T> = Result<T, BrowserError>;

/// CDP error messages meaning the browser, page or session is gone.
static DISCONNECT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"browser (closed|disconnected|crashed)",
        r"page (closed|crashed)",
        r"target (closed|crashed|destroyed)",
        r"session (not found|closed|disconnected)",
        r"channel (closed|disconnected|error)",
        r"websocket (closed|error|disconnected)",
        r"cdp.*(disconnect|closed)",
        r"send failed because receiver is gone",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("disconnect pattern is valid"))
    .collect()
});

impl BrowserError {
    /// Faults that no amount of fallback can work around.
    ///
    /// Everything else (navigation hiccups, timeouts, script failures) is a
    /// scraping outcome and is degraded to fewer or emptier records.
    #[must_use]
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            BrowserError::NotFound(_)
                | BrowserError::LaunchFailed(_)
                | BrowserError::PageCreationFailed(_)
                | BrowserError::Disconnected(_)
        )
    }

    /// Wrap a chromiumoxide failure, recognising lost connections.
    pub(crate) fn from_cdp(
        kind: fn(String) -> BrowserError,
        context: &str,
        err: impl std::fmt::Display,
    ) -> BrowserError {
        let message = format!("{context}: {err}");
        let lowered = message.to_lowercase();
        if DISCONNECT_PATTERNS.iter().any(|p| p.is_match(&lowered)) {
            tracing::debug!(error = %message, "Classified as lost browser connection");
            BrowserError::Disconnected(message)
        } else {
            kind(message)
        }
    }
}
