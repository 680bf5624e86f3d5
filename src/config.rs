//! Process-wide configuration
//!
//! Loaded once from YAML; every field has a serde default so a missing or
//! partial file still yields a usable configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::utils::constants::CHROME_USER_AGENT;
use crate::utils::{ConfigError, validate_interaction_timeout, validate_navigation_timeout};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub pacing: PacingPolicy,

    #[serde(default)]
    pub timeouts: Timeouts,

    #[serde(default)]
    pub scroll: ScrollPolicy,
}

/// Browser launch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Run browser in headless mode
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Disable web security features (Same-Origin Policy, etc.)
    /// WARNING: Only enable for trusted content
    #[serde(default)]
    pub disable_security: bool,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Window and viewport dimensions
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,

    #[serde(default = "default_window_height")]
    pub height: u32,
}

/// Where searches are sent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Prefix for the map results feed; the query is appended
    #[serde(default = "default_maps_search_url")]
    pub maps_search_url: String,

    /// Prefix for the generic text search; the query is appended
    #[serde(default = "default_web_search_url")]
    pub web_search_url: String,

    /// Links into this domain are never reported as a business website
    #[serde(default = "default_provider_domain")]
    pub domain: String,
}

/// Fixed delays, in milliseconds, used to let the UI load and to stay under
/// the provider's bot detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingPolicy {
    /// After the feed navigation returns
    #[serde(default = "default_initial_load_ms")]
    pub initial_load_ms: u64,

    /// Between feed scrolls
    #[serde(default = "default_scroll_ms")]
    pub scroll_ms: u64,

    /// After clicking a listing, before reading its detail panel
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,

    /// After each listing
    #[serde(default = "default_per_listing_ms")]
    pub per_listing_ms: u64,

    /// After the fallback search navigation returns
    #[serde(default = "default_fallback_load_ms")]
    pub fallback_load_ms: u64,
}

/// Bounded waits, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeouts {
    #[serde(default = "default_maps_navigation_ms")]
    pub maps_navigation_ms: u64,

    #[serde(default = "default_web_navigation_ms")]
    pub web_navigation_ms: u64,

    /// How long the results feed may take to appear
    #[serde(default = "default_feed_ms")]
    pub feed_ms: u64,

    /// Per detail-panel selector attempt
    #[serde(default = "default_selector_ms")]
    pub selector_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollPolicy {
    #[serde(default = "default_max_scrolls")]
    pub max_scrolls: usize,

    /// Roughly how many listings one scroll loads
    #[serde(default = "default_results_per_scroll")]
    pub results_per_scroll: usize,

    #[serde(default = "default_scroll_distance_px")]
    pub distance_px: i64,
}

fn default_headless() -> bool {
    true
}

fn default_user_agent() -> String {
    CHROME_USER_AGENT.to_string()
}

fn default_window_width() -> u32 {
    1920
}

fn default_window_height() -> u32 {
    1080
}

fn default_maps_search_url() -> String {
    "https://www.google.com/maps/search/".to_string()
}

fn default_web_search_url() -> String {
    "https://www.google.com/search?q=".to_string()
}

fn default_provider_domain() -> String {
    "google.com".to_string()
}

fn default_initial_load_ms() -> u64 {
    3000
}
fn default_scroll_ms() -> u64 {
    1000
}
fn default_settle_ms() -> u64 {
    1500
}
fn default_per_listing_ms() -> u64 {
    300
}
fn default_fallback_load_ms() -> u64 {
    2000
}

fn default_maps_navigation_ms() -> u64 {
    20_000
}
fn default_web_navigation_ms() -> u64 {
    15_000
}
fn default_feed_ms() -> u64 {
    10_000
}
fn default_selector_ms() -> u64 {
    2000
}

fn default_max_scrolls() -> usize {
    5
}
fn default_results_per_scroll() -> usize {
    5
}
fn default_scroll_distance_px() -> i64 {
    1000
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: default_headless(),
            disable_security: false,
            user_agent: default_user_agent(),
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            maps_search_url: default_maps_search_url(),
            web_search_url: default_web_search_url(),
            domain: default_provider_domain(),
        }
    }
}

impl Default for PacingPolicy {
    fn default() -> Self {
        Self {
            initial_load_ms: default_initial_load_ms(),
            scroll_ms: default_scroll_ms(),
            settle_ms: default_settle_ms(),
            per_listing_ms: default_per_listing_ms(),
            fallback_load_ms: default_fallback_load_ms(),
        }
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            maps_navigation_ms: default_maps_navigation_ms(),
            web_navigation_ms: default_web_navigation_ms(),
            feed_ms: default_feed_ms(),
            selector_ms: default_selector_ms(),
        }
    }
}

impl Default for ScrollPolicy {
    fn default() -> Self {
        Self {
            max_scrolls: default_max_scrolls(),
            results_per_scroll: default_results_per_scroll(),
            distance_px: default_scroll_distance_px(),
        }
    }
}

impl PacingPolicy {
    /// No delays at all
    #[must_use]
    pub fn none() -> Self {
        Self {
            initial_load_ms: 0,
            scroll_ms: 0,
            settle_ms: 0,
            per_listing_ms: 0,
            fallback_load_ms: 0,
        }
    }

    pub fn initial_load(&self) -> Duration {
        Duration::from_millis(self.initial_load_ms)
    }

    pub fn scroll(&self) -> Duration {
        Duration::from_millis(self.scroll_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn per_listing(&self) -> Duration {
        Duration::from_millis(self.per_listing_ms)
    }

    pub fn fallback_load(&self) -> Duration {
        Duration::from_millis(self.fallback_load_ms)
    }
}

impl Timeouts {
    pub fn maps_navigation(&self) -> Duration {
        Duration::from_millis(self.maps_navigation_ms)
    }

    pub fn web_navigation(&self) -> Duration {
        Duration::from_millis(self.web_navigation_ms)
    }

    pub fn feed(&self) -> Duration {
        Duration::from_millis(self.feed_ms)
    }

    pub fn selector(&self) -> Duration {
        Duration::from_millis(self.selector_ms)
    }
}

impl ScrollPolicy {
    /// Scrolls needed to surface `max_results` listings, capped at `max_scrolls`.
    #[must_use]
    pub fn scroll_count(&self, max_results: usize) -> usize {
        let per_scroll = self.results_per_scroll.max(1);
        (max_results / per_scroll + 1).min(self.max_scrolls)
    }
}

impl Config {
    /// Reject timeouts that are zero or beyond what a single search should wait.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_navigation_timeout("timeouts.maps_navigation_ms", self.timeouts.maps_navigation_ms)?;
        validate_navigation_timeout("timeouts.web_navigation_ms", self.timeouts.web_navigation_ms)?;
        validate_navigation_timeout("timeouts.feed_ms", self.timeouts.feed_ms)?;
        validate_interaction_timeout("timeouts.selector_ms", self.timeouts.selector_ms)?;

        if self.browser.window.width == 0 || self.browser.window.height == 0 {
            return Err(ConfigError::Invalid {
                field: "browser.window",
                reason: "width and height must be positive".to_string(),
            });
        }

        Ok(())
    }
}

/// Load config from a YAML file, falling back to defaults when it does not exist
pub fn load_yaml_config(path: &Path) -> anyhow::Result<Config> {
    let config = if path.exists() {
        let contents = fs::read_to_string(path)?;
        serde_yaml::from_str(&contents)?
    } else {
        tracing::debug!("No config at {}, using defaults", path.display());
        Config::default()
    };

    config.validate()?;
    Ok(config)
}
