//! In-memory browser used by the integration tests
//!
//! `FakeSite` describes what the provider would render: whether the results
//! feed appears, the listings in it (each with its own detail panel), and the
//! body text of the generic search page. Clicking a listing swaps the open
//! detail panel, just like the real UI.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use business_finder::business_search::selectors::{FEED_SELECTOR, LISTING_SELECTOR};
use business_finder::config::{Config, Timeouts};
use business_finder::{
    BrowserError, BrowserLauncher, BrowserPage, BrowserResult, BrowserSession, PacingPolicy,
    PageElement, WaitPolicy,
};
use tracing_subscriber::EnvFilter;

pub const MAPS_MARKER: &str = "/maps/search/";
pub const WEB_MARKER: &str = "/search?q=";

/// Route search logs to the test harness; `RUST_LOG` overrides the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Configuration with every delay zeroed
pub fn test_config() -> Config {
    Config {
        pacing: PacingPolicy::none(),
        timeouts: Timeouts {
            maps_navigation_ms: 50,
            web_navigation_ms: 50,
            feed_ms: 10,
            selector_ms: 1,
        },
        ..Config::default()
    }
}

pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("missing fixture {path}: {e}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Ordinary navigation failure, recoverable by falling back
    Navigation,
    /// Browser went away
    Disconnected,
}

impl Failure {
    fn error(self, context: &str) -> BrowserError {
        match self {
            Failure::Navigation => BrowserError::NavigationFailed(context.to_string()),
            Failure::Disconnected => BrowserError::Disconnected(context.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ElementStub {
    attributes: HashMap<String, String>,
    text: Option<String>,
}

impl ElementStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListingStub {
    label: Option<String>,
    panel: HashMap<String, ElementStub>,
    fail_click: bool,
}

impl ListingStub {
    pub fn labelled(label: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            ..Self::default()
        }
    }

    pub fn unlabelled() -> Self {
        Self::default()
    }

    /// Element the detail panel shows for `selector` once this listing is open
    pub fn panel(mut self, selector: &str, element: ElementStub) -> Self {
        self.panel.insert(selector.to_string(), element);
        self
    }

    pub fn failing_click(mut self) -> Self {
        self.fail_click = true;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeSite {
    pub feed: bool,
    pub listings: Vec<ListingStub>,
    pub body_text: String,
    pub maps_failure: Option<Failure>,
    pub web_failure: Option<Failure>,
}

impl FakeSite {
    pub fn with_feed(listings: Vec<ListingStub>) -> Self {
        Self {
            feed: true,
            listings,
            ..Self::default()
        }
    }

    pub fn without_feed() -> Self {
        Self::default()
    }

    pub fn body(mut self, text: &str) -> Self {
        self.body_text = text.to_string();
        self
    }
}

/// Everything the pages did, shared across every page of a launcher
#[derive(Debug, Default)]
pub struct Activity {
    pub navigations: Vec<(String, WaitPolicy)>,
    pub clicks: Vec<usize>,
    pub scrolls: usize,
    open_panel: Option<usize>,
    url: String,
}

#[derive(Clone)]
pub struct FakeLauncher {
    site: Arc<FakeSite>,
    pub activity: Arc<Mutex<Activity>>,
    pub launches: Arc<AtomicUsize>,
    pub closes: Arc<AtomicUsize>,
    pub fail_launch: bool,
    pub fail_new_page: bool,
}

impl FakeLauncher {
    pub fn new(site: FakeSite) -> Self {
        Self {
            site: Arc::new(site),
            activity: Arc::new(Mutex::new(Activity::default())),
            launches: Arc::new(AtomicUsize::new(0)),
            closes: Arc::new(AtomicUsize::new(0)),
            fail_launch: false,
            fail_new_page: false,
        }
    }

    pub fn page(&self) -> FakePage {
        FakePage {
            site: self.site.clone(),
            activity: self.activity.clone(),
        }
    }

    pub fn navigated_urls(&self) -> Vec<String> {
        self.activity
            .lock()
            .unwrap()
            .navigations
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn launch_count(&self) -> usize {
        self.launches.load(Ordering::SeqCst)
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BrowserLauncher for FakeLauncher {
    type Session = FakeSession;

    async fn launch(&self) -> BrowserResult<FakeSession> {
        self.launches.fetch_add(1, Ordering::SeqCst);
        if self.fail_launch {
            return Err(BrowserError::LaunchFailed("no chrome in test".into()));
        }
        Ok(FakeSession {
            launcher: self.clone(),
            closed: false,
        })
    }
}

pub struct FakeSession {
    launcher: FakeLauncher,
    closed: bool,
}

#[async_trait]
impl BrowserSession for FakeSession {
    type Page = FakePage;

    async fn new_page(&self) -> BrowserResult<FakePage> {
        if self.launcher.fail_new_page {
            return Err(BrowserError::PageCreationFailed("target crashed".into()));
        }
        Ok(self.launcher.page())
    }

    async fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.launcher.closes.fetch_add(1, Ordering::SeqCst);
        }
    }
}

pub struct FakePage {
    site: Arc<FakeSite>,
    activity: Arc<Mutex<Activity>>,
}

impl FakePage {
    fn element(&self, stub: &ElementStub, role: Role) -> FakeElement {
        FakeElement {
            stub: stub.clone(),
            role,
            activity: self.activity.clone(),
        }
    }
}

#[async_trait]
impl BrowserPage for FakePage {
    type Element = FakeElement;

    async fn navigate(&self, url: &str, wait: WaitPolicy, _timeout: Duration) -> BrowserResult<()> {
        let mut activity = self.activity.lock().unwrap();
        activity.navigations.push((url.to_string(), wait));
        activity.open_panel = None;

        let failure = if url.contains(MAPS_MARKER) {
            self.site.maps_failure
        } else if url.contains(WEB_MARKER) {
            self.site.web_failure
        } else {
            None
        };
        if let Some(failure) = failure {
            activity.url.clear();
            return Err(failure.error(url));
        }

        activity.url = url.to_string();
        Ok(())
    }

    async fn wait_for_selector(&self, selector: &str, _timeout: Duration) -> Option<FakeElement> {
        let activity = self.activity.lock().unwrap();
        let on_maps = activity.url.contains(MAPS_MARKER);

        if selector == FEED_SELECTOR {
            return (on_maps && self.site.feed).then(|| self.element(&ElementStub::new(), Role::Feed));
        }

        let listing = self.site.listings.get(activity.open_panel?)?;
        let stub = listing.panel.get(selector)?;
        Some(self.element(stub, Role::Plain))
    }

    async fn query_selector_all(&self, selector: &str) -> BrowserResult<Vec<FakeElement>> {
        let on_maps = self.activity.lock().unwrap().url.contains(MAPS_MARKER);
        if selector != LISTING_SELECTOR || !on_maps || !self.site.feed {
            return Ok(Vec::new());
        }

        Ok(self
            .site
            .listings
            .iter()
            .enumerate()
            .map(|(index, listing)| {
                let mut stub = ElementStub::new();
                if let Some(label) = &listing.label {
                    stub = stub.attr("aria-label", label);
                }
                self.element(
                    &stub,
                    Role::Listing {
                        index,
                        fail_click: listing.fail_click,
                    },
                )
            })
            .collect())
    }

    async fn body_text(&self) -> BrowserResult<String> {
        let activity = self.activity.lock().unwrap();
        if activity.url.contains(WEB_MARKER) {
            Ok(self.site.body_text.clone())
        } else {
            Ok(String::new())
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Role {
    Feed,
    Listing { index: usize, fail_click: bool },
    Plain,
}

pub struct FakeElement {
    stub: ElementStub,
    role: Role,
    activity: Arc<Mutex<Activity>>,
}

#[async_trait]
impl PageElement for FakeElement {
    async fn attribute(&self, name: &str) -> BrowserResult<Option<String>> {
        Ok(self.stub.attributes.get(name).cloned())
    }

    async fn inner_text(&self) -> BrowserResult<Option<String>> {
        Ok(self.stub.text.clone())
    }

    async fn click(&self) -> BrowserResult<()> {
        match self.role {
            Role::Listing {
                fail_click: true, ..
            } => Err(BrowserError::Script("node is detached from document".into())),
            Role::Listing { index, .. } => {
                let mut activity = self.activity.lock().unwrap();
                activity.clicks.push(index);
                activity.open_panel = Some(index);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    async fn scroll_by(&self, _dx: i64, _dy: i64) -> BrowserResult<()> {
        if let Role::Feed = self.role {
            self.activity.lock().unwrap().scrolls += 1;
        }
        Ok(())
    }
}
