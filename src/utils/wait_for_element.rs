//! Element polling for dynamically rendered pages
//!
//! Maps UIs render panels via JavaScript well after the load event, so a
//! single `find_element` call is not enough.

use std::time::{Duration, Instant};

use chromiumoxide::Page;
use chromiumoxide::element::Element;
use tracing::debug;

/// Poll until an element matching `selector` appears or `timeout` expires.
///
/// Starts at 100ms intervals, doubling each retry up to 1s. Expiry is not an
/// error: the caller decides what a missing element means.
pub async fn wait_for_element(page: &Page, selector: &str, timeout: Duration) -> Option<Element> {
    let start = Instant::now();
    let mut poll_interval = Duration::from_millis(100);
    let max_interval = Duration::from_secs(1);

    loop {
        if let Ok(element) = page.find_element(selector).await {
            return Some(element);
        }

        let elapsed = start.elapsed();
        if elapsed >= timeout {
            debug!(
                "Element not found after {}ms: '{}'",
                timeout.as_millis(),
                selector
            );
            return None;
        }

        // Never sleep past the deadline
        tokio::time::sleep(poll_interval.min(timeout - elapsed)).await;
        poll_interval = (poll_interval * 2).min(max_interval);
    }
}
