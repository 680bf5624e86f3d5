//! chromiumoxide-backed page and element capabilities

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use tracing::debug;

use super::capability::{BrowserPage, PageElement, WaitPolicy};
use super::{BrowserError, BrowserResult};
use crate::utils::wait_for_element;

pub struct ChromiumPage {
    page: Page,
}

impl ChromiumPage {
    pub(crate) fn new(page: Page) -> Self {
        Self { page }
    }
}

#[async_trait]
impl BrowserPage for ChromiumPage {
    type Element = ChromiumElement;

    async fn navigate(&self, url: &str, wait: WaitPolicy, timeout: Duration) -> BrowserResult<()> {
        let timeout_ms = timeout.as_millis();

        let navigation = async {
            self.page.goto(url).await.map_err(|e| {
                BrowserError::from_cdp(BrowserError::NavigationFailed, url, e)
            })?;

            if wait == WaitPolicy::Load {
                self.page.wait_for_navigation().await.map_err(|e| {
                    BrowserError::from_cdp(BrowserError::NavigationFailed, url, e)
                })?;
            }

            Ok::<(), BrowserError>(())
        };

        tokio::time::timeout(timeout, navigation)
            .await
            .map_err(|_| BrowserError::Timeout(timeout_ms, format!("navigating to {url}")))?
    }

    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Option<ChromiumElement> {
        wait_for_element(&self.page, selector, timeout)
            .await
            .map(ChromiumElement::new)
    }

    async fn query_selector_all(&self, selector: &str) -> BrowserResult<Vec<ChromiumElement>> {
        let elements = self.page.find_elements(selector).await.map_err(|e| {
            BrowserError::from_cdp(BrowserError::Script, &format!("find_elements({selector})"), e)
        })?;

        debug!("{} elements match '{}'", elements.len(), selector);
        Ok(elements.into_iter().map(ChromiumElement::new).collect())
    }

    async fn body_text(&self) -> BrowserResult<String> {
        let value = self
            .page
            .evaluate("document.body ? document.body.innerText : ''")
            .await
            .map_err(|e| BrowserError::from_cdp(BrowserError::Script, "document.body.innerText", e))?
            .into_value::<serde_json::Value>()
            .map_err(|e| BrowserError::Script(format!("body text was not readable: {e}")))?;

        match value {
            serde_json::Value::String(text) => Ok(text),
            _ => Ok(String::new()),
        }
    }
}

pub struct ChromiumElement {
    element: Element,
}

impl ChromiumElement {
    fn new(element: Element) -> Self {
        Self { element }
    }
}

#[async_trait]
impl PageElement for ChromiumElement {
    async fn attribute(&self, name: &str) -> BrowserResult<Option<String>> {
        self.element
            .attribute(name)
            .await
            .map_err(|e| BrowserError::from_cdp(BrowserError::Script, &format!("attribute({name})"), e))
    }

    async fn inner_text(&self) -> BrowserResult<Option<String>> {
        self.element
            .inner_text()
            .await
            .map_err(|e| BrowserError::from_cdp(BrowserError::Script, "inner_text", e))
    }

    async fn click(&self) -> BrowserResult<()> {
        self.element
            .click()
            .await
            .map(|_| ())
            .map_err(|e| BrowserError::from_cdp(BrowserError::Script, "click", e))
    }

    async fn scroll_by(&self, dx: i64, dy: i64) -> BrowserResult<()> {
        let function = format!("function() {{ this.scrollBy({dx}, {dy}); }}");
        self.element
            .call_js_fn(function, false)
            .await
            .map(|_| ())
            .map_err(|e| BrowserError::from_cdp(BrowserError::Script, "scrollBy", e))
    }
}
