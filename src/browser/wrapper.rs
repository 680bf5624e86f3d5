//! Browser session lifecycle
//!
//! One [`BrowserWrapper`] per search. It owns the Chrome process, the CDP
//! handler task and a private profile directory.

use async_trait::async_trait;
use chromiumoxide::browser::Browser;
use chromiumoxide_cdp::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide_cdp::cdp::browser_protocol::network::SetUserAgentOverrideParams;
use std::path::PathBuf;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use super::capability::{BrowserLauncher, BrowserSession};
use super::page::ChromiumPage;
use super::{BrowserError, BrowserResult};
use crate::config::BrowserConfig;
use crate::utils::constants::PROFILE_DIR_PREFIX;

/// Launches one Chrome per search
#[derive(Debug, Clone)]
pub struct ChromiumLauncher {
    config: BrowserConfig,
}

impl ChromiumLauncher {
    pub fn new(config: BrowserConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl BrowserLauncher for ChromiumLauncher {
    type Session = BrowserWrapper;

    async fn launch(&self) -> BrowserResult<BrowserWrapper> {
        // Unique per launch so concurrent searches never contend for a profile lock
        let user_data_dir = std::env::temp_dir().join(format!(
            "{}_{}_{}",
            PROFILE_DIR_PREFIX,
            std::process::id(),
            Uuid::new_v4().simple()
        ));

        let (browser, handler) =
            crate::browser_setup::launch_browser(&self.config, &user_data_dir).await?;
        info!("Launched browser with profile {}", user_data_dir.display());

        Ok(BrowserWrapper::new(
            browser,
            handler,
            user_data_dir,
            self.config.clone(),
        ))
    }
}

/// Wrapper for Browser and its event handler task
///
/// Dropping the wrapper aborts the handler and kills Chrome (chromiumoxide's
/// `Browser::drop`), so the process never outlives a search even on early
/// return. [`BrowserSession::close`] additionally waits for exit and removes
/// the profile directory.
pub struct BrowserWrapper {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
    config: BrowserConfig,
}

impl BrowserWrapper {
    pub(crate) fn new(
        browser: Browser,
        handler: JoinHandle<()>,
        user_data_dir: PathBuf,
        config: BrowserConfig,
    ) -> Self {
        Self {
            browser,
            handler,
            user_data_dir: Some(user_data_dir),
            config,
        }
    }

    /// Remove the profile directory.
    ///
    /// Must run after `browser.wait()` so Chrome has released its file handles.
    fn cleanup_temp_dir(&mut self) {
        if let Some(path) = self.user_data_dir.take() {
            if let Err(e) = std::fs::remove_dir_all(&path) {
                warn!(
                    "Failed to clean up temp directory {}: {}. Manual cleanup may be required.",
                    path.display(),
                    e
                );
            }
        }
    }
}

#[async_trait]
impl BrowserSession for BrowserWrapper {
    type Page = ChromiumPage;

    async fn new_page(&self) -> BrowserResult<ChromiumPage> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::PageCreationFailed(e.to_string()))?;

        page.set_user_agent(SetUserAgentOverrideParams::new(self.config.user_agent.clone()))
            .await
            .map_err(|e| BrowserError::PageCreationFailed(format!("user agent: {e}")))?;

        let viewport = SetDeviceMetricsOverrideParams::builder()
            .width(i64::from(self.config.window.width))
            .height(i64::from(self.config.window.height))
            .device_scale_factor(1.0)
            .mobile(false)
            .build()
            .map_err(BrowserError::PageCreationFailed)?;

        page.execute(viewport)
            .await
            .map_err(|e| BrowserError::PageCreationFailed(format!("viewport: {e}")))?;

        Ok(ChromiumPage::new(page))
    }

    async fn close(&mut self) {
        if self.user_data_dir.is_none() {
            return;
        }
        info!("Shutting down browser");

        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }

        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {}", e);
        }

        self.handler.abort();
        self.cleanup_temp_dir();
    }
}

impl Drop for BrowserWrapper {
    fn drop(&mut self) {
        self.handler.abort();

        if let Some(path) = self.user_data_dir.as_ref() {
            warn!(
                "BrowserWrapper dropped without close(). Temp directory will be orphaned: {}",
                path.display()
            );
        }
    }
}
