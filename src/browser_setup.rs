use chromiumoxide::browser::{Browser, BrowserConfig as CdpBrowserConfig, HeadlessMode};
use chromiumoxide::fetcher::{BrowserFetcher, BrowserFetcherOptions};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;
use tokio::task::{self, JoinHandle};
use tracing::{error, info, trace, warn};

use crate::browser::{BrowserError, BrowserResult};
use crate::config::BrowserConfig;

/// Flags that hide the usual automation fingerprints.
const ANTI_DETECTION_ARGS: &[&str] = &[
    "--disable-blink-features=AutomationControlled",
    "--disable-infobars",
    "--disable-notifications",
    "--disable-extensions",
    "--disable-popup-blocking",
    "--disable-background-networking",
    "--disable-background-timer-throttling",
    "--disable-backgrounding-occluded-windows",
    "--disable-breakpad",
    "--disable-features=TranslateUI",
    "--disable-hang-monitor",
    "--disable-prompt-on-repost",
    "--no-first-run",
    "--no-default-browser-check",
    "--password-store=basic",
    "--use-mock-keychain",
    "--hide-scrollbars",
    "--mute-audio",
];

/// Find Chrome/Chromium on this machine.
///
/// `CHROMIUM_PATH` wins when it points at an existing file; then the usual
/// install locations for the platform; then `which` on Unix.
pub fn find_browser_executable() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("CHROMIUM_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Using browser from CHROMIUM_PATH: {}", path.display());
            return Some(path);
        }
        warn!(
            "CHROMIUM_PATH points to non-existent file: {}",
            path.display()
        );
    }

    let candidates: &[&str] = if cfg!(target_os = "windows") {
        &[
            r"C:\Program Files\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files\Chromium\Application\chrome.exe",
        ]
    } else if cfg!(target_os = "macos") {
        &[
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "/Applications/Chromium.app/Contents/MacOS/Chromium",
            "~/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "/opt/homebrew/bin/chromium",
        ]
    } else {
        &[
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/usr/bin/chromium",
            "/usr/bin/chromium-browser",
            "/snap/bin/chromium",
            "/usr/local/bin/chromium",
            "/opt/google/chrome/chrome",
        ]
    };

    let found = candidates.iter().find_map(|candidate| {
        let path = match candidate.strip_prefix("~/") {
            Some(rest) => dirs::home_dir()?.join(rest),
            None => PathBuf::from(candidate),
        };
        path.exists().then_some(path)
    });
    if let Some(path) = found {
        info!("Found browser at: {}", path.display());
        return Some(path);
    }

    if !cfg!(target_os = "windows") {
        for cmd in ["chromium", "chromium-browser", "google-chrome", "chrome"] {
            if let Ok(output) = Command::new("which").arg(cmd).output()
                && output.status.success()
            {
                let path_str = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !path_str.is_empty() {
                    info!("Found browser using 'which': {}", path_str);
                    return Some(PathBuf::from(path_str));
                }
            }
        }
    }

    None
}

/// Download a managed Chromium into the user cache directory.
pub async fn download_managed_browser() -> BrowserResult<PathBuf> {
    info!("Downloading managed Chromium browser...");

    let cache_dir = dirs::cache_dir()
        .unwrap_or_else(|| std::env::temp_dir().join(".cache"))
        .join("business_finder/chromium");

    std::fs::create_dir_all(&cache_dir).map_err(|e| {
        BrowserError::NotFound(format!(
            "could not create cache directory {}: {e}",
            cache_dir.display()
        ))
    })?;

    let options = BrowserFetcherOptions::builder()
        .with_path(&cache_dir)
        .build()
        .map_err(|e| BrowserError::NotFound(format!("invalid fetcher options: {e}")))?;

    let revision_info = BrowserFetcher::new(options)
        .fetch()
        .await
        .map_err(|e| BrowserError::NotFound(format!("Chromium download failed: {e}")))?;

    info!(
        "Downloaded Chromium to: {}",
        revision_info.folder_path.display()
    );
    Ok(revision_info.executable_path)
}

/// Launch Chrome with the configured user agent, window size and
/// anti-detection flags, using `user_data_dir` as its profile.
///
/// The returned handler task drives the CDP connection and must be aborted
/// once the browser is closed.
pub async fn launch_browser(
    config: &BrowserConfig,
    user_data_dir: &Path,
) -> BrowserResult<(Browser, JoinHandle<()>)> {
    let chrome_path = match find_browser_executable() {
        Some(path) => path,
        None => {
            warn!("No Chrome/Chromium executable found, falling back to fetcher");
            download_managed_browser().await?
        }
    };

    std::fs::create_dir_all(user_data_dir).map_err(|e| {
        BrowserError::LaunchFailed(format!(
            "could not create profile directory {}: {e}",
            user_data_dir.display()
        ))
    })?;

    let mut builder = CdpBrowserConfig::builder()
        .request_timeout(Duration::from_secs(30))
        .window_size(config.window.width, config.window.height)
        .user_data_dir(user_data_dir)
        .chrome_executable(chrome_path)
        .arg(format!("--user-agent={}", config.user_agent));

    builder = if config.headless {
        builder.headless_mode(HeadlessMode::default())
    } else {
        builder.with_head()
    };

    for arg in ANTI_DETECTION_ARGS {
        builder = builder.arg(*arg);
    }

    if config.disable_security {
        warn!("Disabling browser security features (disable_security=true)");
        builder = builder
            .arg("--disable-web-security")
            .arg("--ignore-certificate-errors");
    }

    if config.disable_security || should_disable_sandbox() {
        builder = builder.arg("--no-sandbox").arg("--disable-setuid-sandbox");
    }

    let browser_config = builder
        .build()
        .map_err(|e| BrowserError::LaunchFailed(format!("invalid browser config: {e}")))?;

    let (browser, mut handler) = Browser::launch(browser_config)
        .await
        .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

    let handler_task = task::spawn(async move {
        while let Some(event) = handler.next().await {
            if let Err(e) = event {
                let message = e.to_string();
                // chromiumoxide does not know every CDP event Chrome emits
                let benign = message.contains("data did not match any variant of untagged enum Message")
                    || message.contains("Failed to deserialize WS response");

                if benign {
                    trace!("Suppressed benign CDP serialization error: {}", message);
                } else {
                    error!("Browser handler error: {:?}", e);
                }
            }
        }
        trace!("Browser handler task completed");
    });

    Ok((browser, handler_task))
}

/// setuid sandboxing does not work inside containers
fn should_disable_sandbox() -> bool {
    Path::new("/.dockerenv").exists()
        || std::env::var("container").is_ok()
        || std::env::var("KUBERNETES_SERVICE_HOST").is_ok()
}
