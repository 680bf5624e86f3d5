//! Shared constants for browser setup

/// Desktop Chrome user agent sent by every page
///
/// Keep within a few releases of current stable; stale versions are an
/// easy bot signal.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// Prefix for per-search Chrome profile directories under the temp dir
pub const PROFILE_DIR_PREFIX: &str = "business_finder_chrome";
