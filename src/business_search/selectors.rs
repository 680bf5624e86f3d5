//! CSS selectors for the maps UI
//!
//! These track provider markup and will drift. A selector that stops
//! matching only means the field comes back empty.

/// Scrollable container holding the result listings
pub const FEED_SELECTOR: &str = r#"div[role="feed"]"#;

/// One clickable listing in the feed
pub const LISTING_SELECTOR: &str = r#"a[href*="/maps/place/"]"#;

/// Detail panel phone affordances, highest priority first
pub const PHONE_SELECTORS: &[&str] = &[
    r#"button[data-item-id*="phone"]"#,
    r#"button[data-tooltip*="phone"]"#,
    r#"a[href^="tel:"]"#,
    r#"button[aria-label*="Phone"]"#,
];

/// Detail panel website affordances, highest priority first
pub const WEBSITE_SELECTORS: &[&str] = &[
    r#"a[data-item-id="authority"]"#,
    r#"a[aria-label*="Website"]"#,
    r#"button[data-item-id*="authority"]"#,
];

/// Detail panel review-count affordances, highest priority first
pub const REVIEWS_SELECTORS: &[&str] = &[
    r#"button[aria-label*="reviews"]"#,
    r#"span[aria-label*="reviews"]"#,
];

/// Detail panel star-rating affordances, highest priority first
pub const RATING_SELECTORS: &[&str] = &[
    r#"div[role="img"][aria-label*="stars"]"#,
    r#"span[role="img"][aria-label*="stars"]"#,
];
