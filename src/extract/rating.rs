//! Star rating parsing

use once_cell::sync::Lazy;
use regex::Regex;

static EMBEDDED_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.?\d*)").expect("embedded rating pattern is valid"));

static STAR_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.?\d*)\s*★").expect("star rating pattern is valid"));

/// How the rating is written in the text being scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingStyle {
    /// `"4.5 out of 5 stars"`, `"4.5 stars"`: the first whitespace token is the rating
    LeadingToken,
    /// `"4.5★"`, `"4.5 ★"`: the number directly before a star glyph
    StarSuffix,
    /// `"4.5(1,234)"`: the first number anywhere in the text
    Embedded,
}

/// Parse a rating from `text`. Values are not clamped to 0-5.
pub fn extract_rating(text: &str, style: RatingStyle) -> Option<f64> {
    let candidate = match style {
        RatingStyle::LeadingToken => text.split_whitespace().next()?,
        RatingStyle::StarSuffix => STAR_SUFFIX.captures(text)?.get(1)?.as_str(),
        RatingStyle::Embedded => EMBEDDED_NUMBER.captures(text)?.get(1)?.as_str(),
    };

    candidate.parse::<f64>().ok()
}
