use once_cell::sync::Lazy;
use regex::Regex;

static REVIEWS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d[\d,]*)\s*reviews?").expect("reviews pattern is valid")
});

/// Parse `"1,234 reviews"` style counts; thousands separators are dropped.
pub fn extract_reviews_count(text: &str) -> Option<u64> {
    let digits = REVIEWS_PATTERN.captures(text)?.get(1)?.as_str().replace(',', "");
    digits.parse().ok()
}
