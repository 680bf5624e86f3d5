//! North-American phone number matching and display normalisation

use once_cell::sync::Lazy;
use regex::Regex;

/// `(AAA) BBB-CCCC`, `AAA-BBB-CCCC`, `AAA.BBB.CCCC`, `AAA BBB CCCC` and mixes.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("phone pattern is valid")
});

/// Return the first phone-shaped substring of `text`, as written.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_PATTERN.find(text).map(|m| m.as_str().to_string())
}

/// Format a phone number as `(AAA) BBB-CCCC`.
///
/// Ten digits are formatted directly; eleven digits with a leading `1` lose
/// the country code first. Any other digit count returns `raw` unchanged.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    let national = match digits.len() {
        10 => digits.as_str(),
        11 if digits.starts_with('1') => &digits[1..],
        _ => return raw.to_string(),
    };

    format!(
        "({}) {}-{}",
        &national[..3],
        &national[3..6],
        &national[6..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_digits_are_formatted_in_order() {
        assert_eq!(normalize_phone("6135550100"), "(613) 555-0100");
        assert_eq!(normalize_phone("613.555.0100"), "(613) 555-0100");
        assert_eq!(normalize_phone("(613) 555 0100"), "(613) 555-0100");
    }

    #[test]
    fn leading_country_code_is_dropped() {
        assert_eq!(normalize_phone("1-416-555-0199"), "(416) 555-0199");
        assert_eq!(normalize_phone("+1 (416) 555-0199"), "(416) 555-0199");
    }

    #[test]
    fn other_digit_counts_pass_through() {
        assert_eq!(normalize_phone("555-0100"), "555-0100");
        assert_eq!(normalize_phone("2-416-555-0199"), "2-416-555-0199");
        assert_eq!(normalize_phone("+44 20 7946 0958"), "+44 20 7946 0958");
        assert_eq!(normalize_phone(""), "");
    }

    #[test]
    fn extracts_first_phone_from_free_text() {
        assert_eq!(
            extract_phone("Call us at (613) 555-0100 or 613-555-0101").as_deref(),
            Some("(613) 555-0100")
        );
        assert_eq!(
            extract_phone("Phone: 613.555.0100").as_deref(),
            Some("613.555.0100")
        );
        assert_eq!(extract_phone("Open until 9 PM"), None);
    }
}
