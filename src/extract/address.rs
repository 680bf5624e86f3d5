//! Address detection over the parts of a delimiter-split label

use once_cell::sync::Lazy;
use regex::Regex;

/// Digits or a street / locality word.
static STREET_HINT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\d|\b(street|st|avenue|ave|road|rd|drive|dr|boulevard|blvd|lane|ln|way|crescent|cres|court|ct|place|pl|highway|hwy|parkway|pkwy|suite|unit|square|sq)\b",
    )
    .expect("street hint pattern is valid")
});

/// Province and territory codes are only meaningful in upper case.
static REGION_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(AB|BC|MB|NB|NL|NS|NT|NU|ON|PE|QC|SK|YT)\b").expect("region pattern is valid")
});

/// Take the last part that looks like an address.
pub fn classify_address<S: AsRef<str>>(parts: &[S]) -> Option<String> {
    classify_address_near(parts, None)
}

/// Like [`classify_address`], additionally accepting parts that mention
/// `locality` (the searched location) case-insensitively.
pub fn classify_address_near<S: AsRef<str>>(parts: &[S], locality: Option<&str>) -> Option<String> {
    let locality = locality
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_lowercase);

    parts
        .iter()
        .rev()
        .map(|part| part.as_ref().trim())
        .find(|part| {
            !part.is_empty()
                && (STREET_HINT.is_match(part)
                    || REGION_CODE.is_match(part)
                    || locality
                        .as_deref()
                        .is_some_and(|l| part.to_lowercase().contains(l)))
        })
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_last_matching_part() {
        let parts = ["Bakery", "123 Bank St", "Open 24 hours"];
        assert_eq!(classify_address(&parts).as_deref(), Some("Open 24 hours"));

        let parts = ["Bakery", "Closed", "Bank Street"];
        assert_eq!(classify_address(&parts).as_deref(), Some("Bank Street"));
    }

    #[test]
    fn region_codes_are_case_sensitive() {
        assert_eq!(
            classify_address(&["Bakery", "Ottawa, ON"]).as_deref(),
            Some("Ottawa, ON")
        );
        assert_eq!(classify_address(&["Bakery", "Open on Sunday"]), None);
    }

    #[test]
    fn searched_location_counts_as_locality() {
        let parts = ["Bakery", "Downtown Ottawa"];
        assert_eq!(classify_address(&parts), None);
        assert_eq!(
            classify_address_near(&parts, Some("ottawa")).as_deref(),
            Some("Downtown Ottawa")
        );
    }

    #[test]
    fn no_candidate_is_none() {
        let empty: [&str; 0] = [];
        assert_eq!(classify_address(&empty), None);
        assert_eq!(classify_address(&["Bakery", "Cafe"]), None);
    }
}
