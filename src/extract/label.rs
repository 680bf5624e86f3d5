//! Accessible-label parser for results-feed listings
//!
//! A listing link carries an `aria-label` made of parts joined by
//! [`LABEL_DELIMITER`], for example
//! `"Sweet Crumb Bakery · 4.6 · Bakery · 123 Bank St"`. The parts are read
//! positionally:
//!
//! - part 0 is the business name
//! - part 1, when present, may carry the star rating as its first number
//! - the address is the last remaining part that looks like one (see
//!   [`classify_address_near`]); part 1 is only a candidate when it did not
//!   yield a rating
//!
//! Provider markup drifts, so any of these may be missing. Only the name is
//! required.

use super::address::classify_address_near;
use super::rating::{RatingStyle, extract_rating};

/// Separator between label parts (middle dot).
pub const LABEL_DELIMITER: char = '·';

/// Labels shorter than this are not listings.
const MIN_LABEL_CHARS: usize = 5;

/// Names shorter than this are not real business entries.
pub const MIN_NAME_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct ListingLabel {
    pub name: String,
    pub rating: Option<f64>,
    pub address: Option<String>,
}

/// Parse a listing's accessible label. Returns `None` when it does not
/// describe a business.
pub fn parse_listing_label(label: &str, locality: Option<&str>) -> Option<ListingLabel> {
    let label = label.trim();
    if label.chars().count() < MIN_LABEL_CHARS {
        return None;
    }

    let parts: Vec<&str> = label.split(LABEL_DELIMITER).map(str::trim).collect();

    let name = parts.first().copied().unwrap_or_default();
    if name.chars().count() < MIN_NAME_CHARS {
        return None;
    }

    let rating = parts
        .get(1)
        .and_then(|part| extract_rating(part, RatingStyle::Embedded));

    let address_from = if rating.is_some() { 2 } else { 1 };
    let address = parts
        .get(address_from..)
        .and_then(|rest| classify_address_near(rest, locality));

    Some(ListingLabel {
        name: name.to_string(),
        rating,
        address,
    })
}
