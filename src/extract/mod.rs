//! Field extractors for scraped business data
//!
//! Every extractor here is a pure function over text pulled from the page
//! (visible text, accessible labels, attributes). A pattern miss is a normal
//! outcome and comes back as `None`; nothing in this module returns an error.

mod address;
pub mod label;
mod phone;
mod rating;
mod reviews;

pub use address::{classify_address, classify_address_near};
pub use label::{LABEL_DELIMITER, ListingLabel, parse_listing_label};
pub use phone::{extract_phone, normalize_phone};
pub use rating::{RatingStyle, extract_rating};
pub use reviews::extract_reviews_count;
