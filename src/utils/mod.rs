pub mod constants;
mod errors;
mod timeout;
mod wait_for_element;

pub use errors::ConfigError;
pub use timeout::{validate_interaction_timeout, validate_navigation_timeout};
pub use wait_for_element::wait_for_element;
