use thiserror::Error;

/// Errors in process-wide configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
