//! Timeout validation for configured browser waits

use std::time::Duration;

use super::ConfigError;

/// Maximum timeout for browser navigation operations (5 minutes)
/// Covers slow-loading sites, heavy SPAs, and network delays
pub const MAX_NAVIGATION_TIMEOUT_MS: u64 = 300_000;

/// Maximum timeout for element interaction operations (30 seconds)
pub const MAX_INTERACTION_TIMEOUT_MS: u64 = 30_000;

/// Validate a navigation-class timeout (page loads, feed wait)
pub fn validate_navigation_timeout(field: &'static str, ms: u64) -> Result<Duration, ConfigError> {
    validate(field, ms, MAX_NAVIGATION_TIMEOUT_MS)
}

/// Validate an interaction-class timeout (single selector waits)
pub fn validate_interaction_timeout(field: &'static str, ms: u64) -> Result<Duration, ConfigError> {
    validate(field, ms, MAX_INTERACTION_TIMEOUT_MS)
}

fn validate(field: &'static str, ms: u64, max_ms: u64) -> Result<Duration, ConfigError> {
    if ms == 0 {
        return Err(ConfigError::Invalid {
            field,
            reason: "timeout must be greater than 0ms".to_string(),
        });
    }

    if ms > max_ms {
        return Err(ConfigError::Invalid {
            field,
            reason: format!(
                "timeout cannot exceed {}ms ({:.1}s). Received: {}ms",
                max_ms,
                max_ms as f64 / 1000.0,
                ms
            ),
        });
    }

    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(
            validate_navigation_timeout("t", 20_000).unwrap(),
            Duration::from_secs(20)
        );
        assert!(validate_navigation_timeout("t", MAX_NAVIGATION_TIMEOUT_MS + 1).is_err());
        assert!(validate_interaction_timeout("t", 45_000).is_err());
        assert!(validate_interaction_timeout("t", 0).is_err());
    }
}
