//! Gateway configuration.
//!
//! The merchant's gateway configuration document carries the flag that
//! enables or disables the 3D Secure flow. Fetching the document is a host
//! application concern; this module only models the fields the lookup flow
//! reads.

use serde::{Deserialize, Serialize};

/// The subset of the gateway configuration the lookup flow consumes.
///
/// A verification attempt against a configuration with
/// `three_d_secure_enabled == false` dispatches no network request and
/// reports an error through the session's listeners instead.
///
/// # Example
///
/// ```rust
/// use threeds::config::Configuration;
///
/// let configuration: Configuration =
///     serde_json::from_str(r#"{"threeDSecureEnabled": true}"#)?;
/// assert!(configuration.three_d_secure_enabled);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Whether 3D Secure verification is enabled for this merchant.
    ///
    /// Defaults to `false`: a configuration that never mentioned the flag
    /// must not be treated as enabled.
    #[serde(default)]
    pub three_d_secure_enabled: bool,
}

impl Configuration {
    /// Returns a configuration with 3D Secure enabled.
    #[must_use]
    pub const fn enabled() -> Self {
        Self {
            three_d_secure_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_flag_defaults_to_disabled() {
        let configuration: Configuration = serde_json::from_str("{}").unwrap();
        assert!(!configuration.three_d_secure_enabled);
    }

    #[test]
    fn flag_round_trips_in_camel_case() {
        let json = serde_json::to_value(Configuration::enabled()).unwrap();
        assert_eq!(json["threeDSecureEnabled"], true);
    }
}
