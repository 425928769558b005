//! Lookup response wire types.
//!
//! The gateway answers a lookup with a JSON document describing the
//! tokenized payment method, the ACS (access control server) handoff data,
//! and the current liability-shift state. When the document carries an ACS
//! URL, the cardholder must complete an authentication challenge; when it
//! does not, the lookup outcome is terminal.

use serde::Deserialize;

/// A successful lookup answer from the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    /// The tokenized payment method the lookup ran against.
    #[serde(default)]
    pub payment_method: Option<TokenizedCard>,
    /// ACS handoff data for the authentication challenge.
    pub lookup: Lookup,
    /// Liability-shift state reported by the gateway.
    #[serde(default)]
    pub three_d_secure_info: Option<ThreeDSecureInfo>,
}

impl LookupResponse {
    /// Returns `true` when the cardholder must complete an authentication
    /// challenge before the transaction can proceed.
    #[must_use]
    pub fn requires_user_authentication(&self) -> bool {
        self.lookup.acs_url.is_some()
    }
}

/// ACS handoff fields for the challenge flow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lookup {
    /// Challenge URL; `null` when no challenge is required.
    #[serde(default)]
    pub acs_url: Option<String>,
    /// Merchant descriptor echoed back to the gateway after the challenge.
    pub md: String,
    /// Return URL the ACS redirects to when the challenge finishes.
    pub term_url: String,
    /// Payer authentication request blob forwarded to the ACS.
    pub pareq: String,
    /// Protocol version the gateway selected (e.g. `"1.0.2"`).
    #[serde(default)]
    pub three_d_secure_version: Option<String>,
}

/// The tokenized card referenced by a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizedCard {
    /// One-time-use reference to the payment method.
    pub nonce: String,
    /// Display description (e.g. `"ending in 11"`).
    #[serde(default)]
    pub description: Option<String>,
}

/// Liability-shift state for a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeDSecureInfo {
    /// Whether fraud liability has shifted to the card issuer.
    #[serde(default)]
    pub liability_shifted: bool,
    /// Whether a liability shift is possible for this card.
    #[serde(default)]
    pub liability_shift_possible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_challenge_document() {
        let raw = r#"{
            "paymentMethod": {
                "type": "CreditCard",
                "nonce": "123456-12345-12345-a-adfa",
                "description": "ending in 11"
            },
            "lookup": {
                "acsUrl": "https://acs.example.com/auth",
                "md": "merchant-descriptor",
                "termUrl": "https://gateway.example.com/term",
                "pareq": "pareq-blob",
                "threeDSecureVersion": "1.0.2"
            },
            "threeDSecureInfo": {
                "liabilityShifted": false,
                "liabilityShiftPossible": true
            }
        }"#;

        let response: LookupResponse = serde_json::from_str(raw).unwrap();
        assert!(response.requires_user_authentication());
        assert_eq!(
            response.lookup.acs_url.as_deref(),
            Some("https://acs.example.com/auth")
        );
        assert_eq!(response.lookup.md, "merchant-descriptor");
        assert_eq!(response.lookup.pareq, "pareq-blob");
        assert_eq!(
            response.payment_method.unwrap().nonce,
            "123456-12345-12345-a-adfa"
        );
        let info = response.three_d_secure_info.unwrap();
        assert!(!info.liability_shifted);
        assert!(info.liability_shift_possible);
    }

    #[test]
    fn null_acs_url_means_no_challenge() {
        let raw = r#"{
            "lookup": {
                "acsUrl": null,
                "md": "merchant-descriptor",
                "termUrl": "https://gateway.example.com/term",
                "pareq": ""
            }
        }"#;

        let response: LookupResponse = serde_json::from_str(raw).unwrap();
        assert!(!response.requires_user_authentication());
        assert_eq!(response.payment_method, None);
        assert_eq!(response.lookup.three_d_secure_version, None);
    }
}
