//! Gateway endpoint paths.

/// Builds the lookup endpoint path for a payment method nonce, relative to
/// the gateway base URL.
///
/// The nonce scopes the URL; it does not appear in the request body.
#[must_use]
pub fn lookup_path(nonce: &str) -> String {
    format!("payment_methods/{nonce}/three_d_secure/lookup")
}
