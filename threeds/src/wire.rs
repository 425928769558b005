//! Lookup request body serialization.
//!
//! Renders a [`VerificationRequest`] into the gateway's lookup wire format.
//! The gateway distinguishes a key that is present with JSON `null` from a
//! key that is omitted, so the customer and billing-address keys are always
//! emitted and `Option` fields serialize to explicit `null` rather than
//! being skipped.
//!
//! The body shape is:
//!
//! ```json
//! {
//!   "amount": "1.00",
//!   "customer": {
//!     "mobilePhoneNumber": null,
//!     "email": "test@example.com",
//!     "shippingMethod": null,
//!     "billingAddress": { "firstName": null, "line1": "555 Smith Street", ... }
//!   }
//! }
//! ```
//!
//! Address fields are remapped to the gateway vocabulary by a fixed table:
//! `street_address` → `line1`, `extended_address` → `line2`, `locality` →
//! `city`, `region` → `state`, `country_code_alpha2` → `countryCode`. All
//! string values pass through byte-for-byte; nothing is trimmed, parsed, or
//! case-normalized.

use serde::Serialize;

use crate::request::{PostalAddress, VerificationRequest};

/// Wire view of a lookup request body.
///
/// Borrows from the source [`VerificationRequest`]; building one is free of
/// allocation until [`encode`](Self::encode) renders the JSON text. Encoding
/// is deterministic: the same request always produces byte-identical output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequestBody<'a> {
    amount: &'a str,
    customer: CustomerBody<'a>,
}

/// The `customer` object. Always present, even when every field is unset.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CustomerBody<'a> {
    mobile_phone_number: Option<&'a str>,
    email: Option<&'a str>,
    shipping_method: Option<&'a str>,
    billing_address: Option<AddressBody<'a>>,
}

/// The nested `billingAddress` object with the wire field names.
///
/// Every key is emitted; an unset source field becomes `null`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddressBody<'a> {
    first_name: Option<&'a str>,
    last_name: Option<&'a str>,
    #[serde(rename = "line1")]
    street_address: Option<&'a str>,
    #[serde(rename = "line2")]
    extended_address: Option<&'a str>,
    #[serde(rename = "city")]
    locality: Option<&'a str>,
    #[serde(rename = "state")]
    region: Option<&'a str>,
    postal_code: Option<&'a str>,
    #[serde(rename = "countryCode")]
    country_code_alpha2: Option<&'a str>,
    phone_number: Option<&'a str>,
}

impl<'a> From<&'a VerificationRequest> for LookupRequestBody<'a> {
    fn from(request: &'a VerificationRequest) -> Self {
        Self {
            amount: &request.amount,
            customer: CustomerBody {
                mobile_phone_number: request.mobile_phone_number.as_deref(),
                email: request.email.as_deref(),
                shipping_method: request.shipping_method.as_deref(),
                billing_address: request.billing_address.as_ref().map(AddressBody::from),
            },
        }
    }
}

impl<'a> From<&'a PostalAddress> for AddressBody<'a> {
    fn from(address: &'a PostalAddress) -> Self {
        Self {
            first_name: address.first_name.as_deref(),
            last_name: address.last_name.as_deref(),
            street_address: address.street_address.as_deref(),
            extended_address: address.extended_address.as_deref(),
            locality: address.locality.as_deref(),
            region: address.region.as_deref(),
            postal_code: address.postal_code.as_deref(),
            country_code_alpha2: address.country_code_alpha2.as_deref(),
            phone_number: address.phone_number.as_deref(),
        }
    }
}

impl LookupRequestBody<'_> {
    /// Renders the body as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails; with string-only fields
    /// this does not happen in practice, but the error is propagated rather
    /// than swallowed.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
