//! Verification request model.
//!
//! A [`VerificationRequest`] collects everything the gateway needs to run a
//! 3D Secure lookup for a tokenized payment method: the payment method
//! nonce, the transaction amount, and optional customer contact details and
//! billing address.
//!
//! Requests are assembled with consuming `with_*` builders and handed to the
//! lookup invoker once; nothing is validated at build time. An empty or
//! malformed nonce or amount is accepted here and rejected, if at all, by
//! the gateway.

/// Parameters for a single 3D Secure verification lookup.
///
/// The nonce and amount are required; every other field is independently
/// optional. A field that was never set serializes differently from one set
/// to an empty string, so builders record values verbatim.
///
/// # Example
///
/// ```rust
/// use threeds::request::{PostalAddress, VerificationRequest};
///
/// let request = VerificationRequest::new("a-nonce", "1.00")
///     .with_email("test@example.com")
///     .with_billing_address(
///         PostalAddress::default()
///             .with_locality("Oakland")
///             .with_region("CA"),
///     );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationRequest {
    pub(crate) nonce: String,
    pub(crate) amount: String,
    pub(crate) mobile_phone_number: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) shipping_method: Option<String>,
    pub(crate) billing_address: Option<PostalAddress>,
}

impl VerificationRequest {
    /// Creates a request for the given payment method nonce and amount.
    ///
    /// The amount is a decimal string (e.g. `"1.00"`) and is transmitted
    /// verbatim; it is never parsed as a number.
    #[must_use]
    pub fn new(nonce: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            nonce: nonce.into(),
            amount: amount.into(),
            ..Self::default()
        }
    }

    /// Sets the customer's mobile phone number.
    #[must_use]
    pub fn with_mobile_phone_number(mut self, number: impl Into<String>) -> Self {
        self.mobile_phone_number = Some(number.into());
        self
    }

    /// Sets the customer's email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the shipping method code (e.g. `"01"`).
    ///
    /// The code is opaque at this layer and passes through verbatim.
    #[must_use]
    pub fn with_shipping_method(mut self, method: impl Into<String>) -> Self {
        self.shipping_method = Some(method.into());
        self
    }

    /// Sets the customer's billing address.
    #[must_use]
    pub fn with_billing_address(mut self, address: PostalAddress) -> Self {
        self.billing_address = Some(address);
        self
    }

    /// Returns the payment method nonce this request verifies.
    #[must_use]
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Returns the transaction amount as the caller supplied it.
    #[must_use]
    pub fn amount(&self) -> &str {
        &self.amount
    }
}

/// A customer billing address.
///
/// Every field is optional. Field names follow the request vocabulary
/// (`street_address`, `locality`, ...); the wire layer remaps them to the
/// gateway's vocabulary (`line1`, `city`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostalAddress {
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
    pub(crate) street_address: Option<String>,
    pub(crate) extended_address: Option<String>,
    pub(crate) locality: Option<String>,
    pub(crate) region: Option<String>,
    pub(crate) postal_code: Option<String>,
    pub(crate) country_code_alpha2: Option<String>,
    pub(crate) phone_number: Option<String>,
}

impl PostalAddress {
    /// Sets the given name.
    #[must_use]
    pub fn with_first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = Some(name.into());
        self
    }

    /// Sets the surname.
    #[must_use]
    pub fn with_last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = Some(name.into());
        self
    }

    /// Sets the street address line.
    #[must_use]
    pub fn with_street_address(mut self, street: impl Into<String>) -> Self {
        self.street_address = Some(street.into());
        self
    }

    /// Sets the extended address line (apartment, suite, unit).
    #[must_use]
    pub fn with_extended_address(mut self, extended: impl Into<String>) -> Self {
        self.extended_address = Some(extended.into());
        self
    }

    /// Sets the locality (city).
    #[must_use]
    pub fn with_locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }

    /// Sets the region (state or province).
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the postal code.
    #[must_use]
    pub fn with_postal_code(mut self, code: impl Into<String>) -> Self {
        self.postal_code = Some(code.into());
        self
    }

    /// Sets the ISO 3166-1 alpha-2 country code.
    #[must_use]
    pub fn with_country_code_alpha2(mut self, code: impl Into<String>) -> Self {
        self.country_code_alpha2 = Some(code.into());
        self
    }

    /// Sets the address phone number.
    #[must_use]
    pub fn with_phone_number(mut self, number: impl Into<String>) -> Self {
        self.phone_number = Some(number.into());
        self
    }
}
