//! Error taxonomy for a verification attempt.
//!
//! Every failure mode of a lookup funnels into [`VerificationError`] and is
//! delivered through the session's listeners; there is no synchronous error
//! path out of the invoker. Missing or malformed required fields are not an
//! error at this layer; the gateway rejects them, which surfaces as
//! [`VerificationError::Status`].

/// Why a verification lookup attempt failed.
///
/// The transport source is boxed so this crate stays free of HTTP
/// dependencies; the concrete type is supplied by the transport crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum VerificationError {
    /// 3D Secure is not enabled in the gateway configuration.
    #[error("3D Secure is not enabled in the gateway configuration")]
    Disabled,
    /// The lookup request body could not be encoded.
    #[error("failed to encode lookup request body: {0}")]
    Encode(#[source] serde_json::Error),
    /// The transport failed before the gateway produced an answer.
    #[error("lookup transport failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The gateway rejected the lookup with a non-success status.
    #[error("gateway rejected lookup ({status}): {body}")]
    Status {
        /// HTTP status code returned by the gateway.
        status: u16,
        /// Response body text, usually a gateway error document.
        body: String,
    },
    /// The gateway answered 2xx but the body was not a lookup document.
    #[error("failed to parse lookup response: {0}")]
    Parse(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_carries_code_and_body() {
        let error = VerificationError::Status {
            status: 422,
            body: "{\"error\":\"invalid nonce\"}".to_owned(),
        };
        let message = error.to_string();
        assert!(message.contains("422"));
        assert!(message.contains("invalid nonce"));
    }
}
