//! The transport seam consumed by the lookup invoker.
//!
//! The invoker treats the transport as a black box: one POST per attempt,
//! with the serialized body passed through unmodified. Implementations
//! decide how the request actually reaches the gateway, which keeps the
//! invoker testable against an in-process capture.

use std::future::Future;
use std::pin::Pin;

use http::StatusCode;
use threeds::error::VerificationError;

/// Boxed future returned by dyn-compatible transport methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Submits a lookup request body to the gateway.
///
/// `post` is called exactly once per verification attempt with a path
/// relative to the gateway base URL and the JSON body text. On success the
/// implementation returns the raw response body; every transport-level
/// problem (network failure, non-2xx status, unreadable body) is reported
/// as a [`TransportError`].
pub trait Transport: Send + Sync {
    /// POSTs `body` to `path` and resolves with the response body text.
    fn post<'a>(&'a self, path: &'a str, body: &'a str)
    -> BoxFuture<'a, Result<String, TransportError>>;
}

/// Errors produced while talking to the gateway.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// URL construction failed.
    #[error("URL parse error: {context}: {source}")]
    UrlParse {
        /// Human-readable context.
        context: &'static str,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },
    /// HTTP transport error.
    #[error("HTTP error: {context}: {source}")]
    Http {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// The response body could not be read.
    #[error("failed to read response body: {context}: {source}")]
    ResponseBodyRead {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// The gateway answered with a non-success status.
    #[error("unexpected HTTP status: {context}: {status}: {body}")]
    HttpStatus {
        /// Human-readable context.
        context: &'static str,
        /// The response status code.
        status: StatusCode,
        /// The response body text.
        body: String,
    },
}

/// Maps transport failures into the core error taxonomy delivered to
/// listeners. Status rejections keep their code and body; everything else
/// is carried as an opaque transport source.
impl From<TransportError> for VerificationError {
    fn from(value: TransportError) -> Self {
        match value {
            TransportError::HttpStatus { status, body, .. } => Self::Status {
                status: status.as_u16(),
                body,
            },
            other => Self::Transport(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_rejection_maps_to_status_error() {
        let error = TransportError::HttpStatus {
            context: "lookup request",
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: "rejected".to_owned(),
        };
        match VerificationError::from(error) {
            VerificationError::Status { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, "rejected");
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }
}
