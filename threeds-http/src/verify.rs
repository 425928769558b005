//! The lookup invoker.
//!
//! [`perform_verification`] serializes a request, submits it to the
//! nonce-scoped lookup endpoint in a single POST, and delivers the outcome
//! through the session's listeners. The call itself returns as soon as the
//! attempt is dispatched; no outcome, success or failure, crosses the call
//! boundary synchronously.

use threeds::error::VerificationError;
use threeds::lookup::LookupResponse;
use threeds::request::VerificationRequest;
use threeds::wire::LookupRequestBody;

use crate::constants::lookup_path;
use crate::session::VerificationSession;

#[cfg(feature = "telemetry")]
use tracing::{Instrument, Span};

/// Starts a 3D Secure verification lookup for `request`.
///
/// The attempt runs on a spawned task: the configuration gate, request
/// serialization, the POST, and response parsing all happen off the calling
/// stack, and exactly one terminal event (lookup complete or error) reaches
/// each registered listener. There are no retries; a failed attempt is
/// terminal.
///
/// The request is consumed; it belongs to this one attempt and is never
/// mutated or reused.
///
/// # Panics
///
/// Panics if called outside a tokio runtime, as the attempt is dispatched
/// with [`tokio::spawn`].
///
/// # Example
///
/// ```no_run
/// use threeds::config::Configuration;
/// use threeds::request::VerificationRequest;
/// use threeds_http::gateway::GatewayTransport;
/// use threeds_http::session::VerificationSession;
/// use threeds_http::verify::perform_verification;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = GatewayTransport::try_from("https://gateway.example.com/client_api")?;
/// let session = VerificationSession::builder(transport)
///     .with_configuration(Configuration::enabled())
///     .build();
///
/// perform_verification(&session, VerificationRequest::new("a-nonce", "1.00"));
/// # Ok(())
/// # }
/// ```
pub fn perform_verification(session: &VerificationSession, request: VerificationRequest) {
    let session = session.clone();

    #[cfg(feature = "telemetry")]
    let attempt = {
        let span = tracing::info_span!(
            "threeds.lookup",
            amount = %request.amount(),
            otel.status_code = tracing::field::Empty,
            error.message = tracing::field::Empty,
        );
        run_attempt(session, request).instrument(span)
    };
    #[cfg(not(feature = "telemetry"))]
    let attempt = run_attempt(session, request);

    drop(tokio::spawn(attempt));
}

/// Runs one attempt to completion and routes the terminal event.
async fn run_attempt(session: VerificationSession, request: VerificationRequest) {
    let result = lookup(&session, &request).await;
    record_result_on_span(&result);
    match result {
        Ok(response) => session.notify_lookup_complete(&response),
        Err(error) => session.notify_error(&error),
    }
}

/// The attempt itself: gate, serialize, POST once, parse.
async fn lookup(
    session: &VerificationSession,
    request: &VerificationRequest,
) -> Result<LookupResponse, VerificationError> {
    if !session.configuration().three_d_secure_enabled {
        return Err(VerificationError::Disabled);
    }

    let body = LookupRequestBody::from(request)
        .encode()
        .map_err(VerificationError::Encode)?;
    let path = lookup_path(request.nonce());

    let raw = session.transport().post(&path, &body).await?;
    serde_json::from_str(&raw).map_err(VerificationError::Parse)
}

/// Records the outcome of an attempt on the current tracing span.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R>(result: &Result<R, VerificationError>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(tracing::Level::ERROR, error = %err, "3D Secure lookup failed");
        }
    }
}

/// Records the outcome of an attempt on the current tracing span.
/// Noop if the telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
fn record_result_on_span<R>(_result: &Result<R, VerificationError>) {}
