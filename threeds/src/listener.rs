//! Listener trait for asynchronous lookup outcomes.
//!
//! A verification attempt resolves off the calling stack, so results are
//! delivered through registered listeners rather than a return value. All
//! methods have default no-op implementations; implement only the events
//! you care about.

use crate::error::VerificationError;
use crate::lookup::LookupResponse;

/// Receives the outcome of a verification lookup.
///
/// Listeners run in registration order on the task that performed the
/// lookup. Each attempt produces exactly one terminal event per listener:
/// either [`on_lookup_complete`](Self::on_lookup_complete) or
/// [`on_error`](Self::on_error), never both.
pub trait VerificationListener: Send + Sync {
    /// Called when the gateway lookup completes successfully.
    fn on_lookup_complete(&self, _lookup: &LookupResponse) {}

    /// Called when the attempt fails for any reason, including a disabled
    /// configuration detected before dispatch.
    fn on_error(&self, _error: &VerificationError) {}
}
