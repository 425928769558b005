//! Verification session.
//!
//! A [`VerificationSession`] ties together the gateway transport, the
//! merchant configuration, and the registered outcome listeners. Sessions
//! are cheap to clone; clones share the same transport and listener
//! registry, which lets a dispatched lookup outlive the caller's stack
//! frame.

use std::sync::Arc;

use threeds::config::Configuration;
use threeds::error::VerificationError;
use threeds::listener::VerificationListener;
use threeds::lookup::LookupResponse;

use crate::transport::Transport;

struct SessionInner {
    transport: Box<dyn Transport>,
    configuration: Configuration,
    listeners: Vec<Box<dyn VerificationListener>>,
}

/// A configured verification context.
///
/// Built once per authorization via [`VerificationSession::builder`], then
/// handed by reference to
/// [`perform_verification`](crate::verify::perform_verification) for each
/// attempt. Listener registration happens at build time; delivery runs in
/// registration order.
#[derive(Clone)]
pub struct VerificationSession {
    inner: Arc<SessionInner>,
}

impl std::fmt::Debug for VerificationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationSession")
            .field("configuration", &self.inner.configuration)
            .field("listeners", &self.inner.listeners.len())
            .finish_non_exhaustive()
    }
}

impl VerificationSession {
    /// Starts building a session around the given transport.
    #[must_use]
    pub fn builder(transport: impl Transport + 'static) -> VerificationSessionBuilder {
        VerificationSessionBuilder {
            transport: Box::new(transport),
            configuration: Configuration::default(),
            listeners: Vec::new(),
        }
    }

    /// Returns the gateway configuration this session was built with.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.inner.configuration
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.inner.transport.as_ref()
    }

    pub(crate) fn notify_lookup_complete(&self, lookup: &LookupResponse) {
        for listener in &self.inner.listeners {
            listener.on_lookup_complete(lookup);
        }
    }

    pub(crate) fn notify_error(&self, error: &VerificationError) {
        for listener in &self.inner.listeners {
            listener.on_error(error);
        }
    }
}

/// Builder for [`VerificationSession`].
pub struct VerificationSessionBuilder {
    transport: Box<dyn Transport>,
    configuration: Configuration,
    listeners: Vec<Box<dyn VerificationListener>>,
}

impl std::fmt::Debug for VerificationSessionBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationSessionBuilder")
            .field("configuration", &self.configuration)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl VerificationSessionBuilder {
    /// Sets the gateway configuration.
    ///
    /// Without this, the default configuration applies, which leaves 3D
    /// Secure disabled and every attempt reports
    /// [`VerificationError::Disabled`].
    #[must_use]
    pub fn with_configuration(mut self, configuration: Configuration) -> Self {
        self.configuration = configuration;
        self
    }

    /// Registers an outcome listener. Listeners run in registration order.
    #[must_use]
    pub fn with_listener(mut self, listener: impl VerificationListener + 'static) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Finishes the session.
    #[must_use]
    pub fn build(self) -> VerificationSession {
        VerificationSession {
            inner: Arc::new(SessionInner {
                transport: self.transport,
                configuration: self.configuration,
                listeners: self.listeners,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::transport::{BoxFuture, TransportError};

    struct NoopTransport;

    impl Transport for NoopTransport {
        fn post<'a>(
            &'a self,
            _path: &'a str,
            _body: &'a str,
        ) -> BoxFuture<'a, Result<String, TransportError>> {
            Box::pin(async { Ok(String::new()) })
        }
    }

    struct CountingListener(Arc<AtomicUsize>);

    impl VerificationListener for CountingListener {
        fn on_error(&self, _error: &VerificationError) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn every_registered_listener_is_notified() {
        let count = Arc::new(AtomicUsize::new(0));
        let session = VerificationSession::builder(NoopTransport)
            .with_listener(CountingListener(Arc::clone(&count)))
            .with_listener(CountingListener(Arc::clone(&count)))
            .build();

        assert_eq!(session.listener_count(), 2);
        session.notify_error(&VerificationError::Disabled);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn default_configuration_leaves_the_flag_off() {
        let session = VerificationSession::builder(NoopTransport).build();
        assert!(!session.configuration().three_d_secure_enabled);
    }
}
