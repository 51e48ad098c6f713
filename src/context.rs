use std::fmt;
use std::sync::Arc;

/// Upper bound on the number of body bytes kept in an error snapshot.
pub const MAX_BODY_BYTES: usize = 64_000;

/// Receives debug diagnostics emitted while building an error.
///
/// Implementations must tolerate concurrent calls from several call sites.
pub trait DiagnosticSink: Send + Sync {
    fn debug(&self, message: fmt::Arguments<'_>);
}

/// Forwards diagnostics to `tracing` at debug level.
///
/// Without the `tracing` feature the diagnostics are dropped.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn debug(&self, message: fmt::Arguments<'_>) {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "oci_status_error", "{}", message);

        #[cfg(not(feature = "tracing"))]
        let _ = message;
    }
}

/// Settings shared by every error built at a call site.
#[derive(Clone)]
pub struct ErrorContext {
    body_limit: usize,
    sink: Arc<dyn DiagnosticSink>,
}

impl fmt::Debug for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorContext")
            .field("body_limit", &self.body_limit)
            .field("sink", &"<dyn DiagnosticSink>")
            .finish()
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            body_limit: MAX_BODY_BYTES,
            sink: Arc::new(TracingSink),
        }
    }
}

impl ErrorContext {
    /// Limits the body snapshot to `limit` bytes.
    ///
    /// Values above [`MAX_BODY_BYTES`] are clamped.
    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit.min(MAX_BODY_BYTES);
        self
    }

    /// Routes diagnostics to `sink` instead of `tracing`.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn body_limit(&self) -> usize {
        self.body_limit
    }

    pub fn sink(&self) -> &dyn DiagnosticSink {
        self.sink.as_ref()
    }
}
