//! Injectable logging.
//!
//! Operations that degrade to a safe default report what went wrong through
//! a [`Logger`] handed to them, rather than a process-wide sink. The default
//! [`TracingLogger`] forwards to `tracing`; tests can record messages instead.

/// Receives diagnostics from correction operations.
pub trait Logger: Send + Sync {
    /// Intermediate values useful when tracing a single call.
    fn debug(&self, operation: &'static str, message: &str);

    /// A failure that was swallowed and replaced by a default.
    fn warn(&self, operation: &'static str, message: &str);
}

/// Forwards to the `tracing` macros with an `operation` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, operation: &'static str, message: &str) {
        tracing::debug!(operation, "{}", message);
    }

    fn warn(&self, operation: &'static str, message: &str) {
        tracing::warn!(operation, "{}", message);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _operation: &'static str, _message: &str) {}

    fn warn(&self, _operation: &'static str, _message: &str) {}
}
