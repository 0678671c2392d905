//! Dispatch Logger
//!
//! Fire-and-forget logging seam for dispatch outcomes. The block emits
//! exactly one entry per invocation — info on success, error on failure.
//! Production forwards to `tracing`; tests substitute a recording
//! implementation to count emissions.

/// Logging collaborator for the block.
pub trait DispatchLogger: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str, cause: &str);
}

/// Default logger forwarding to the `tracing` subscriber.
#[derive(Debug, Default)]
pub struct TracingLogger;

impl DispatchLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str, cause: &str) {
        tracing::error!("{}: {}", message, cause);
    }
}
