//! Toast Sink
//!
//! Non-blocking surface for the user-visible success/failure text. The
//! host's UI layer supplies an implementation that shows a transient
//! notification; the default forwards to the log. Implementations must
//! return promptly — `show` is called from the dispatch path and must
//! never block it.

/// Non-blocking user notification collaborator.
pub trait ToastSink: Send + Sync {
    fn show(&self, text: &str);
}

/// Default sink that surfaces the text through the log.
#[derive(Debug, Default)]
pub struct LogToast;

impl ToastSink for LogToast {
    fn show(&self, text: &str) {
        tracing::info!(toast = true, "{}", text);
    }
}

/// Sink that drops the text. For hosts with no user-facing surface.
#[derive(Debug, Default)]
pub struct NoopToast;

impl ToastSink for NoopToast {
    fn show(&self, _text: &str) {}
}
