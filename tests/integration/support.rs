//! Shared test doubles for the block's collaborator seams.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use line_notify_block::{
    DispatchLogger, HttpTransport, ToastSink, TransportError, WireResponse,
};

/// What a scripted transport call should do.
pub enum ScriptedCall {
    Respond { status: u16, body: &'static str },
    /// Never resolve; the dispatch-side timeout must bound the call.
    Hang,
    /// Wait until released, then respond. Used to force out-of-order
    /// completion across overlapping invocations.
    RespondAfterRelease {
        rx: Mutex<Option<tokio::sync::oneshot::Receiver<()>>>,
        status: u16,
        body: &'static str,
    },
    /// Respond immediately and release a waiting call.
    RespondAndRelease {
        tx: Mutex<Option<tokio::sync::oneshot::Sender<()>>>,
        status: u16,
        body: &'static str,
    },
}

/// Transport that plays back a per-call script in invocation order.
pub struct ScriptedTransport {
    calls: Vec<ScriptedCall>,
    next: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new(calls: Vec<ScriptedCall>) -> Self {
        Self {
            calls,
            next: AtomicUsize::new(0),
        }
    }

    pub fn responding(status: u16, body: &'static str) -> Self {
        Self::new(vec![ScriptedCall::Respond { status, body }])
    }

    pub fn hanging() -> Self {
        Self::new(vec![ScriptedCall::Hang])
    }

    pub fn call_count(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn post_form(
        &self,
        _url: &str,
        _bearer_token: &str,
        _form: &[(&str, &str)],
    ) -> Result<WireResponse, TransportError> {
        let index = self.next.fetch_add(1, Ordering::SeqCst);
        match self
            .calls
            .get(index)
            .expect("transport called more times than scripted")
        {
            ScriptedCall::Respond { status, body } => Ok(WireResponse {
                status: *status,
                body: body.to_string(),
            }),
            ScriptedCall::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            ScriptedCall::RespondAfterRelease { rx, status, body } => {
                let rx = rx.lock().unwrap().take().expect("release receiver taken");
                let _ = rx.await;
                Ok(WireResponse {
                    status: *status,
                    body: body.to_string(),
                })
            }
            ScriptedCall::RespondAndRelease { tx, status, body } => {
                if let Some(tx) = tx.lock().unwrap().take() {
                    let _ = tx.send(());
                }
                Ok(WireResponse {
                    status: *status,
                    body: body.to_string(),
                })
            }
        }
    }
}

/// Logger recording every emission, in order.
#[derive(Default)]
pub struct RecordingLogger {
    pub infos: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn info_count(&self) -> usize {
        self.infos.lock().unwrap().len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }
}

impl DispatchLogger for RecordingLogger {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str, cause: &str) {
        self.errors
            .lock()
            .unwrap()
            .push(format!("{message}: {cause}"));
    }
}

/// Toast sink recording shown text.
#[derive(Default)]
pub struct RecordingToast {
    pub shown: Mutex<Vec<String>>,
}

impl ToastSink for RecordingToast {
    fn show(&self, text: &str) {
        self.shown.lock().unwrap().push(text.to_string());
    }
}
