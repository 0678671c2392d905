//! Notification Block
//!
//! The one command block this extension declares: "send LINE notification
//! with message". Construction resolves the host locale once and caches
//! the translation bundle; `info()` produces the render-ready metadata;
//! `send_notification` performs one bounded webhook POST per invocation.
//!
//! Failure containment: the dispatch result always settles. Rejected
//! responses, transport failures, and timeouts are logged and folded into
//! the returned receipt — nothing propagates to the host, so a flaky
//! network can never crash or hang the user's program.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::NotifyConfig;
use crate::http::{HttpTransport, ReqwestTransport};
use crate::locale::{LocaleBundle, LocaleCode};
use crate::logging::{DispatchLogger, TracingLogger};
use crate::toast::{LogToast, ToastSink};

use super::metadata::{
    ArgumentSpec, ArgumentType, BlockDefinition, BlockInfo, BlockType, BLOCK_ICON_URI, BLOCK_ID,
    MESSAGE_ARGUMENT, SEND_OPCODE,
};
use super::types::{BlockArgs, DispatchError, DispatchReceipt, NotificationRequest};

/// Form field carrying the notification text on the wire.
const MESSAGE_FIELD: &str = "message";

/// The "send LINE notification" command block.
///
/// Holds only read-only state after construction (config, resolved
/// locale bundle, collaborator handles), so overlapping invocations need
/// no locking — each dispatch owns its request and settles independently.
pub struct NotificationBlock {
    locale: LocaleCode,
    bundle: &'static LocaleBundle,
    config: NotifyConfig,
    transport: Arc<dyn HttpTransport>,
    logger: Arc<dyn DispatchLogger>,
    toast: Arc<dyn ToastSink>,
}

impl NotificationBlock {
    /// Construct with production collaborators: reqwest transport,
    /// tracing logger, log-backed toast sink.
    pub fn new(config: NotifyConfig, host_locale: &str) -> Self {
        Self::with_collaborators(
            config,
            host_locale,
            Arc::new(ReqwestTransport::new()),
            Arc::new(TracingLogger),
            Arc::new(LogToast),
        )
    }

    /// Construct with explicit collaborators.
    pub fn with_collaborators(
        config: NotifyConfig,
        host_locale: &str,
        transport: Arc<dyn HttpTransport>,
        logger: Arc<dyn DispatchLogger>,
        toast: Arc<dyn ToastSink>,
    ) -> Self {
        let locale = LocaleCode::resolve(host_locale);
        Self {
            locale,
            bundle: LocaleBundle::for_locale(locale),
            config,
            transport,
            logger,
            toast,
        }
    }

    /// The locale resolved at construction.
    pub fn locale(&self) -> LocaleCode {
        self.locale
    }

    /// The cached translation bundle.
    pub fn bundle(&self) -> &'static LocaleBundle {
        self.bundle
    }

    /// Render-ready block metadata for the host's registration pass.
    /// Pure and idempotent — no I/O, stable across calls.
    pub fn info(&self) -> BlockInfo {
        BlockInfo {
            id: BLOCK_ID.to_string(),
            name: BLOCK_ID.to_string(),
            block_icon_uri: BLOCK_ICON_URI.to_string(),
            blocks: vec![BlockDefinition {
                opcode: SEND_OPCODE.to_string(),
                block_type: BlockType::Command,
                text: self.bundle.send_block_text.to_string(),
                arguments: HashMap::from([(
                    MESSAGE_ARGUMENT.to_string(),
                    ArgumentSpec {
                        argument_type: ArgumentType::String,
                        default_value: self.bundle.send_block_default_value.to_string(),
                    },
                )]),
            }],
        }
    }

    /// Send one notification. Always settles; the receipt records the
    /// outcome. Exactly one log emission per invocation — info on
    /// success, error on failure — plus one toast.
    pub async fn send_notification(&self, args: BlockArgs) -> DispatchReceipt {
        let request = NotificationRequest {
            endpoint: self.config.endpoint_url.clone(),
            auth_token: self.config.access_token.clone(),
            message: args.message,
            timeout_ms: self.config.timeout_ms,
        };

        let start = Instant::now();
        let result = self.dispatch(&request).await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(body) => {
                self.logger
                    .info(&format!("LINE notification sent: {}", body));
                self.toast.show(self.bundle.success_text);
                DispatchReceipt::succeeded(body, latency_ms)
            }
            Err(err) => {
                self.logger.error(
                    &format!("Failed to send LINE notification: {}", request.message),
                    &err.to_string(),
                );
                self.toast.show(self.bundle.failure_text);
                DispatchReceipt::failed(&err, latency_ms)
            }
        }
    }

    /// Perform the webhook call under the timeout budget.
    async fn dispatch(&self, request: &NotificationRequest) -> Result<String, DispatchError> {
        let form = [(MESSAGE_FIELD, request.message.as_str())];
        let call = self
            .transport
            .post_form(&request.endpoint, &request.auth_token, &form);

        let response = match tokio::time::timeout(
            Duration::from_millis(request.timeout_ms),
            call,
        )
        .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => {
                return Err(DispatchError::TimedOut {
                    timeout_ms: request.timeout_ms,
                })
            }
        };

        if !response.is_success() {
            return Err(DispatchError::Rejected {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }
}

impl std::fmt::Debug for NotificationBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationBlock")
            .field("locale", &self.locale)
            .field("config", &self.config)
            .finish()
    }
}
