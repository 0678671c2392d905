//! Block Invocation Types
//!
//! Per-invocation values and the dispatch error taxonomy. A
//! `NotificationRequest` is built fresh for every call and discarded after
//! response handling; the receipt is the only record of the outcome.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::http::TransportError;

/// Arguments the host passes when the block is invoked. The message is
/// transmitted as-is; no length or content validation is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockArgs {
    pub message: String,
}

/// Ephemeral request value, one per dispatch.
#[derive(Clone)]
pub struct NotificationRequest {
    pub endpoint: String,
    pub auth_token: String,
    pub message: String,
    pub timeout_ms: u64,
}

impl fmt::Debug for NotificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationRequest")
            .field("endpoint", &self.endpoint)
            .field("auth_token", &"<redacted>")
            .field("message", &self.message)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Why a dispatch failed. Every variant is contained at the operation
/// boundary — logged and folded into the receipt, never thrown to the
/// host.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The webhook answered with a non-success status.
    #[error("notification rejected: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The call never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The timeout budget elapsed before the call settled.
    #[error("notification timed out after {timeout_ms}ms")]
    TimedOut { timeout_ms: u64 },
}

/// Terminal state of one dispatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DispatchStatus {
    Succeeded,
    Failed,
}

impl fmt::Display for DispatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Outcome record returned by `send_notification`. Hosts that only need
/// fire-and-forget semantics can ignore it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchReceipt {
    pub status: DispatchStatus,
    /// Response body text on success.
    pub response_body: Option<String>,
    /// Failure description on error.
    pub error: Option<String>,
    pub latency_ms: u64,
    pub timestamp: String,
}

impl DispatchReceipt {
    pub fn succeeded(response_body: String, latency_ms: u64) -> Self {
        Self {
            status: DispatchStatus::Succeeded,
            response_body: Some(response_body),
            error: None,
            latency_ms,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn failed(error: &DispatchError, latency_ms: u64) -> Self {
        Self {
            status: DispatchStatus::Failed,
            response_body: None,
            error: Some(error.to_string()),
            latency_ms,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == DispatchStatus::Succeeded
    }
}
