//! LINE Notify Block Extension
//!
//! A custom command block for block-based visual programming runtimes:
//! "send LINE notification with message". The crate provides:
//! - The gallery descriptor the host's extension library renders
//! - Locale-aware block metadata consumed by the host's block renderer
//! - The async dispatch operation performing one bounded webhook POST per
//!   invocation, with failures contained at the operation boundary
//!
//! The host runtime, the gallery UI, and icon packaging are external
//! collaborators; the HTTP transport, logger, and toast surface are trait
//! seams the host (or tests) can replace.

pub mod block;
pub mod config;
pub mod descriptor;
pub mod http;
pub mod locale;
pub mod logging;
pub mod toast;

// ── Block ──────────────────────────────────────────────────────────────
pub use block::{
    BlockArgs, BlockInfo, DispatchError, DispatchReceipt, DispatchStatus, NotificationBlock,
};

// ── Gallery Descriptor ─────────────────────────────────────────────────
pub use descriptor::{ExtensionFlags, GalleryDescriptor, EXTENSION_ID};

// ── Locale ─────────────────────────────────────────────────────────────
pub use locale::{LocaleBundle, LocaleCode};

// ── Configuration ──────────────────────────────────────────────────────
pub use config::{ConfigError, NotifyConfig};

// ── Collaborator Seams ─────────────────────────────────────────────────
pub use http::{HttpTransport, ReqwestTransport, TransportError, WireResponse};
pub use logging::{DispatchLogger, TracingLogger};
pub use toast::{LogToast, NoopToast, ToastSink};
