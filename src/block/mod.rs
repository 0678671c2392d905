//! Notification Block
//!
//! Block metadata, invocation types, and the dispatch implementation.

pub mod metadata;
pub mod notification;
pub mod types;

pub use metadata::{BlockInfo, BLOCK_ID, SEND_OPCODE};
pub use notification::NotificationBlock;
pub use types::*;
