//! Locale Resolution
//!
//! Fixed translation table for the block's user-visible strings, keyed by
//! locale code. Resolution happens once, at block construction: the host's
//! active locale is matched against the supported set and an unrecognized
//! code falls back to English wholesale (never per-field).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Locale codes the block ships translations for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    En,
    Ja,
    JaHira,
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Ja => write!(f, "ja"),
            Self::JaHira => write!(f, "ja-Hira"),
        }
    }
}

impl LocaleCode {
    /// Parse from the host's locale string representation.
    pub fn from_str_value(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Self::En),
            "ja" => Some(Self::Ja),
            "ja-Hira" => Some(Self::JaHira),
            _ => None,
        }
    }

    /// Resolve the host's reported locale, falling back to `En` for
    /// anything outside the supported set.
    pub fn resolve(s: &str) -> Self {
        Self::from_str_value(s).unwrap_or(Self::En)
    }

    /// All supported locale codes.
    pub fn all_variants() -> Vec<Self> {
        vec![Self::En, Self::Ja, Self::JaHira]
    }
}

/// The block's translated strings for one locale.
///
/// Every supported locale defines all five fields; there is no partial
/// entry, so fallback swaps the whole bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleBundle {
    /// Block label template with the `[MESSAGE]` argument placeholder.
    pub send_block_text: &'static str,
    /// Default value shown in the message argument slot.
    pub send_block_default_value: &'static str,
    /// Prompt asking the user for their LINE token.
    pub token_prompt_text: &'static str,
    /// Shown when a notification was delivered.
    pub success_text: &'static str,
    /// Shown when a notification could not be delivered.
    pub failure_text: &'static str,
}

const EN: LocaleBundle = LocaleBundle {
    send_block_text: "send LINE notification with message [MESSAGE]",
    send_block_default_value: "Hello, Scratch!",
    token_prompt_text: "Enter your LINE token",
    success_text: "Notification sent successfully!",
    failure_text: "Failed to send notification",
};

const JA: LocaleBundle = LocaleBundle {
    send_block_text: "[MESSAGE]というメッセージでLINE通知を送る",
    send_block_default_value: "こんにちは、スクラッチ！",
    token_prompt_text: "LINEのトークンを入力してください",
    success_text: "通知を送信しました！",
    failure_text: "通知の送信に失敗しました",
};

const JA_HIRA: LocaleBundle = LocaleBundle {
    send_block_text: "[MESSAGE]というメッセージでLINEつうちをおくる",
    send_block_default_value: "こんにちは、スクラッチ！",
    token_prompt_text: "LINEのとーくんをにゅうりょくしてください",
    success_text: "つうちをおくりました！",
    failure_text: "つうちのおくりにしっぱいしました",
};

impl LocaleBundle {
    /// Look up the bundle for a locale code.
    pub fn for_locale(code: LocaleCode) -> &'static LocaleBundle {
        match code {
            LocaleCode::En => &EN,
            LocaleCode::Ja => &JA,
            LocaleCode::JaHira => &JA_HIRA,
        }
    }

    /// Resolve a host locale string straight to its bundle.
    pub fn for_host_locale(s: &str) -> &'static LocaleBundle {
        Self::for_locale(LocaleCode::resolve(s))
    }
}
