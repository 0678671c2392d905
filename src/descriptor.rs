//! Extension Gallery Descriptor
//!
//! The static record the host's extension gallery renders: identity, icon
//! references, localized description, capability flags, and per-locale
//! translation strings. Pure data — the host validates and registers it;
//! nothing here performs I/O.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::locale::LocaleCode;

/// Stable machine identifier for the extension.
pub const EXTENSION_ID: &str = "scratch2linenotify";

/// Message key the gallery uses for the localized description.
const DESCRIPTION_KEY: &str = "gui.extension.scratch2linenotify.description";

/// Capability flags the gallery uses for filtering and badges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionFlags {
    pub featured: bool,
    pub disabled: bool,
    pub bluetooth_required: bool,
    pub internet_connection_required: bool,
}

/// Render-ready gallery entry for the extension.
///
/// Serialized field names follow the host gallery's wire format
/// (camelCase), matching what its loader expects at registration time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryDescriptor {
    /// Display name shown in the gallery.
    pub name: String,
    /// Stable unique extension id.
    pub extension_id: String,
    /// Where the host loads the extension from.
    pub extension_url: String,
    /// Comma-separated collaborator credits.
    pub collaborator: String,
    /// Tile icon asset reference.
    pub icon_url: String,
    /// Inset icon asset reference.
    pub inset_icon_url: String,
    /// Fallback description when no translation matches.
    pub description: String,
    #[serde(flatten)]
    pub flags: ExtensionFlags,
    /// Link to the extension's documentation.
    pub help_link: String,
    /// Locale code -> (message key -> translated string).
    pub translation_map: HashMap<String, HashMap<String, String>>,
}

impl GalleryDescriptor {
    /// Shape check the host applies before registration: a stable id,
    /// network capability declared, and translations only for locales the
    /// host's negotiation can produce.
    pub fn validate(&self) -> Result<(), String> {
        if self.extension_id.is_empty() {
            return Err("extension id must not be empty".to_string());
        }
        if self.name.is_empty() {
            return Err("extension name must not be empty".to_string());
        }
        if !self.flags.internet_connection_required {
            return Err(
                "notification dispatch performs network I/O; internetConnectionRequired must be set"
                    .to_string(),
            );
        }
        if self.flags.bluetooth_required {
            return Err("extension declares no radio usage".to_string());
        }
        for locale in self.translation_map.keys() {
            if LocaleCode::from_str_value(locale).is_none() {
                return Err(format!("unsupported translation locale: {locale}"));
            }
        }
        Ok(())
    }
}

impl Default for GalleryDescriptor {
    fn default() -> Self {
        let mut translation_map = HashMap::new();
        translation_map.insert(
            "ja".to_string(),
            HashMap::from([(
                DESCRIPTION_KEY.to_string(),
                "LINE通知を送る。".to_string(),
            )]),
        );
        translation_map.insert(
            "ja-Hira".to_string(),
            HashMap::from([(
                DESCRIPTION_KEY.to_string(),
                "LINEつうちをおくる。".to_string(),
            )]),
        );

        Self {
            name: EXTENSION_ID.to_string(),
            extension_id: EXTENSION_ID.to_string(),
            extension_url: "https://tregu148.github.io/scratch2linenotify.mjs".to_string(),
            collaborator: "tregu148,ichiroc".to_string(),
            icon_url: "scratch2linenotify.png".to_string(),
            inset_icon_url: "scratch2linenotify-small.png".to_string(),
            description: "scratch2linenotify Blocks.".to_string(),
            flags: ExtensionFlags {
                featured: true,
                disabled: false,
                bluetooth_required: false,
                internet_connection_required: true,
            },
            help_link: "https://github.com/tregu148/scratch2linenotify/".to_string(),
            translation_map,
        }
    }
}
