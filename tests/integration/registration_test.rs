//! Registration Integration Tests
//!
//! What the host sees at load time: the gallery descriptor and the
//! block metadata, across every supported locale.

use std::sync::Arc;

use line_notify_block::{
    GalleryDescriptor, LocaleBundle, LocaleCode, NotificationBlock, NotifyConfig,
};

use crate::support::{RecordingLogger, RecordingToast, ScriptedTransport};

fn block_for_locale(locale: &str) -> NotificationBlock {
    NotificationBlock::with_collaborators(
        NotifyConfig::with_token("integration-test-token"),
        locale,
        Arc::new(ScriptedTransport::responding(200, "OK")),
        Arc::new(RecordingLogger::default()),
        Arc::new(RecordingToast::default()),
    )
}

// ============================================================================
// Locale Resolution
// ============================================================================

#[test]
fn test_every_supported_locale_yields_its_table_entry() {
    for (code_str, code) in [
        ("en", LocaleCode::En),
        ("ja", LocaleCode::Ja),
        ("ja-Hira", LocaleCode::JaHira),
    ] {
        let block = block_for_locale(code_str);
        assert_eq!(block.locale(), code);
        assert_eq!(block.bundle(), LocaleBundle::for_locale(code));

        let bundle = block.bundle();
        assert!(!bundle.send_block_text.is_empty());
        assert!(!bundle.send_block_default_value.is_empty());
        assert!(!bundle.token_prompt_text.is_empty());
        assert!(!bundle.success_text.is_empty());
        assert!(!bundle.failure_text.is_empty());
    }
}

#[test]
fn test_unsupported_locale_equals_en_entry_exactly() {
    for unsupported in ["fr", "zh-cn", "JA", ""] {
        let block = block_for_locale(unsupported);
        assert_eq!(block.locale(), LocaleCode::En);
        assert_eq!(block.bundle(), LocaleBundle::for_locale(LocaleCode::En));
    }
}

#[test]
fn test_block_label_is_localized() {
    assert_eq!(
        block_for_locale("ja").info().blocks[0].text,
        "[MESSAGE]というメッセージでLINE通知を送る"
    );
    assert_eq!(
        block_for_locale("ja-Hira").info().blocks[0].text,
        "[MESSAGE]というメッセージでLINEつうちをおくる"
    );
    assert_eq!(
        block_for_locale("en").info().blocks[0].text,
        "send LINE notification with message [MESSAGE]"
    );
}

// ============================================================================
// Block Metadata
// ============================================================================

#[test]
fn test_info_is_idempotent() {
    let block = block_for_locale("ja");
    assert_eq!(block.info(), block.info());
}

#[test]
fn test_info_serializes_to_host_wire_shape() {
    let info = block_for_locale("en").info();
    let json = serde_json::to_value(&info).unwrap();

    assert_eq!(json["id"], "lineNotifications");
    assert_eq!(json["name"], "lineNotifications");
    assert!(json["blockIconURI"]
        .as_str()
        .unwrap()
        .starts_with("data:image/png;base64,"));

    let blocks = json["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0]["opcode"], "sendLineNotification");
    assert_eq!(blocks[0]["blockType"], "command");

    let argument = &blocks[0]["arguments"]["MESSAGE"];
    assert_eq!(argument["type"], "string");
    assert_eq!(argument["defaultValue"], "Hello, Scratch!");

    // Redesign: no empty menus placeholder on the wire.
    assert!(json.get("menus").is_none());
}

// ============================================================================
// Gallery Descriptor
// ============================================================================

#[test]
fn test_default_descriptor_registers_cleanly() {
    let descriptor = GalleryDescriptor::default();
    assert!(descriptor.validate().is_ok());
    assert_eq!(descriptor.extension_id, "scratch2linenotify");
    assert!(descriptor.flags.internet_connection_required);
    assert!(!descriptor.flags.bluetooth_required);
}

#[test]
fn test_descriptor_translations_cover_only_supported_locales() {
    let descriptor = GalleryDescriptor::default();
    for locale in descriptor.translation_map.keys() {
        assert!(LocaleCode::from_str_value(locale).is_some(), "{locale}");
    }
}

#[test]
fn test_descriptor_wire_shape() {
    let descriptor = GalleryDescriptor::default();
    let json = serde_json::to_value(&descriptor).unwrap();

    assert_eq!(json["extensionId"], "scratch2linenotify");
    assert_eq!(json["featured"], true);
    assert_eq!(json["internetConnectionRequired"], true);
    assert!(json["translationMap"]["ja"]
        .as_object()
        .unwrap()
        .contains_key("gui.extension.scratch2linenotify.description"));
}
