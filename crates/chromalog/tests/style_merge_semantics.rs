//! Integration tests for configuration merge semantics.
//!
//! Scalar fields are shallow-overwritten only when present in an update;
//! the two style sheets merge key by key so recoloring one level never
//! resets the others.

use chromalog::{
    AnsiPair, AnsiSheet, AnsiSheetUpdate, CaptureWriter, ConfigUpdate, ConsoleSink, Level, Logger,
    StaticRuntime, StyleSheet, StyleSheetUpdate, Transport,
};

fn logger() -> Logger {
    Logger::builder()
        .sink(ConsoleSink::new(CaptureWriter::new(), CaptureWriter::new()))
        .runtime(StaticRuntime::new(Transport::Node))
        .build()
}

// ============================================================================
// Deep-Merge Exception Tests
// ============================================================================

/// Verifies a one-level CSS update preserves every other level's style.
#[test]
fn css_update_preserves_unnamed_levels() {
    let logger = logger();
    let before = logger.config().styles;

    logger.configure(ConfigUpdate {
        styles: Some(StyleSheetUpdate {
            success: Some("color: purple;".to_owned()),
            ..StyleSheetUpdate::default()
        }),
        ..ConfigUpdate::default()
    });

    let after = logger.config().styles;
    assert_eq!(after.success, "color: purple;");
    assert_eq!(after.error, before.error);
    assert_eq!(after.warning, before.warning);
    assert_eq!(after.info, before.info);
    assert_eq!(after.debug, before.debug);
}

/// Verifies a one-level ANSI update preserves every other level's pair.
#[test]
fn ansi_update_preserves_unnamed_levels() {
    let logger = logger();
    let mut update = AnsiSheetUpdate::default();
    update.set(Level::Warning, AnsiPair::new("\x1b[43m", "\x1b[0m"));

    logger.configure(ConfigUpdate {
        node_styles: Some(update),
        ..ConfigUpdate::default()
    });

    let after = logger.config().node_styles;
    assert_eq!(after.warning.open(), "\x1b[43m");
    assert_eq!(after.success, AnsiSheet::palette().success);
    assert_eq!(after.error, AnsiSheet::palette().error);
}

/// Verifies successive partial updates accumulate.
#[test]
fn successive_updates_accumulate() {
    let logger = logger();

    logger.configure(ConfigUpdate {
        styles: Some(StyleSheetUpdate {
            success: Some("color: purple;".to_owned()),
            ..StyleSheetUpdate::default()
        }),
        ..ConfigUpdate::default()
    });
    logger.configure(ConfigUpdate {
        styles: Some(StyleSheetUpdate {
            info: Some("color: teal;".to_owned()),
            ..StyleSheetUpdate::default()
        }),
        ..ConfigUpdate::default()
    });

    let styles = logger.config().styles;
    assert_eq!(styles.success, "color: purple;");
    assert_eq!(styles.info, "color: teal;");
}

// ============================================================================
// Shallow Scalar Tests
// ============================================================================

/// Verifies absent scalar fields survive an unrelated update.
#[test]
fn scalar_fields_survive_unrelated_updates() {
    let logger = logger();
    logger.configure(ConfigUpdate {
        namespace: Some("api".to_owned()),
        ..ConfigUpdate::default()
    });

    logger.configure(ConfigUpdate {
        styled: Some(false),
        ..ConfigUpdate::default()
    });

    let config = logger.config();
    assert_eq!(config.namespace.as_deref(), Some("api"));
    assert!(!config.styled);
    assert!(config.enabled);
}

/// Verifies an empty update is a no-op.
#[test]
fn empty_update_changes_nothing() {
    let logger = logger();
    let before = logger.config();
    logger.configure(ConfigUpdate::default());
    assert_eq!(logger.config(), before);
}

/// Verifies unstated sheets are untouched when the other sheet updates.
#[test]
fn sheets_update_independently() {
    let logger = logger();
    logger.configure(ConfigUpdate {
        styles: Some(StyleSheetUpdate {
            error: Some("color: black;".to_owned()),
            ..StyleSheetUpdate::default()
        }),
        ..ConfigUpdate::default()
    });

    let config = logger.config();
    assert_eq!(config.node_styles, AnsiSheet::palette());
    assert_ne!(config.styles, StyleSheet::light());
}
