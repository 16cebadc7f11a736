//! Integration tests for the master enable switch.
//!
//! These tests verify that a disabled logger emits nothing through any
//! level method, that the raw passthrough bypasses the switch, and that
//! disabling and re-enabling leaves the rest of the configuration
//! untouched.

use chromalog::{
    CaptureWriter, ConfigUpdate, ConsoleSink, Logger, StaticRuntime, Transport, TransportChoice,
};

fn capture_logger() -> (Logger, CaptureWriter, CaptureWriter) {
    let out = CaptureWriter::new();
    let err = CaptureWriter::new();
    let logger = Logger::builder()
        .sink(ConsoleSink::new(out.clone(), err.clone()))
        .runtime(StaticRuntime::new(Transport::Node))
        .build();
    (logger, out, err)
}

// ============================================================================
// Silent No-Op Tests
// ============================================================================

/// Verifies every level method produces zero output while disabled.
#[test]
fn disabled_logger_emits_nothing_on_any_level() {
    let (logger, out, err) = capture_logger();
    logger.disable();

    logger.success("s");
    logger.error("e");
    logger.warning("w");
    logger.info("i");
    logger.debug("d");

    assert!(out.contents().is_empty());
    assert!(err.contents().is_empty());
}

/// Verifies `disable()` is equivalent to a partial update of `enabled`.
#[test]
fn disable_matches_configure_enabled_false() {
    let (logger, out, _err) = capture_logger();
    logger.configure(ConfigUpdate {
        enabled: Some(false),
        ..ConfigUpdate::default()
    });

    logger.success("hidden");
    assert!(out.contents().is_empty());
    assert!(!logger.is_enabled());
}

// ============================================================================
// Raw Passthrough Tests
// ============================================================================

/// Verifies the raw passthrough emits even while the logger is disabled.
#[test]
fn log_bypasses_the_enabled_switch() {
    let (logger, out, err) = capture_logger();
    logger.disable();

    logger.log("always visible");

    assert_eq!(out.contents(), "always visible\n");
    assert!(err.contents().is_empty());
}

/// Verifies the raw passthrough carries no tag, namespace, or styling.
#[test]
fn log_skips_all_formatting() {
    let (logger, out, _err) = capture_logger();
    let scoped = logger.namespace("api");

    scoped.log("bare");

    assert_eq!(out.contents(), "bare\n");
}

// ============================================================================
// Round-Trip Tests
// ============================================================================

/// Verifies disable/enable round-trips every other configuration field.
#[test]
fn disable_then_enable_restores_prior_configuration() {
    let (logger, _out, _err) = capture_logger();
    logger.configure(ConfigUpdate {
        namespace: Some("jobs".to_owned()),
        transport: Some(TransportChoice::ReactNative),
        ..ConfigUpdate::default()
    });
    let before = logger.config();

    logger.disable();
    logger.enable();

    let after = logger.config();
    assert!(after.enabled);
    assert_eq!(after.styled, before.styled);
    assert_eq!(after.styles, before.styles);
    assert_eq!(after.node_styles, before.node_styles);
    assert_eq!(after.namespace, before.namespace);
    assert_eq!(after.transport, before.transport);
}

/// Verifies emission resumes after re-enabling.
#[test]
fn reenabled_logger_emits_again() {
    let (logger, out, _err) = capture_logger();
    logger.disable();
    logger.info("dropped");
    logger.enable();
    logger.configure(ConfigUpdate {
        styled: Some(false),
        ..ConfigUpdate::default()
    });
    logger.info("kept");

    assert_eq!(out.contents(), "[INFO] kept\n");
}
