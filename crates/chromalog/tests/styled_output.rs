//! Integration tests for styled terminal output.
//!
//! On ANSI transports the visible tag is wrapped in the level's escape
//! pair, with the reset re-emitted immediately after the tag so styling
//! never bleeds into the caller's message.

use chromalog::{
    ANSI_RESET, AnsiPair, AnsiSheetUpdate, CaptureWriter, ConfigUpdate, ConsoleSink, Level, Logger,
    StaticRuntime, StyleSheet, Transport,
};

fn styled_logger(runtime: StaticRuntime) -> (Logger, CaptureWriter, CaptureWriter) {
    let out = CaptureWriter::new();
    let err = CaptureWriter::new();
    let logger = Logger::builder()
        .sink(ConsoleSink::new(out.clone(), err.clone()))
        .runtime(runtime)
        .build();
    (logger, out, err)
}

/// Verifies the default success emission: general channel, default pair,
/// tag and message both present.
#[test]
fn default_success_emission_is_styled_on_the_log_channel() {
    let (logger, out, err) = styled_logger(StaticRuntime::new(Transport::Node));

    logger.success("ok");

    let output = out.contents();
    assert_eq!(output, "\x1b[1;32m[SUCCESS]\x1b[0m ok\n");
    assert!(err.contents().is_empty());
}

/// Verifies the reset escape sits between the tag and the message.
#[test]
fn reset_is_emitted_before_the_message() {
    let (logger, _out, err) = styled_logger(StaticRuntime::new(Transport::Node));

    logger.error("boom");

    let output = err.contents();
    let reset = output.find(ANSI_RESET).expect("reset present");
    let message = output.find("boom").expect("message present");
    assert!(output.find("[ERROR]").expect("tag present") < reset);
    assert!(reset < message);
}

/// Verifies an empty pair renders the tag unstyled rather than failing.
#[test]
fn empty_pair_degrades_to_unstyled_output() {
    let (logger, out, _err) = styled_logger(StaticRuntime::new(Transport::Node));
    let mut update = AnsiSheetUpdate::default();
    update.set(Level::Debug, AnsiPair::empty());
    logger.configure(ConfigUpdate {
        node_styles: Some(update),
        ..ConfigUpdate::default()
    });

    logger.debug("bare");

    assert_eq!(out.contents(), "[DEBUG] bare\n");
}

/// Verifies the react-native transport styles with ANSI pairs too.
#[test]
fn react_native_transport_uses_ansi_pairs() {
    let (logger, out, _err) = styled_logger(StaticRuntime::new(Transport::ReactNative));

    logger.success("mobile");

    assert_eq!(out.contents(), "\x1b[1;32m[SUCCESS]\x1b[0m mobile\n");
}

/// Verifies a dark-preferring probe selects the dark CSS palette.
#[test]
fn dark_preference_selects_the_dark_palette() {
    let (logger, _out, _err) =
        styled_logger(StaticRuntime::new(Transport::Node).with_dark(true));
    assert_eq!(logger.config().styles, StyleSheet::dark());
}

/// Verifies a probe that rejects styling yields unstyled output by
/// default.
#[test]
fn style_rejecting_probe_defaults_to_plain_output() {
    let (logger, out, _err) =
        styled_logger(StaticRuntime::new(Transport::Node).with_style(false));

    logger.info("piped");

    assert_eq!(out.contents(), "[INFO] piped\n");
}

/// Verifies a namespaced styled tag is wrapped as a whole.
#[test]
fn namespace_is_wrapped_inside_the_escape_pair() {
    let (logger, out, _err) = styled_logger(StaticRuntime::new(Transport::Node));
    let scoped = logger.namespace("db");

    scoped.success("saved");

    assert_eq!(out.contents(), "\x1b[1;32m[db] [SUCCESS]\x1b[0m saved\n");
}
