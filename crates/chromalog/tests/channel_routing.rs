//! Integration tests for the fixed level-to-channel mapping.
//!
//! The mapping decides which process stream receives a message, so it is
//! part of the public contract: `error` and `warning` reach stderr,
//! everything else stdout.

use chromalog::{CaptureWriter, ConsoleSink, Logger, StaticRuntime, Transport};

fn plain_logger() -> (Logger, CaptureWriter, CaptureWriter) {
    let out = CaptureWriter::new();
    let err = CaptureWriter::new();
    let logger = Logger::builder()
        .styled(false)
        .sink(ConsoleSink::new(out.clone(), err.clone()))
        .runtime(StaticRuntime::new(Transport::Node))
        .build();
    (logger, out, err)
}

/// Verifies success, info, and debug land on the out stream.
#[test]
fn stdout_levels_reach_the_out_stream() {
    let (logger, out, err) = plain_logger();

    logger.success("a");
    logger.info("b");
    logger.debug("c");

    assert_eq!(out.contents(), "[SUCCESS] a\n[INFO] b\n[DEBUG] c\n");
    assert!(err.contents().is_empty());
}

/// Verifies warning and error land on the err stream.
#[test]
fn stderr_levels_reach_the_err_stream() {
    let (logger, out, err) = plain_logger();

    logger.warning("w");
    logger.error("e");

    assert!(out.contents().is_empty());
    assert_eq!(err.contents(), "[WARNING] w\n[ERROR] e\n");
}

/// Verifies the raw passthrough uses the general log channel.
#[test]
fn raw_passthrough_uses_stdout() {
    let (logger, out, err) = plain_logger();

    logger.log("raw");

    assert_eq!(out.contents(), "raw\n");
    assert!(err.contents().is_empty());
}
