#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `chromalog` wraps console output with colorized level tags: CSS
//! declarations where a browser-style console renders them, ANSI escape
//! pairs on terminals. A [`Logger`] owns its configuration (enable
//! switch, styling toggle, per-level style sheets, optional namespace
//! prefix, and transport choice) and dispatches each emission onto the
//! level's fixed console channel.
//!
//! # Design
//!
//! Three decisions shape the crate:
//!
//! - **Loggers are instances, not ambient state.** Configuration lives
//!   behind a lock inside each [`Logger`]; clones share it, namespace
//!   children snapshot it. Concurrent `configure` and print calls are
//!   safe.
//! - **The environment is injected.** Transport detection, color-scheme
//!   preference, and the styling verdict flow through the [`Runtime`]
//!   trait; [`HostRuntime`] probes the real host and [`StaticRuntime`]
//!   answers fixedly for tests and embedders.
//! - **Failure is not part of the vocabulary.** A disabled logger is a
//!   silent no-op, a missing style renders unstyled, an unsupported
//!   grouping primitive becomes a banner, and emission failures are
//!   swallowed. No level method returns a value.
//!
//! # Invariants
//!
//! - `error`→error channel, `warning`→warn channel, `info`→info channel,
//!   `success`/`debug`→log channel; the mapping never drifts.
//! - An explicit transport choice always wins over detection.
//! - Unstyled output is byte-identical regardless of the transport that
//!   would have been resolved.
//! - [`Logger::log`] emits even when the logger is disabled; it is the
//!   only bypass.
//!
//! # Examples
//!
//! ```
//! use chromalog::{ConfigUpdate, Logger, StaticRuntime, Transport};
//! use chromalog_core::StyleSheetUpdate;
//! use chromalog_sink::{CaptureWriter, ConsoleSink};
//!
//! let out = CaptureWriter::new();
//! let err = CaptureWriter::new();
//! let log = Logger::builder()
//!     .sink(ConsoleSink::new(out.clone(), err.clone()))
//!     .runtime(StaticRuntime::new(Transport::Node))
//!     .build();
//!
//! log.success("user registered");
//! log.error("connection refused");
//!
//! assert!(out.contents().contains("[SUCCESS]"));
//! assert!(err.contents().contains("[ERROR]"));
//!
//! // Recolor one level without touching the others.
//! log.configure(ConfigUpdate {
//!     styles: Some(StyleSheetUpdate {
//!         success: Some("color: purple;".to_owned()),
//!         ..StyleSheetUpdate::default()
//!     }),
//!     ..ConfigUpdate::default()
//! });
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` on the configuration types, so
//!   partial updates can be driven from JSON.
//! - `tracing`: [`LoggerLayer`] plus [`init_tracing`] /
//!   [`init_tracing_with_filter`], forwarding tracing events into a
//!   logger.
//!
//! # See also
//!
//! - [`chromalog_core`] for the level, style, and record primitives.
//! - [`chromalog_sink`] for the sink abstraction and capture writer.

mod builder;
mod config;
mod helpers;
mod logger;
mod macros;
mod runtime;
mod transport;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use builder::LoggerBuilder;
pub use config::{Config, ConfigUpdate};
pub use helpers::{Group, Timer};
pub use logger::Logger;
pub use runtime::{HostRuntime, Runtime, StaticRuntime};
pub use transport::{ParseTransportError, Transport, TransportChoice};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing, init_tracing_with_filter};

pub use chromalog_core::{
    ANSI_RESET, AnsiPair, AnsiSheet, AnsiSheetUpdate, Channel, CssParts, Decor, LEVELS, Level,
    ParseLevelError, Record, StyleSheet, StyleSheetUpdate,
};
pub use chromalog_sink::{CaptureWriter, ConsoleSink, LineMode, Sink};
