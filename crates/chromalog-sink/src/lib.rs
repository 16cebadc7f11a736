#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `chromalog-sink` defines where rendered emissions go. The [`Sink`]
//! trait receives each [`chromalog_core::Record`] together with its
//! resolved [`chromalog_core::Channel`]; [`ConsoleSink`] is the standard
//! implementation, splitting channels across two [`std::io::Write`]
//! targets the way server-side consoles split the four console methods
//! across stdout and stderr.
//!
//! # Design
//!
//! Sinks stay dumb: the dispatcher has already decided the
//! channel and styling before a record arrives, so a sink only renders
//! and routes. Grouping hooks carry defaults (banner on open, no-op on
//! close) so only destinations with a native grouping primitive override
//! them. [`CaptureWriter`] is the shared-buffer writer used throughout
//! the workspace's tests and available to embedders that need to inspect
//! output.
//!
//! # Invariants
//!
//! - `Log` and `Info` channels reach the out writer, `Warn` and `Error`
//!   the err writer.
//! - A sink never reinterprets a record's styling; CSS decors degrade to
//!   plain text on byte writers.
//! - [`LineMode::WithNewline`] mirrors the console default of one
//!   emission per line.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writers. Higher layers decide whether to propagate or
//! swallow them; the logger in `chromalog` swallows, matching console
//! semantics.
//!
//! # Examples
//!
//! Capture both streams and inspect the split:
//!
//! ```
//! use chromalog_core::{Level, Record};
//! use chromalog_sink::{CaptureWriter, ConsoleSink, Sink};
//!
//! let out = CaptureWriter::new();
//! let err = CaptureWriter::new();
//! let mut sink = ConsoleSink::new(out.clone(), err.clone());
//!
//! for (level, text) in [(Level::Info, "fetching"), (Level::Error, "refused")] {
//!     sink.emit(level.channel(), &Record::new(level, format_args!("{text}")))?;
//! }
//!
//! assert_eq!(out.contents(), "[INFO] fetching\n");
//! assert_eq!(err.contents(), "[ERROR] refused\n");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # See also
//!
//! - [`chromalog_core`] for record construction and rendering.
//! - `chromalog` for the logger that drives sinks.

mod capture;
mod line_mode;
mod sink;

pub use capture::CaptureWriter;
pub use line_mode::LineMode;
pub use sink::{ConsoleSink, Sink};
