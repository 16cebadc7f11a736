#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `chromalog-core` provides the primitives the rest of the chromalog
//! workspace agrees on: the closed [`Level`] set with its fixed
//! [`Channel`] mapping, the per-level [`StyleSheet`]/[`AnsiSheet`] style
//! maps with their partial-update merge types, and the borrowed
//! [`Record`] value that carries one emission from the dispatcher to a
//! sink.
//!
//! # Design
//!
//! The crate holds no configuration and performs no I/O. A [`Record`]
//! borrows its namespace, styling strings, and message, so constructing
//! one is allocation-free; the two render paths (text via
//! [`Record::render_to_writer`], browser form via [`Record::css_parts`])
//! are the only places the visible output format is defined.
//!
//! # Invariants
//!
//! - The level→channel mapping is fixed; it decides which process stream
//!   or devtools filter receives a message and must not drift.
//! - A missing or empty style entry degrades to an unstyled tag, never an
//!   error.
//! - The ANSI close escape is re-emitted immediately after the tag so a
//!   style never bleeds into the caller's message.
//! - Sheet updates overwrite only the levels they name.
//!
//! # Examples
//!
//! ```
//! use chromalog_core::{AnsiSheet, Decor, Level, Record};
//!
//! let sheet = AnsiSheet::palette();
//! let pair = sheet.get(Level::Success);
//! let record = Record::new(Level::Success, format_args!("user registered"))
//!     .with_decor(Decor::Ansi {
//!         open: pair.open(),
//!         close: pair.close(),
//!     });
//!
//! let mut line = Vec::new();
//! record.render_line_to_writer(&mut line)?;
//! let line = String::from_utf8(line).unwrap();
//! assert!(line.contains("[SUCCESS]"));
//! assert!(line.ends_with("user registered\n"));
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # See also
//!
//! - `chromalog-sink` for the sink abstraction that consumes records.
//! - `chromalog` for configuration, dispatch, and transport resolution.

mod channel;
mod level;
mod record;
mod style;

pub use channel::Channel;
pub use level::{LEVELS, Level, ParseLevelError};
pub use record::{CssParts, Decor, Record};
pub use style::{
    ANSI_RESET, AnsiPair, AnsiSheet, AnsiSheetUpdate, StyleSheet, StyleSheetUpdate,
};
