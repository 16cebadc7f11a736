use std::fmt;
use std::io::{self, Write};

use chromalog_core::{Channel, Record};

use crate::line_mode::LineMode;

/// Destination for rendered emissions.
///
/// A sink receives each [`Record`] together with the [`Channel`] the
/// dispatcher resolved for it, plus raw passthrough writes that bypass
/// tag formatting entirely. Implementations decide how channels map onto
/// actual outputs; [`ConsoleSink`] splits them across two byte writers.
///
/// The grouping hooks exist for destinations with a native grouping
/// primitive (browser consoles, structured viewers). The defaults degrade
/// to a plain delimited banner on open and a no-op on close, so plain
/// text destinations need not implement them.
pub trait Sink {
    /// Writes a single rendered emission on the given channel.
    fn emit(&mut self, channel: Channel, record: &Record<'_>) -> io::Result<()>;

    /// Writes preformatted text on the given channel, without any tag,
    /// namespace, or styling.
    fn emit_raw(&mut self, channel: Channel, args: fmt::Arguments<'_>) -> io::Result<()>;

    /// Flushes any buffered output.
    fn flush(&mut self) -> io::Result<()>;

    /// Reports whether this sink has a native grouping primitive.
    ///
    /// When `false` (the default), [`group_open`](Self::group_open) prints
    /// a banner and [`group_close`](Self::group_close) does nothing.
    fn supports_grouping(&self) -> bool {
        false
    }

    /// Opens a visual group. The default prints a plain delimited banner
    /// through the log channel.
    fn group_open(&mut self, title: &str) -> io::Result<()> {
        self.emit_raw(Channel::Log, format_args!("---- {title} ----"))
    }

    /// Closes the most recently opened group. The default is a no-op.
    fn group_close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that routes channels across two byte writers.
///
/// `Log` and `Info` reach the `out` writer, `Warn` and `Error` the `err`
/// writer, matching the console-to-stream split on server-side runtimes.
/// Records are rendered in their canonical text form; a CSS decor
/// degrades to plain text here, since byte writers cannot interpret CSS.
///
/// # Examples
///
/// Route a warning onto the error writer:
///
/// ```
/// use chromalog_core::{Channel, Level, Record};
/// use chromalog_sink::{ConsoleSink, Sink};
///
/// let mut sink = ConsoleSink::new(Vec::new(), Vec::new());
/// let record = Record::new(Level::Warning, format_args!("token expires soon"));
/// sink.emit(Level::Warning.channel(), &record)?;
///
/// let (out, err, _) = sink.into_parts();
/// assert!(out.is_empty());
/// assert_eq!(err, b"[WARNING] token expires soon\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ConsoleSink<O, E> {
    out: O,
    err: E,
    line_mode: LineMode,
}

impl<O, E> ConsoleSink<O, E> {
    /// Creates a sink that appends a newline after each emission.
    #[must_use]
    pub fn new(out: O, err: E) -> Self {
        Self::with_line_mode(out, err, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(out: O, err: E, line_mode: LineMode) -> Self {
        Self {
            out,
            err,
            line_mode,
        }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the out and err writers.
    #[must_use]
    pub const fn writers(&self) -> (&O, &E) {
        (&self.out, &self.err)
    }

    /// Mutably borrows the out and err writers.
    pub const fn writers_mut(&mut self) -> (&mut O, &mut E) {
        (&mut self.out, &mut self.err)
    }

    /// Consumes the sink and returns the writers and line mode.
    #[must_use]
    pub fn into_parts(self) -> (O, E, LineMode) {
        (self.out, self.err, self.line_mode)
    }
}

impl ConsoleSink<io::Stdout, io::Stderr> {
    /// The standard console: process stdout and stderr with newline
    /// termination.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl Default for ConsoleSink<io::Stdout, io::Stderr> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<O, E> ConsoleSink<O, E>
where
    O: Write,
    E: Write,
{
    fn stream(&mut self, channel: Channel) -> &mut dyn Write {
        if channel.is_stderr() {
            &mut self.err
        } else {
            &mut self.out
        }
    }
}

impl<O, E> Sink for ConsoleSink<O, E>
where
    O: Write,
    E: Write,
{
    fn emit(&mut self, channel: Channel, record: &Record<'_>) -> io::Result<()> {
        let line_mode = self.line_mode;
        let writer = self.stream(channel);
        if line_mode.append_newline() {
            record.render_line_to_writer(writer)
        } else {
            record.render_to_writer(writer)
        }
    }

    fn emit_raw(&mut self, channel: Channel, args: fmt::Arguments<'_>) -> io::Result<()> {
        let line_mode = self.line_mode;
        let writer = self.stream(channel);
        if line_mode.append_newline() {
            writeln!(writer, "{args}")
        } else {
            write!(writer, "{args}")
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}
