use std::fmt;
use std::io;

use crate::level::Level;

/// Styling decision attached to a single emission.
///
/// The dispatcher computes the decor once per emission from the active
/// configuration and transport; the record only carries the outcome. The
/// borrowed escape and declaration strings live in the configuration for
/// the duration of the emission.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decor<'a> {
    /// No styling at all.
    Plain,
    /// Wrap the visible tag in an ANSI escape pair. Empty strings render
    /// identically to [`Decor::Plain`].
    Ansi {
        /// Opening escape, written before the tag.
        open: &'a str,
        /// Closing escape, re-emitted immediately after the tag so the
        /// style never bleeds into the message.
        close: &'a str,
    },
    /// Style the tag with a CSS declaration via the console's inline
    /// style-substitution convention. Byte writers render this as plain
    /// text; browser bridges consume [`Record::css_parts`] instead.
    Css {
        /// The level's CSS declaration string.
        style: &'a str,
    },
}

/// A single formatted emission: level, optional namespace prefix, styling
/// decision, and the caller's message.
///
/// Records borrow everything they reference, including the message as
/// [`fmt::Arguments`], so building one costs no allocation. They are
/// constructed by the dispatcher and consumed immediately by a sink.
///
/// # Examples
///
/// ```
/// use chromalog_core::{Level, Record};
///
/// let record = Record::new(Level::Info, format_args!("ready"));
/// assert_eq!(record.to_string(), "[INFO] ready");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    level: Level,
    namespace: Option<&'a str>,
    decor: Decor<'a>,
    args: fmt::Arguments<'a>,
}

impl<'a> Record<'a> {
    /// Creates an unstyled record without a namespace.
    #[must_use = "constructed records must be emitted to reach users"]
    pub const fn new(level: Level, args: fmt::Arguments<'a>) -> Self {
        Self {
            level,
            namespace: None,
            decor: Decor::Plain,
            args,
        }
    }

    /// Attaches a namespace prefix.
    #[must_use = "constructed records must be emitted to reach users"]
    pub const fn with_namespace(mut self, namespace: Option<&'a str>) -> Self {
        self.namespace = namespace;
        self
    }

    /// Attaches a styling decision.
    #[must_use = "constructed records must be emitted to reach users"]
    pub const fn with_decor(mut self, decor: Decor<'a>) -> Self {
        self.decor = decor;
        self
    }

    /// The record's level.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// The namespace prefix, if any.
    #[must_use]
    pub const fn namespace(&self) -> Option<&'a str> {
        self.namespace
    }

    /// The styling decision.
    #[must_use]
    pub const fn decor(&self) -> Decor<'a> {
        self.decor
    }

    /// The caller's message.
    #[must_use]
    pub const fn args(&self) -> fmt::Arguments<'a> {
        self.args
    }

    /// Renders the record into an arbitrary [`fmt::Write`] implementor.
    pub fn render_to<W: fmt::Write>(&self, writer: &mut W) -> fmt::Result {
        write!(writer, "{self}")
    }

    /// Writes the rendered record into an [`io::Write`] implementor.
    pub fn render_to_writer<W: io::Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{self}")
    }

    /// Writes the rendered record followed by a newline into an
    /// [`io::Write`] implementor.
    pub fn render_line_to_writer<W: io::Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{self}")
    }

    /// Returns the browser-form parts for a CSS-styled record.
    ///
    /// The template follows the console inline-style convention: one `%c`
    /// slot for the namespace segment when present and one for the level
    /// tag, with [`CssParts::styles`] carrying one declaration per slot in
    /// order. The slots stay separate so a namespace can be recolored
    /// independently of the level. Returns `None` unless the decor is
    /// [`Decor::Css`]; plain and ANSI records have no browser form.
    ///
    /// # Examples
    ///
    /// ```
    /// use chromalog_core::{Decor, Level, Record};
    ///
    /// let record = Record::new(Level::Success, format_args!("ok"))
    ///     .with_decor(Decor::Css { style: "color: limegreen;" });
    /// let parts = record.css_parts().unwrap();
    /// assert_eq!(parts.template(), "%c[SUCCESS]");
    /// assert_eq!(parts.styles(), ["color: limegreen;"]);
    /// assert_eq!(parts.body(), "ok");
    /// ```
    #[must_use]
    pub fn css_parts(&self) -> Option<CssParts> {
        let Decor::Css { style } = self.decor else {
            return None;
        };

        let mut template = String::new();
        let mut styles = Vec::with_capacity(2);
        if let Some(namespace) = self.namespace {
            template.push_str("%c[");
            template.push_str(namespace);
            template.push_str("] ");
            styles.push(style.to_owned());
        }
        template.push_str("%c");
        template.push_str(self.level.tag());
        styles.push(style.to_owned());

        Some(CssParts {
            template,
            styles,
            body: self.args.to_string(),
        })
    }
}

impl fmt::Display for Record<'_> {
    /// Renders the canonical text form: the optionally namespaced tag,
    /// wrapped in its ANSI pair when one applies, then the message. CSS
    /// decors degrade to the plain form here.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = match self.decor {
            Decor::Ansi { open, close } => (open, close),
            Decor::Plain | Decor::Css { .. } => ("", ""),
        };

        f.write_str(open)?;
        if let Some(namespace) = self.namespace {
            write!(f, "[{namespace}] ")?;
        }
        f.write_str(self.level.tag())?;
        f.write_str(close)?;
        write!(f, " {}", self.args)
    }
}

/// Browser-form rendering of a CSS-styled [`Record`]: the `%c` template,
/// the style argument list, and the message body. A browser bridge
/// forwards these, in order, to the resolved console method.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CssParts {
    template: String,
    styles: Vec<String>,
    body: String,
}

impl CssParts {
    /// The `%c` template string.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// One CSS declaration per `%c` slot, in slot order.
    #[must_use]
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// The rendered message body, forwarded after the style arguments.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consumes the parts, returning template, styles, and body.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<String>, String) {
        (self.template, self.styles, self.body)
    }
}
