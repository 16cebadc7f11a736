//! crates/chromalog-core/src/style.rs
//! Per-level style sheets for the CSS and ANSI transports.

use std::borrow::Cow;

use crate::level::Level;

/// ANSI reset sequence re-emitted after every styled tag.
pub const ANSI_RESET: &str = "\x1b[0m";

/// CSS declarations per level, used when the active transport renders CSS.
///
/// Entries are plain declaration strings (`color: crimson; font-weight:
/// bold;`). An empty entry renders the tag unstyled; it is never an error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleSheet {
    /// Success tag style.
    pub success: String,
    /// Error tag style.
    pub error: String,
    /// Warning tag style.
    pub warning: String,
    /// Info tag style.
    pub info: String,
    /// Debug tag style.
    pub debug: String,
}

impl StyleSheet {
    /// The palette used on light backgrounds.
    #[must_use]
    pub fn light() -> Self {
        Self {
            success: "color: limegreen; font-weight: bold;".to_owned(),
            error: "color: crimson; font-weight: bold;".to_owned(),
            warning: "color: orange; font-weight: bold;".to_owned(),
            info: "color: dodgerblue; font-weight: bold;".to_owned(),
            debug: "color: slategray; font-weight: bold;".to_owned(),
        }
    }

    /// The palette used when a dark color-scheme preference is detected.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            success: "color: #22c55e; font-weight: 700;".to_owned(),
            error: "color: #f87171; font-weight: 700;".to_owned(),
            warning: "color: #f59e0b; font-weight: 700;".to_owned(),
            info: "color: #60a5fa; font-weight: 700;".to_owned(),
            debug: "color: #94a3b8; font-weight: 700;".to_owned(),
        }
    }

    /// Get the declaration for a specific level.
    #[must_use]
    pub fn get(&self, level: Level) -> &str {
        match level {
            Level::Success => &self.success,
            Level::Error => &self.error,
            Level::Warning => &self.warning,
            Level::Info => &self.info,
            Level::Debug => &self.debug,
        }
    }

    /// Set the declaration for a specific level.
    pub fn set(&mut self, level: Level, style: impl Into<String>) {
        let style = style.into();
        match level {
            Level::Success => self.success = style,
            Level::Error => self.error = style,
            Level::Warning => self.warning = style,
            Level::Info => self.info = style,
            Level::Debug => self.debug = style,
        }
    }

    /// Set every level to the same declaration.
    pub fn set_all(&mut self, style: impl Into<String>) {
        let style = style.into();
        self.success.clone_from(&style);
        self.error.clone_from(&style);
        self.warning.clone_from(&style);
        self.info.clone_from(&style);
        self.debug = style;
    }
}

impl Default for StyleSheet {
    /// Defaults to the light palette; transport-aware callers pick
    /// [`StyleSheet::dark`] when the host reports a dark preference.
    fn default() -> Self {
        Self::light()
    }
}

/// Partial [`StyleSheet`] update.
///
/// Only the levels named here are overwritten; the rest of the sheet is
/// retained. This is the deep-merge exception to the otherwise shallow
/// configuration merge: callers can recolor one level without resetting
/// the others.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleSheetUpdate {
    /// Replacement success style, if any.
    pub success: Option<String>,
    /// Replacement error style, if any.
    pub error: Option<String>,
    /// Replacement warning style, if any.
    pub warning: Option<String>,
    /// Replacement info style, if any.
    pub info: Option<String>,
    /// Replacement debug style, if any.
    pub debug: Option<String>,
}

impl StyleSheetUpdate {
    /// Set the replacement declaration for a specific level.
    pub fn set(&mut self, level: Level, style: impl Into<String>) {
        let style = Some(style.into());
        match level {
            Level::Success => self.success = style,
            Level::Error => self.error = style,
            Level::Warning => self.warning = style,
            Level::Info => self.info = style,
            Level::Debug => self.debug = style,
        }
    }

    /// Merge this update into a sheet, key by key.
    pub fn apply_to(self, sheet: &mut StyleSheet) {
        if let Some(style) = self.success {
            sheet.success = style;
        }
        if let Some(style) = self.error {
            sheet.error = style;
        }
        if let Some(style) = self.warning {
            sheet.warning = style;
        }
        if let Some(style) = self.info {
            sheet.info = style;
        }
        if let Some(style) = self.debug {
            sheet.debug = style;
        }
    }
}

/// An `(open, close)` ANSI escape pair wrapped around a styled tag.
///
/// The close escape is re-emitted immediately after the tag so the style
/// never bleeds into the caller's message. A pair with both halves empty
/// renders the tag unstyled.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "(String, String)", into = "(String, String)")
)]
pub struct AnsiPair {
    open: Cow<'static, str>,
    close: Cow<'static, str>,
}

impl AnsiPair {
    /// Creates a pair from arbitrary escape strings.
    #[must_use]
    pub fn new(open: impl Into<Cow<'static, str>>, close: impl Into<Cow<'static, str>>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Creates a pair from static escape strings.
    #[must_use]
    pub const fn from_static(open: &'static str, close: &'static str) -> Self {
        Self {
            open: Cow::Borrowed(open),
            close: Cow::Borrowed(close),
        }
    }

    /// The unstyled pair: both escapes empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_static("", "")
    }

    /// The opening escape.
    #[must_use]
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The closing escape.
    #[must_use]
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Reports whether both escapes are empty, i.e. the pair styles nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty() && self.close.is_empty()
    }
}

impl Default for AnsiPair {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<(String, String)> for AnsiPair {
    fn from((open, close): (String, String)) -> Self {
        Self::new(open, close)
    }
}

impl From<AnsiPair> for (String, String) {
    fn from(pair: AnsiPair) -> Self {
        (pair.open.into_owned(), pair.close.into_owned())
    }
}

/// ANSI escape pairs per level, used when the active transport renders
/// ANSI escape codes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnsiSheet {
    /// Success tag pair.
    pub success: AnsiPair,
    /// Error tag pair.
    pub error: AnsiPair,
    /// Warning tag pair.
    pub warning: AnsiPair,
    /// Info tag pair.
    pub info: AnsiPair,
    /// Debug tag pair.
    pub debug: AnsiPair,
}

impl AnsiSheet {
    /// The default bold-color palette, closed by [`ANSI_RESET`].
    #[must_use]
    pub const fn palette() -> Self {
        Self {
            success: AnsiPair::from_static("\x1b[1;32m", ANSI_RESET),
            error: AnsiPair::from_static("\x1b[1;31m", ANSI_RESET),
            warning: AnsiPair::from_static("\x1b[1;33m", ANSI_RESET),
            info: AnsiPair::from_static("\x1b[1;34m", ANSI_RESET),
            debug: AnsiPair::from_static("\x1b[1;90m", ANSI_RESET),
        }
    }

    /// A sheet with every pair empty, rendering all tags unstyled.
    #[must_use]
    pub const fn unstyled() -> Self {
        Self {
            success: AnsiPair::empty(),
            error: AnsiPair::empty(),
            warning: AnsiPair::empty(),
            info: AnsiPair::empty(),
            debug: AnsiPair::empty(),
        }
    }

    /// Get the pair for a specific level.
    #[must_use]
    pub fn get(&self, level: Level) -> &AnsiPair {
        match level {
            Level::Success => &self.success,
            Level::Error => &self.error,
            Level::Warning => &self.warning,
            Level::Info => &self.info,
            Level::Debug => &self.debug,
        }
    }

    /// Set the pair for a specific level.
    pub fn set(&mut self, level: Level, pair: AnsiPair) {
        match level {
            Level::Success => self.success = pair,
            Level::Error => self.error = pair,
            Level::Warning => self.warning = pair,
            Level::Info => self.info = pair,
            Level::Debug => self.debug = pair,
        }
    }

    /// Set every level to the same pair.
    pub fn set_all(&mut self, pair: &AnsiPair) {
        self.success = pair.clone();
        self.error = pair.clone();
        self.warning = pair.clone();
        self.info = pair.clone();
        self.debug = pair.clone();
    }
}

impl Default for AnsiSheet {
    fn default() -> Self {
        Self::palette()
    }
}

/// Partial [`AnsiSheet`] update with the same key-by-key merge semantics
/// as [`StyleSheetUpdate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnsiSheetUpdate {
    /// Replacement success pair, if any.
    pub success: Option<AnsiPair>,
    /// Replacement error pair, if any.
    pub error: Option<AnsiPair>,
    /// Replacement warning pair, if any.
    pub warning: Option<AnsiPair>,
    /// Replacement info pair, if any.
    pub info: Option<AnsiPair>,
    /// Replacement debug pair, if any.
    pub debug: Option<AnsiPair>,
}

impl AnsiSheetUpdate {
    /// Set the replacement pair for a specific level.
    pub fn set(&mut self, level: Level, pair: AnsiPair) {
        let pair = Some(pair);
        match level {
            Level::Success => self.success = pair,
            Level::Error => self.error = pair,
            Level::Warning => self.warning = pair,
            Level::Info => self.info = pair,
            Level::Debug => self.debug = pair,
        }
    }

    /// Merge this update into a sheet, key by key.
    pub fn apply_to(self, sheet: &mut AnsiSheet) {
        if let Some(pair) = self.success {
            sheet.success = pair;
        }
        if let Some(pair) = self.error {
            sheet.error = pair;
        }
        if let Some(pair) = self.warning {
            sheet.warning = pair;
        }
        if let Some(pair) = self.info {
            sheet.info = pair;
        }
        if let Some(pair) = self.debug {
            sheet.debug = pair;
        }
    }
}
