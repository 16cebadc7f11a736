use std::fmt;
use std::str::FromStr;

use crate::channel::Channel;

/// Severity level of a tagged emission.
///
/// The set is closed: every level selects both a visible tag and a fixed
/// console [`Channel`]. `Debug` exists so timing helpers and bridge layers
/// have a home for diagnostics that should not compete with user-facing
/// output.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// A completed operation worth celebrating.
    Success,
    /// A failure the user must see.
    Error,
    /// A recoverable or upcoming problem.
    Warning,
    /// Routine informational output.
    Info,
    /// Diagnostic output for developers.
    Debug,
}

/// All levels, in tag-severity order. Handy for exercising every style
/// entry in tests and palette constructors.
pub const LEVELS: [Level; 5] = [
    Level::Success,
    Level::Error,
    Level::Warning,
    Level::Info,
    Level::Debug,
];

impl Level {
    /// Returns the lowercase label used in configuration and parsing.
    ///
    /// # Examples
    ///
    /// ```
    /// use chromalog_core::Level;
    ///
    /// assert_eq!(Level::Success.as_str(), "success");
    /// assert_eq!(Level::Warning.as_str(), "warning");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Returns the bracketed uppercase tag rendered in front of every
    /// level-gated emission.
    ///
    /// Centralising the tag keeps rendering and tests in agreement on the
    /// exact visible text; styling wraps this string, it never rewrites it.
    ///
    /// # Examples
    ///
    /// ```
    /// use chromalog_core::Level;
    ///
    /// assert_eq!(Level::Success.tag(), "[SUCCESS]");
    /// assert_eq!(Level::Info.tag(), "[INFO]");
    /// ```
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Success => "[SUCCESS]",
            Self::Error => "[ERROR]",
            Self::Warning => "[WARNING]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    /// Returns the console channel this level is emitted on.
    ///
    /// The mapping is fixed: `Error` and `Warning` reach the error/warn
    /// channels, `Info` the info channel, and everything else the general
    /// log channel. It determines which OS-level stream receives the
    /// message, so it must not drift between releases.
    ///
    /// # Examples
    ///
    /// ```
    /// use chromalog_core::{Channel, Level};
    ///
    /// assert_eq!(Level::Error.channel(), Channel::Error);
    /// assert_eq!(Level::Success.channel(), Channel::Log);
    /// assert_eq!(Level::Debug.channel(), Channel::Log);
    /// ```
    #[must_use]
    pub const fn channel(self) -> Channel {
        match self {
            Self::Error => Channel::Error,
            Self::Warning => Channel::Warn,
            Self::Info => Channel::Info,
            Self::Success | Self::Debug => Channel::Log,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseLevelError {
    _private: (),
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised log level")
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseLevelError { _private: () }),
        }
    }
}
