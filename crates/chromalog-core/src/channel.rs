//! crates/chromalog-core/src/channel.rs
//! Console channels and their stream routing.

use std::fmt;

/// Console channel an emission is forwarded to.
///
/// Channels mirror the four underlying console methods (`log`, `info`,
/// `warn`, `error`). Browser devtools filter on the channel; terminal
/// transports collapse it onto the two process streams via
/// [`is_stderr`](Self::is_stderr).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Channel {
    /// The general log channel. Also the unconditional passthrough target.
    Log,
    /// The info channel.
    Info,
    /// The warning channel.
    Warn,
    /// The error channel.
    Error,
}

impl Channel {
    /// Returns the lowercase console-method name for this channel.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Reports whether this channel routes to the error stream.
    ///
    /// `Log` and `Info` reach stdout, `Warn` and `Error` reach stderr,
    /// matching how server-side consoles split the four methods across the
    /// two process streams.
    ///
    /// # Examples
    ///
    /// ```
    /// use chromalog_core::Channel;
    ///
    /// assert!(Channel::Error.is_stderr());
    /// assert!(Channel::Warn.is_stderr());
    /// assert!(!Channel::Info.is_stderr());
    /// assert!(!Channel::Log.is_stderr());
    /// ```
    #[must_use]
    pub const fn is_stderr(self) -> bool {
        matches!(self, Self::Warn | Self::Error)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_split_matches_console_semantics() {
        assert!(!Channel::Log.is_stderr());
        assert!(!Channel::Info.is_stderr());
        assert!(Channel::Warn.is_stderr());
        assert!(Channel::Error.is_stderr());
    }

    #[test]
    fn labels_match_console_methods() {
        assert_eq!(Channel::Log.as_str(), "log");
        assert_eq!(Channel::Info.as_str(), "info");
        assert_eq!(Channel::Warn.as_str(), "warn");
        assert_eq!(Channel::Error.as_str(), "error");
    }
}
