use std::fmt;
use std::str::FromStr;

use crate::runtime::Runtime;

/// A resolved rendering backend.
///
/// `Browser` renders CSS-styled tags through the console's inline
/// style-substitution convention; `Node` and `ReactNative` wrap tags in
/// ANSI escape pairs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Transport {
    /// Browser devtools console, CSS formatting.
    Browser,
    /// Server-side console, ANSI formatting.
    Node,
    /// Mobile-native console, ANSI formatting.
    ReactNative,
}

impl Transport {
    /// Returns the kebab-case label used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Node => "node",
            Self::ReactNative => "react-native",
        }
    }

    /// Reports whether this transport styles tags with ANSI escapes
    /// rather than CSS declarations.
    #[must_use]
    pub const fn uses_ansi(self) -> bool {
        matches!(self, Self::Node | Self::ReactNative)
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Transport`] or [`TransportChoice`]
/// from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseTransportError {
    _private: (),
}

impl fmt::Display for ParseTransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised transport")
    }
}

impl std::error::Error for ParseTransportError {}

impl FromStr for Transport {
    type Err = ParseTransportError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "browser" => Ok(Self::Browser),
            "node" => Ok(Self::Node),
            "react-native" => Ok(Self::ReactNative),
            _ => Err(ParseTransportError { _private: () }),
        }
    }
}

/// The configured transport value: an explicit backend, or `Auto` to
/// probe the execution environment.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TransportChoice {
    /// Probe the environment through the active [`Runtime`].
    #[default]
    Auto,
    /// Force the browser backend.
    Browser,
    /// Force the server-side backend.
    Node,
    /// Force the mobile-native backend.
    ReactNative,
}

impl TransportChoice {
    /// Returns the kebab-case label used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Browser => "browser",
            Self::Node => "node",
            Self::ReactNative => "react-native",
        }
    }

    /// Returns the forced backend, or `None` for `Auto`.
    #[must_use]
    pub const fn fixed(self) -> Option<Transport> {
        match self {
            Self::Auto => None,
            Self::Browser => Some(Transport::Browser),
            Self::Node => Some(Transport::Node),
            Self::ReactNative => Some(Transport::ReactNative),
        }
    }

    /// Resolves the concrete backend for one emission.
    ///
    /// An explicit choice is returned verbatim; the probe is only
    /// consulted for `Auto`, so an override always wins regardless of the
    /// host environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use chromalog::{StaticRuntime, Transport, TransportChoice};
    ///
    /// let probe = StaticRuntime::new(Transport::Node);
    /// assert_eq!(TransportChoice::Auto.resolve(&probe), Transport::Node);
    /// assert_eq!(
    ///     TransportChoice::Browser.resolve(&probe),
    ///     Transport::Browser,
    /// );
    /// ```
    #[must_use]
    pub fn resolve(self, runtime: &dyn Runtime) -> Transport {
        self.fixed().unwrap_or_else(|| runtime.detect())
    }
}

impl From<Transport> for TransportChoice {
    fn from(transport: Transport) -> Self {
        match transport {
            Transport::Browser => Self::Browser,
            Transport::Node => Self::Node,
            Transport::ReactNative => Self::ReactNative,
        }
    }
}

impl fmt::Display for TransportChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportChoice {
    type Err = ParseTransportError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input == "auto" {
            return Ok(Self::Auto);
        }
        input.parse::<Transport>().map(Self::from)
    }
}
