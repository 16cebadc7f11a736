//! crates/chromalog/src/runtime.rs
//! Injected environment probes for transport and styling defaults.

use std::env;
use std::io;

use is_terminal::IsTerminal;

use crate::transport::Transport;

/// Environment capability consulted by the dispatcher and the detected
/// configuration defaults.
///
/// Everything the logger learns from the host (which backend to render
/// for, whether the user prefers a dark palette, whether styling is
/// appropriate at all) flows through this trait, so tests and embedders
/// can substitute a probe instead of faking process-global state.
pub trait Runtime: Send + Sync {
    /// Probes the execution environment for the rendering backend.
    fn detect(&self) -> Transport;

    /// Reports whether the host signals a dark color-scheme preference.
    /// Absent a signal, the light palette is the fallback.
    fn prefers_dark(&self) -> bool {
        false
    }

    /// Reports whether styled output is appropriate for the host.
    fn supports_style(&self) -> bool {
        true
    }
}

/// The default probe, reading the actual host environment.
///
/// Detection order follows the most unambiguous signal first: a wasm
/// target resolves to [`Transport::Browser`], anything else to
/// [`Transport::Node`]. There is no runtime marker a native process can
/// probe for React Native, so that backend is reached through an explicit
/// transport override or an embedder-supplied probe; overrides always win
/// (see [`TransportChoice::resolve`](crate::TransportChoice::resolve)).
///
/// Dark-scheme preference reads the `COLORFGBG` convention terminals use
/// to advertise their palette, falling back to light. Styling is allowed
/// when `NO_COLOR` is unset and stdout is a terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostRuntime;

impl HostRuntime {
    /// Creates the host probe.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Runtime for HostRuntime {
    fn detect(&self) -> Transport {
        if cfg!(target_arch = "wasm32") {
            Transport::Browser
        } else {
            Transport::Node
        }
    }

    fn prefers_dark(&self) -> bool {
        env::var("COLORFGBG")
            .ok()
            .and_then(|value| colorfgbg_prefers_dark(&value))
            .unwrap_or(false)
    }

    fn supports_style(&self) -> bool {
        if env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty()) {
            return false;
        }
        io::stdout().is_terminal()
    }
}

/// Parse a `COLORFGBG` value like `"15;0"` or `"0;default;15"` into a
/// dark-background verdict. The last segment is the background color
/// index; the low palette indices (and 8, bright black) are dark.
fn colorfgbg_prefers_dark(value: &str) -> Option<bool> {
    let background = value.rsplit(';').next()?.trim();
    let index: u8 = background.parse().ok()?;
    Some(index < 7 || index == 8)
}

/// A probe returning fixed answers.
///
/// Used by tests throughout the workspace, and by embedders whose
/// environment is known at construction time (a bundled web view, a
/// mobile shell) rather than probed.
///
/// # Examples
///
/// ```
/// use chromalog::{Runtime, StaticRuntime, Transport};
///
/// let probe = StaticRuntime::new(Transport::Browser).with_dark(true);
/// assert_eq!(probe.detect(), Transport::Browser);
/// assert!(probe.prefers_dark());
/// assert!(probe.supports_style());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct StaticRuntime {
    transport: Transport,
    dark: bool,
    style: bool,
}

impl StaticRuntime {
    /// Creates a probe that detects the given transport, reports a light
    /// preference, and allows styling.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self {
            transport,
            dark: false,
            style: true,
        }
    }

    /// Sets the dark-preference answer.
    #[must_use]
    pub const fn with_dark(mut self, dark: bool) -> Self {
        self.dark = dark;
        self
    }

    /// Sets the styling-support answer.
    #[must_use]
    pub const fn with_style(mut self, style: bool) -> Self {
        self.style = style;
        self
    }
}

impl Runtime for StaticRuntime {
    fn detect(&self) -> Transport {
        self.transport
    }

    fn prefers_dark(&self) -> bool {
        self.dark
    }

    fn supports_style(&self) -> bool {
        self.style
    }
}
