use std::sync::{Arc, Mutex};

use chromalog_core::{AnsiPair, AnsiSheetUpdate, Level, StyleSheetUpdate};
use chromalog_sink::{ConsoleSink, Sink};

use crate::config::{Config, ConfigUpdate};
use crate::logger::Logger;
use crate::runtime::{HostRuntime, Runtime};
use crate::transport::TransportChoice;

/// Builder for [`Logger`] instances.
///
/// Starts from the detected host configuration and layers explicit
/// overrides on top, so a builder with no overrides is equivalent to
/// [`Logger::new`]. The sink and the environment probe default to the
/// standard console and the host probe.
///
/// # Examples
///
/// ```
/// use chromalog::{Logger, StaticRuntime, Transport};
/// use chromalog_core::Level;
/// use chromalog_sink::{CaptureWriter, ConsoleSink};
///
/// let out = CaptureWriter::new();
/// let log = Logger::builder()
///     .namespace("worker")
///     .style(Level::Success, "color: purple;")
///     .sink(ConsoleSink::new(out.clone(), CaptureWriter::new()))
///     .runtime(StaticRuntime::new(Transport::Node))
///     .build();
///
/// log.success("spawned");
/// assert!(out.contents().contains("[worker] "));
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    update: ConfigUpdate,
    sink: Option<Arc<Mutex<dyn Sink + Send>>>,
    runtime: Option<Arc<dyn Runtime>>,
}

impl LoggerBuilder {
    /// Creates a builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the master switch.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.update.enabled = Some(enabled);
        self
    }

    /// Overrides the styling toggle.
    #[must_use]
    pub fn styled(mut self, styled: bool) -> Self {
        self.update.styled = Some(styled);
        self
    }

    /// Sets the namespace prefix.
    #[must_use]
    pub fn namespace(mut self, name: impl Into<String>) -> Self {
        self.update.namespace = Some(name.into());
        self
    }

    /// Forces or re-enables automatic transport selection.
    #[must_use]
    pub fn transport(mut self, transport: TransportChoice) -> Self {
        self.update.transport = Some(transport);
        self
    }

    /// Overrides one level's CSS declaration.
    #[must_use]
    pub fn style(mut self, level: Level, style: impl Into<String>) -> Self {
        self.update
            .styles
            .get_or_insert_with(StyleSheetUpdate::default)
            .set(level, style);
        self
    }

    /// Overrides one level's ANSI escape pair.
    #[must_use]
    pub fn ansi_style(mut self, level: Level, pair: AnsiPair) -> Self {
        self.update
            .node_styles
            .get_or_insert_with(AnsiSheetUpdate::default)
            .set(level, pair);
        self
    }

    /// Merges a whole partial CSS sheet.
    #[must_use]
    pub fn styles(mut self, styles: StyleSheetUpdate) -> Self {
        self.update.styles = Some(styles);
        self
    }

    /// Merges a whole partial ANSI sheet.
    #[must_use]
    pub fn node_styles(mut self, node_styles: AnsiSheetUpdate) -> Self {
        self.update.node_styles = Some(node_styles);
        self
    }

    /// Replaces the output sink.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + Send + 'static) -> Self {
        self.sink = Some(Arc::new(Mutex::new(sink)));
        self
    }

    /// Replaces the environment probe.
    #[must_use]
    pub fn runtime(mut self, runtime: impl Runtime + 'static) -> Self {
        self.runtime = Some(Arc::new(runtime));
        self
    }

    /// Builds the logger: detect the base configuration through the
    /// probe, merge the overrides, and wire up the sink.
    #[must_use]
    pub fn build(self) -> Logger {
        let runtime = self
            .runtime
            .unwrap_or_else(|| Arc::new(HostRuntime::new()));
        let mut config = Config::detected(runtime.as_ref());
        config.apply(self.update);
        let sink = self
            .sink
            .unwrap_or_else(|| Arc::new(Mutex::new(ConsoleSink::standard())));
        Logger::from_parts(config, sink, runtime)
    }
}
