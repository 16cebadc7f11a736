use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chromalog_core::{Channel, Decor, Level, Record};
use chromalog_sink::Sink;

use crate::builder::LoggerBuilder;
use crate::config::{Config, ConfigUpdate};
use crate::helpers::{Group, Timer};
use crate::runtime::Runtime;
use crate::transport::Transport;

/// A styled console logger.
///
/// Each logger owns its configuration behind a lock and shares a sink and
/// an environment probe; cloning a logger yields another handle to the
/// same configuration and sink. Independent loggers, including the
/// children created by [`namespace`](Self::namespace), own independent
/// configurations, so there is no ambient global state to collide on.
///
/// All level methods are infallible and return nothing: a disabled logger
/// is a silent no-op, a missing style renders unstyled, and emission
/// failures are swallowed, matching console semantics.
///
/// # Examples
///
/// ```
/// use chromalog::{ConfigUpdate, Logger};
///
/// let log = Logger::new();
/// log.success("user registered");
/// log.configure(ConfigUpdate {
///     styled: Some(false),
///     ..ConfigUpdate::default()
/// });
/// log.info("plain from here on");
/// ```
#[derive(Clone)]
pub struct Logger {
    config: Arc<Mutex<Config>>,
    sink: Arc<Mutex<dyn Sink + Send>>,
    runtime: Arc<dyn Runtime>,
}

impl Logger {
    /// Creates a logger with the detected host configuration, the
    /// standard console sink, and the host environment probe.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Starts building a logger with explicit configuration, sink, or
    /// probe.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn from_parts(
        config: Config,
        sink: Arc<Mutex<dyn Sink + Send>>,
        runtime: Arc<dyn Runtime>,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(config)),
            sink,
            runtime,
        }
    }

    // Lock order is configuration before sink; print holds both.
    fn lock_config(&self) -> MutexGuard<'_, Config> {
        self.config.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn lock_sink(&self) -> MutexGuard<'_, dyn Sink + Send + 'static> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a snapshot of the current configuration.
    #[must_use]
    pub fn config(&self) -> Config {
        self.lock_config().clone()
    }

    /// Merges a partial update into the configuration; see
    /// [`Config::apply`] for the merge semantics.
    pub fn configure(&self, update: ConfigUpdate) {
        self.lock_config().apply(update);
    }

    /// Turns level-gated emission on. Equivalent to updating `enabled`
    /// to `true`; every other configuration field is untouched.
    pub fn enable(&self) {
        self.lock_config().enabled = true;
    }

    /// Turns level-gated emission off. The unconditional
    /// [`log`](Self::log) passthrough is unaffected.
    pub fn disable(&self) {
        self.lock_config().enabled = false;
    }

    /// Reports whether level-gated emission is on.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.lock_config().enabled
    }

    /// Emits a success message on the general log channel.
    pub fn success(&self, message: impl fmt::Display) {
        self.print(Level::Success, message);
    }

    /// Emits an error message on the error channel.
    pub fn error(&self, message: impl fmt::Display) {
        self.print(Level::Error, message);
    }

    /// Emits a warning message on the warn channel.
    pub fn warning(&self, message: impl fmt::Display) {
        self.print(Level::Warning, message);
    }

    /// Emits an informational message on the info channel.
    pub fn info(&self, message: impl fmt::Display) {
        self.print(Level::Info, message);
    }

    /// Emits a diagnostic message on the general log channel.
    pub fn debug(&self, message: impl fmt::Display) {
        self.print(Level::Debug, message);
    }

    /// Unconditional raw passthrough to the general log channel.
    ///
    /// Bypasses the enabled switch, the tag, the namespace, and all
    /// styling: the message is forwarded untouched even on a disabled
    /// logger. This is the escape hatch for output that must always
    /// appear.
    pub fn log(&self, message: impl fmt::Display) {
        let _ = self
            .lock_sink()
            .emit_raw(Channel::Log, format_args!("{message}"));
    }

    /// The print dispatch: gate on `enabled`, compute the styling
    /// decision, and forward the record on the level's fixed channel.
    ///
    /// The transport is only resolved when styling is on, so unstyled
    /// output is byte-identical regardless of which backend would have
    /// been detected. Emission failures are swallowed.
    pub(crate) fn print(&self, level: Level, message: impl fmt::Display) {
        let config = self.lock_config();
        if !config.enabled {
            return;
        }

        let decor = if config.styled {
            match config.transport.resolve(self.runtime.as_ref()) {
                Transport::Browser => Decor::Css {
                    style: config.styles.get(level),
                },
                Transport::Node | Transport::ReactNative => {
                    let pair = config.node_styles.get(level);
                    Decor::Ansi {
                        open: pair.open(),
                        close: pair.close(),
                    }
                }
            }
        } else {
            Decor::Plain
        };

        let _ = self.lock_sink().emit(
            level.channel(),
            &Record::new(level, format_args!("{message}"))
                .with_namespace(config.namespace.as_deref())
                .with_decor(decor),
        );
    }

    /// Creates a derived logger scoped to a namespace.
    ///
    /// The child owns a snapshot of this logger's configuration taken
    /// now, with the namespace replaced; it shares the sink and the
    /// environment probe. Later configuration changes on either side do
    /// not propagate to the other; there is no live link back to the
    /// parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use chromalog::Logger;
    ///
    /// let root = Logger::new();
    /// let api = root.namespace("api");
    /// root.disable();
    /// assert!(api.is_enabled());
    /// ```
    #[must_use]
    pub fn namespace(&self, name: impl Into<String>) -> Self {
        let mut config = self.config();
        config.namespace = Some(name.into());
        Self {
            config: Arc::new(Mutex::new(config)),
            sink: Arc::clone(&self.sink),
            runtime: Arc::clone(&self.runtime),
        }
    }

    /// Opens a visual group and returns its handle.
    ///
    /// Sinks with a native grouping primitive open a real group;
    /// everything else gets a plain delimited banner. Respects the
    /// enabled switch. [`Group::end`] closes the group where supported
    /// and is a no-op otherwise.
    pub fn group(&self, title: impl fmt::Display) -> Group {
        let opened = if self.is_enabled() {
            let mut sink = self.lock_sink();
            let supported = sink.supports_grouping();
            let _ = sink.group_open(&title.to_string());
            supported
        } else {
            false
        };
        Group::new(self.clone(), opened)
    }

    /// Starts a named timer.
    ///
    /// The handle captures the start instant; [`Timer::end`] emits the
    /// elapsed milliseconds through the debug level. Handles are
    /// independent; there is no shared registry.
    pub fn timer(&self, name: impl Into<String>) -> Timer {
        Timer::start(self.clone(), name.into())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config())
            .finish_non_exhaustive()
    }
}
