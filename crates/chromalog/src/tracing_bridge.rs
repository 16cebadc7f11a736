//! crates/chromalog/src/tracing_bridge.rs
//! Bridge between the tracing crate and chromalog loggers.
//!
//! This module provides a tracing-subscriber layer that forwards tracing
//! events into a [`Logger`], so code instrumented with the standard
//! tracing macros (error!, warn!, info!, debug!, trace!) shares the
//! logger's tags, styling, and channel routing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use chromalog::{init_tracing, Logger};
//!
//! let logger = Logger::new();
//! init_tracing(logger);
//!
//! tracing::info!("fetching data from the API");
//! tracing::error!("error connecting to the server");
//! ```

use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::logger::Logger;
use chromalog_core::Level;

/// A tracing layer that forwards events to a [`Logger`].
///
/// Event severities map onto the logger's levels (`ERROR`→error,
/// `WARN`→warning, `INFO`→info, `DEBUG` and `TRACE`→debug); the event's
/// `message` field becomes the emitted text. Events without a message
/// field are dropped.
pub struct LoggerLayer {
    logger: Logger,
}

impl LoggerLayer {
    /// Create a layer forwarding into the given logger.
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Map a tracing level to a logger level.
    const fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warning,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG | tracing::Level::TRACE => Level::Debug,
        }
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let level = Self::map_level(event.metadata().level());

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            self.logger.print(level, message);
        }
    }
}

/// Visitor to extract the message field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Install a global tracing subscriber forwarding into the logger.
///
/// After this, the standard tracing macros reach the same sink, tags,
/// and configuration as the logger's own level methods.
pub fn init_tracing(logger: Logger) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .init();
}

/// Install a global tracing subscriber with an additional filter layer
/// in front of the logger bridge.
///
/// # Example
///
/// ```rust,ignore
/// use chromalog::{init_tracing_with_filter, Logger};
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(Logger::new(), EnvFilter::from_default_env());
/// ```
pub fn init_tracing_with_filter<F>(logger: Logger, filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(LoggerLayer::new(logger))
        .init();
}
