//! crates/chromalog/src/helpers.rs
//! Group and timer handles.

use std::time::{Duration, Instant};

use chromalog_core::Level;

use crate::logger::Logger;

/// Handle for an open visual group, created by
/// [`Logger::group`](crate::Logger::group).
///
/// Dropping the handle without calling [`end`](Self::end) leaves a native
/// group open; sinks without native grouping have nothing to close, so
/// for them the handle is inert after the opening banner.
#[derive(Debug)]
pub struct Group {
    logger: Logger,
    opened: bool,
}

impl Group {
    pub(crate) fn new(logger: Logger, opened: bool) -> Self {
        Self { logger, opened }
    }

    /// Closes the group on sinks that support native grouping; a no-op
    /// everywhere else.
    pub fn end(self) {
        if self.opened {
            let _ = self.logger.lock_sink().group_close();
        }
    }
}

/// Handle for a running timer, created by
/// [`Logger::timer`](crate::Logger::timer).
///
/// Each handle is an independent stopwatch over its own closure; timers
/// do not coordinate and there is no registry to leak.
#[derive(Debug)]
pub struct Timer {
    logger: Logger,
    name: String,
    start: Instant,
}

impl Timer {
    pub(crate) fn start(logger: Logger, name: String) -> Self {
        Self {
            logger,
            name,
            start: Instant::now(),
        }
    }

    /// The timer's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Elapsed time since the timer started, without stopping it.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stops the timer and emits the elapsed milliseconds through the
    /// debug level, subject to the logger's configuration like any other
    /// debug emission.
    pub fn end(self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        self.logger
            .print(Level::Debug, format_args!("{}: {elapsed_ms:.1}ms", self.name));
    }
}
