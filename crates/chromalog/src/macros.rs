//! crates/chromalog/src/macros.rs
//! Convenience macros wrapping the level methods with formatting.

/// Emit a formatted success message.
///
/// # Example
/// ```ignore
/// success!(log, "registered {}", user);
/// ```
#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)*) => {
        $logger.success(::std::format_args!($($arg)*))
    };
}

/// Emit a formatted error message.
///
/// # Example
/// ```ignore
/// error!(log, "connection to {} refused", host);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(::std::format_args!($($arg)*))
    };
}

/// Emit a formatted warning message.
///
/// # Example
/// ```ignore
/// warning!(log, "token expires in {}s", seconds);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warning(::std::format_args!($($arg)*))
    };
}

/// Emit a formatted informational message.
///
/// # Example
/// ```ignore
/// info!(log, "fetching {} records", count);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(::std::format_args!($($arg)*))
    };
}

/// Emit a formatted diagnostic message.
///
/// # Example
/// ```ignore
/// debug!(log, "cache miss for {key}");
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(::std::format_args!($($arg)*))
    };
}

/// Emit formatted text through the unconditional raw passthrough.
///
/// # Example
/// ```ignore
/// raw_log!(log, "{} done", phase);
/// ```
#[macro_export]
macro_rules! raw_log {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log(::std::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use crate::logger::Logger;
    use crate::runtime::StaticRuntime;
    use crate::transport::Transport;
    use chromalog_sink::{CaptureWriter, ConsoleSink};

    #[test]
    fn macros_format_and_dispatch() {
        let out = CaptureWriter::new();
        let err = CaptureWriter::new();
        let log = Logger::builder()
            .styled(false)
            .sink(ConsoleSink::new(out.clone(), err.clone()))
            .runtime(StaticRuntime::new(Transport::Node))
            .build();

        crate::success!(log, "{} of {}", 3, 4);
        crate::warning!(log, "retrying");
        crate::raw_log!(log, "plain {}", "text");

        assert_eq!(out.contents(), "[SUCCESS] 3 of 4\nplain text\n");
        assert_eq!(err.contents(), "[WARNING] retrying\n");
    }
}
