//! crates/chromalog-sink/src/capture.rs
//! Cloneable in-memory writer for tests and embedders.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// A cloneable [`io::Write`] implementor over a shared byte buffer.
///
/// Clones write into the same buffer, so a test can hand two clones to a
/// [`ConsoleSink`](crate::ConsoleSink) (or one per stream) and inspect the
/// captured output afterwards while the sink still owns its writers.
///
/// # Examples
///
/// ```
/// use chromalog_core::{Channel, Level, Record};
/// use chromalog_sink::{CaptureWriter, ConsoleSink, Sink};
///
/// let out = CaptureWriter::new();
/// let err = CaptureWriter::new();
/// let mut sink = ConsoleSink::new(out.clone(), err.clone());
///
/// sink.emit(
///     Channel::Error,
///     &Record::new(Level::Error, format_args!("connection refused")),
/// )?;
///
/// assert!(out.contents().is_empty());
/// assert_eq!(err.contents(), "[ERROR] connection refused\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    /// Creates an empty capture buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the captured bytes as a string, replacing invalid UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        let buffer = self
            .buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Takes the captured bytes, leaving the buffer empty.
    #[must_use]
    pub fn take(&self) -> Vec<u8> {
        let mut buffer = self
            .buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut buffer)
    }

    /// Reports whether nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_buffer() {
        let writer = CaptureWriter::new();
        let mut clone = writer.clone();
        clone.write_all(b"hello").expect("write succeeds");

        assert_eq!(writer.contents(), "hello");
        assert!(!writer.is_empty());
    }

    #[test]
    fn take_drains_the_buffer() {
        let mut writer = CaptureWriter::new();
        writer.write_all(b"once").expect("write succeeds");

        assert_eq!(writer.take(), b"once");
        assert!(writer.is_empty());
    }
}
