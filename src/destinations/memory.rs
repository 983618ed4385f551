//! In-memory destination for capturing output

use crate::core::{Destination, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared in-memory buffer.
///
/// Clones share the same buffer, so a caller can keep one handle and give
/// another to a logger.
///
/// # Example
///
/// ```
/// use threat_logger::{FormatFlags, Logger, MemoryDestination};
///
/// let buffer = MemoryDestination::new();
/// let logger = Logger::builder()
///     .destination(buffer.clone())
///     .prefix("app")
///     .flags(FormatFlags::MSG_PREFIX)
///     .build();
///
/// logger.print_value("answer", 42);
/// assert!(buffer.contents().contains("answer"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    buffer: Arc<Mutex<Vec<u8>>>,
    flushes: Arc<Mutex<usize>>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    /// Number of flushes requested on this buffer.
    pub fn flush_count(&self) -> usize {
        *self.flushes.lock()
    }
}

impl Destination for MemoryDestination {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.buffer.lock().extend_from_slice(bytes);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        *self.flushes.lock() += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
