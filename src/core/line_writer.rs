//! Line writer: header formatting plus serialised output

use super::destination::Destination;
use super::error::Result;
use super::flags::FormatFlags;
use crate::destinations::ConsoleDestination;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::fmt;

/// Writes one entry at a time to a destination, each behind a header made
/// of the writer prefix and the timestamp selected by [`FormatFlags`].
///
/// Every entry is flushed before `output` returns.
pub struct LineWriter {
    destination: Mutex<Box<dyn Destination>>,
    prefix: String,
    flags: FormatFlags,
}

impl LineWriter {
    pub fn new(destination: Box<dyn Destination>, prefix: impl Into<String>, flags: FormatFlags) -> Self {
        Self {
            destination: Mutex::new(destination),
            prefix: prefix.into(),
            flags,
        }
    }

    /// Standard output, no prefix, no header flags.
    pub fn plain_stdout() -> Self {
        Self::new(Box::new(ConsoleDestination::stdout()), "", FormatFlags::NONE)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn flags(&self) -> FormatFlags {
        self.flags
    }

    pub fn destination_name(&self) -> String {
        self.destination.lock().name().to_string()
    }

    /// Build the full entry for `msg` as it would be written at `now`.
    #[must_use]
    pub fn format_entry(&self, now: &DateTime<Utc>, msg: &str) -> String {
        let timestamp = self.flags.format_timestamp(now);
        let mut entry = String::with_capacity(self.prefix.len() + timestamp.len() + msg.len() + 1);

        if !self.flags.contains(FormatFlags::MSG_PREFIX) {
            entry.push_str(&self.prefix);
        }
        entry.push_str(&timestamp);
        if self.flags.contains(FormatFlags::MSG_PREFIX) {
            entry.push_str(&self.prefix);
        }
        entry.push_str(msg);
        if !msg.ends_with('\n') {
            entry.push('\n');
        }
        entry
    }

    /// Write `msg` as one entry, adding a newline if it lacks one.
    pub fn output(&self, msg: &str) -> Result<()> {
        let entry = self.format_entry(&Utc::now(), msg);

        let mut destination = self.destination.lock();
        destination.write_all(entry.as_bytes())?;
        destination.flush()
    }

    /// Write `msg` followed by a newline, even if it already ends with one.
    pub fn println(&self, msg: &str) -> Result<()> {
        self.output(&format!("{}\n", msg))
    }

    pub fn flush(&self) -> Result<()> {
        self.destination.lock().flush()
    }
}

impl fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWriter")
            .field("destination", &self.destination_name())
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .finish()
    }
}
