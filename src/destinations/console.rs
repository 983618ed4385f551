//! Console destination implementation

use crate::core::{Destination, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleStream {
    #[default]
    Stdout,
    Stderr,
}

/// Writes to the process's standard output or standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDestination {
    stream: ConsoleStream,
}

impl ConsoleDestination {
    pub fn stdout() -> Self {
        Self {
            stream: ConsoleStream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
        }
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

impl From<ConsoleStream> for ConsoleDestination {
    fn from(stream: ConsoleStream) -> Self {
        Self { stream }
    }
}

impl Destination for ConsoleDestination {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        // Lock for the whole entry so multi-line tables are not interleaved
        match self.stream {
            ConsoleStream::Stdout => std::io::stdout().lock().write_all(bytes)?,
            ConsoleStream::Stderr => std::io::stderr().lock().write_all(bytes)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => std::io::stdout().flush()?,
            ConsoleStream::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            ConsoleStream::Stdout => "stdout",
            ConsoleStream::Stderr => "stderr",
        }
    }
}
