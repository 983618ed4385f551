//! Destination over any `std::io::Write`

use crate::core::{Destination, Result};
use std::io::Write;

/// Adapts an arbitrary writer, such as a socket or a pipe.
pub struct WriterDestination<W: Write + Send> {
    inner: W,
}

impl<W: Write + Send> WriterDestination<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write + Send> Destination for WriterDestination<W> {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}
