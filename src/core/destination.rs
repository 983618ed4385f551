//! Destination trait for log output targets

use super::error::Result;

/// Where rendered lines end up.
///
/// Implementations receive whole, already formatted entries. The line
/// writer serialises access, so `&mut self` is never shared.
pub trait Destination: Send {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

impl<D: Destination + ?Sized> Destination for Box<D> {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write_all(bytes)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
