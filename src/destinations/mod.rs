//! Destination implementations

pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod memory;
pub mod writer;

pub use console::{ConsoleDestination, ConsoleStream};
#[cfg(feature = "file")]
pub use file::FileDestination;
pub use memory::MemoryDestination;
pub use writer::WriterDestination;

pub use crate::core::Destination;
