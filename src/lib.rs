//! # Threat Logger
//!
//! Decorative console logging. Errors and named values are printed as
//! emoji-marked, column-aligned lines tagged with a threat level (`T.H.`),
//! and sequences and maps are printed as ASCII tables.
//!
//! ## Features
//!
//! - **Value lines**: `✅` for non-zero values, `❌` for absent, `0` or `""`
//! - **Threat levels**: 0 (fine) to 10, with 5 reserved for `fatal`
//! - **Tables**: `| index | value |` rows for slices and maps
//! - **Scoped printers**: call-site tagged, timestamp-free output on stdout
//! - **Destinations**: console, file, in-memory, or any `io::Write`
//!
//! ```
//! use threat_logger::prelude::*;
//!
//! let buffer = MemoryDestination::new();
//! let logger = Logger::builder()
//!     .destination(buffer.clone())
//!     .prefix("Alex")
//!     .build();
//!
//! logger.print_value("retries", 0);
//! logger.print_sequence_padding("nums", &[1, 2, 3], 5);
//! assert!(buffer.contents().contains(": nums:"));
//! ```

pub mod core;
pub mod destinations;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Destination, DestinationConfig, FormatFlags, GlyphSet, Glyphs, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, Printer, Result, TableKey, TableValue,
        ThreatLevel, Value, DEFAULT_PADDING,
    };
    pub use crate::destinations::{ConsoleDestination, MemoryDestination, WriterDestination};
    #[cfg(feature = "file")]
    pub use crate::destinations::FileDestination;
}

pub use core::{
    format_float, glyph_for, normalize_prefix, render_error, render_fatal, render_mapping, render_sequence,
    render_value, Destination, DestinationConfig, ExitHook, FormatFlags, GlyphSet, Glyphs,
    LineWriter, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Printer, Result,
    Scope, TableKey, TableValue, ThreatLevel, Value, DEFAULT_PADDING, FATAL_EXIT_CODE,
    LEVEL_GLYPHS, MAX_PADDING, UNKNOWN_LEVEL_GLYPH,
};
pub use destinations::{ConsoleDestination, ConsoleStream, MemoryDestination, WriterDestination};
#[cfg(feature = "file")]
pub use destinations::FileDestination;
