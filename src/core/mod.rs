//! Core logger types and traits

pub mod config;
pub mod destination;
pub mod error;
pub mod flags;
pub mod format;
pub mod glyphs;
pub mod line_writer;
pub mod logger;
pub mod metrics;
pub mod printer;
pub mod table;
pub mod threat_level;
pub mod value;

pub use config::{DestinationConfig, GlyphSet, LoggerConfig};
pub use destination::Destination;
pub use error::{LoggerError, Result};
pub use flags::FormatFlags;
pub use format::{render_error, render_fatal, render_value, Scope};
pub use glyphs::Glyphs;
pub use line_writer::LineWriter;
pub use logger::{normalize_prefix, ExitHook, Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use printer::Printer;
pub use table::{render_mapping, render_sequence, TableKey, TableValue, DEFAULT_PADDING, MAX_PADDING};
pub use threat_level::{glyph_for, ThreatLevel, LEVEL_GLYPHS, UNKNOWN_LEVEL_GLYPH};
pub use value::{format_float, Value};
