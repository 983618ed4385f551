//! Serializable logger configuration
//!
//! ```json
//! {
//!   "prefix": "api",
//!   "flags": ["date", "time", "utc"],
//!   "destination": { "file": "/var/log/api.log" },
//!   "glyphs": "ascii"
//! }
//! ```
//!
//! Every field is optional; missing fields take the same defaults as
//! [`Logger::new`](super::Logger::new).

use super::destination::Destination;
use super::error::{LoggerError, Result};
use super::flags::FormatFlags;
use super::glyphs::Glyphs;
use super::logger::Logger;
use crate::destinations::{ConsoleDestination, ConsoleStream};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationConfig {
    #[default]
    Stdout,
    Stderr,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    #[default]
    Emoji,
    Ascii,
    Custom(Glyphs),
}

impl GlyphSet {
    pub fn resolve(&self) -> Glyphs {
        match self {
            GlyphSet::Emoji => Glyphs::emoji(),
            GlyphSet::Ascii => Glyphs::ascii(),
            GlyphSet::Custom(glyphs) => glyphs.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub prefix: String,
    /// Flag names, see [`FormatFlags::from_names`]
    pub flags: Vec<String>,
    pub destination: DestinationConfig,
    pub glyphs: GlyphSet,
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger config",
                path.display().to_string(),
                e,
            )
        })?;
        Self::from_json_str(&json)
    }

    pub fn format_flags(&self) -> Result<FormatFlags> {
        FormatFlags::from_names(&self.flags)
    }

    fn open_destination(&self) -> Result<Box<dyn Destination>> {
        match &self.destination {
            DestinationConfig::Stdout => Ok(Box::new(ConsoleDestination::from(ConsoleStream::Stdout))),
            DestinationConfig::Stderr => Ok(Box::new(ConsoleDestination::from(ConsoleStream::Stderr))),
            #[cfg(feature = "file")]
            DestinationConfig::File(path) => {
                Ok(Box::new(crate::destinations::FileDestination::new(path)?))
            }
            #[cfg(not(feature = "file"))]
            DestinationConfig::File(path) => Err(LoggerError::config(
                "destination",
                format!(
                    "file destination '{}' requires the `file` feature",
                    path.display()
                ),
            )),
        }
    }

    pub fn build(&self) -> Result<Logger> {
        let flags = self.format_flags()?;
        let destination = self.open_destination()?;
        Ok(Logger::builder()
            .boxed_destination(destination)
            .prefix(self.prefix.as_str())
            .flags(flags)
            .glyphs(self.glyphs.resolve())
            .build())
    }
}

impl Logger {
    /// Build a logger from a [`LoggerConfig`].
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_matches_new() {
        let config = LoggerConfig::from_json_str("{}").unwrap();
        let logger = Logger::from_config(&config).unwrap();
        assert_eq!(logger.prefix(), "");
        assert_eq!(logger.flags(), FormatFlags::DATE);
        assert_eq!(logger.glyphs(), &Glyphs::emoji());
    }

    #[test]
    fn test_full_config() {
        let config = LoggerConfig::from_json_str(
            r#"{"prefix": "api", "flags": ["time", "utc"], "destination": "stderr", "glyphs": "ascii"}"#,
        )
        .unwrap();
        assert_eq!(config.destination, DestinationConfig::Stderr);

        let logger = Logger::from_config(&config).unwrap();
        assert_eq!(logger.prefix(), "api ");
        assert_eq!(logger.flags(), FormatFlags::TIME | FormatFlags::UTC);
        assert_eq!(logger.glyphs().error, "[!]");
    }

    #[test]
    fn test_custom_glyphs() {
        let config =
            LoggerConfig::from_json_str(r#"{"glyphs": {"custom": {"zero": "(0)"}}}"#).unwrap();
        let glyphs = config.glyphs.resolve();
        assert_eq!(glyphs.zero, "(0)");
        assert_eq!(glyphs.non_zero, Glyphs::emoji().non_zero);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let config = LoggerConfig::from_json_str(r#"{"flags": ["date", "weekday"]}"#).unwrap();
        let err = Logger::from_config(&config).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = LoggerConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[cfg(feature = "file")]
    #[test]
    fn test_file_destination_from_config() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_file = temp_dir.path().join("configured.log");
        let config_file = temp_dir.path().join("logger.json");

        let config = LoggerConfig {
            prefix: "cfg".to_string(),
            flags: vec!["msgprefix".to_string()],
            destination: DestinationConfig::File(log_file.clone()),
            glyphs: GlyphSet::Emoji,
        };
        std::fs::write(&config_file, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = LoggerConfig::from_json_file(&config_file).unwrap();
        assert_eq!(loaded, config);

        let logger = Logger::from_config(&loaded).unwrap();
        logger.print_value("ready", true);
        drop(logger);

        let content = std::fs::read_to_string(&log_file).unwrap();
        assert!(content.starts_with("cfg :\n"));
        assert!(content.contains("ready"));
    }

    #[test]
    fn test_missing_config_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = LoggerConfig::from_json_file(temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }
}
