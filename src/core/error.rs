//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// File destination error with path
    #[error("File destination error for '{path}': {message}")]
    FileDestinationError { path: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a file destination error
    pub fn file_destination(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileDestinationError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("FormatFlags", "unknown flag 'weekday'");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::file_destination("/var/log/app.log", "Permission denied");
        assert!(matches!(err, LoggerError::FileDestinationError { .. }));

        let err = LoggerError::writer("destination closed");
        assert!(matches!(err, LoggerError::WriterError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("FormatFlags", "unknown flag 'weekday'");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for FormatFlags: unknown flag 'weekday'"
        );

        let err = LoggerError::file_destination("/var/log/app.log", "Disk full");
        assert_eq!(
            err.to_string(),
            "File destination error for '/var/log/app.log': Disk full"
        );
    }

    #[test]
    fn test_writer_error_display() {
        let err = LoggerError::writer("File writer not initialized");
        assert_eq!(err.to_string(), "Writer error: File writer not initialized");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("writing log line", "cannot write to stdout", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing log line"));
        assert!(err.to_string().contains("cannot write to stdout"));
    }
}
