//! Macros that take the printed name from the variable itself.
//!
//! # Examples
//!
//! ```
//! use threat_logger::prelude::*;
//! use threat_logger::{print_error, print_value, print_values};
//!
//! let buffer = MemoryDestination::new();
//! let logger = Logger::builder().destination(buffer.clone()).build();
//!
//! let retries = 3;
//! let user = "";
//! print_value!(logger, retries);
//! print_values!(logger, retries, user);
//! print_error!(logger, "connection reset", 4);
//!
//! assert!(buffer.contents().contains("retries"));
//! ```

/// Print a named value. With a bare identifier the name is the identifier.
///
/// # Examples
///
/// ```
/// # use threat_logger::prelude::*;
/// # let logger = Logger::builder().destination(MemoryDestination::new()).build();
/// use threat_logger::print_value;
/// let count = 0;
/// print_value!(logger, count);
/// print_value!(logger, "count + 1", count + 1);
/// ```
#[macro_export]
macro_rules! print_value {
    ($logger:expr, $var:ident) => {
        $logger.print_value(stringify!($var), $var.clone())
    };
    ($logger:expr, $name:expr, $value:expr) => {
        $logger.print_value($name, $value)
    };
}

/// Print several variables, one line each, named after the identifiers.
///
/// # Examples
///
/// ```
/// # use threat_logger::prelude::*;
/// # let logger = Logger::builder().destination(MemoryDestination::new()).build();
/// use threat_logger::print_values;
/// let (width, height) = (640, 0);
/// print_values!(logger, width, height);
/// ```
#[macro_export]
macro_rules! print_values {
    ($logger:expr, $($var:ident),+ $(,)?) => {
        $( $crate::print_value!($logger, $var); )+
    };
}

/// Print an error. The threat level defaults to 1.
///
/// # Examples
///
/// ```
/// # use threat_logger::prelude::*;
/// # let logger = Logger::builder().destination(MemoryDestination::new()).build();
/// use threat_logger::print_error;
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config missing");
/// print_error!(logger, &err);
/// print_error!(logger, err, 3);
/// ```
#[macro_export]
macro_rules! print_error {
    ($logger:expr, $err:expr) => {
        $logger.print_error($err, 1)
    };
    ($logger:expr, $err:expr, $level:expr) => {
        $logger.print_error($err, $level)
    };
}
