//! Scoped printer derived from a logger

use super::format;
use super::line_writer::LineWriter;
use super::logger::Logger;
use super::value::Value;
use std::fmt;

/// Tags lines with a call-site name.
///
/// Lines start with `"{logger prefix}{name} :"` and always go to standard
/// output without a date or time header, regardless of the parent
/// logger's destination and flags. Glyphs, metrics and the exit hook are
/// taken from the parent, which must outlive the printer.
///
/// # Example
///
/// ```
/// use threat_logger::{FormatFlags, Logger};
///
/// let logger = Logger::new(None, "Alex", FormatFlags::STD);
/// let printer = logger.make_printer("main");
///
/// let line = printer.render_value("answer", &42.into());
/// assert!(line.starts_with("Alex main "));
/// ```
pub struct Printer<'a> {
    name: String,
    logger: &'a Logger,
    writer: LineWriter,
}

impl<'a> Printer<'a> {
    pub(crate) fn new(name: String, logger: &'a Logger) -> Self {
        Self {
            name,
            logger,
            writer: LineWriter::plain_stdout(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn logger(&self) -> &'a Logger {
        self.logger
    }

    pub fn render_value(&self, name: &str, value: &Value) -> String {
        format::render_value(
            self.logger.glyphs(),
            name,
            value,
            Some(self.logger.scope(&self.name)),
        )
    }

    pub fn render_error(&self, err: &dyn fmt::Display, level: i64) -> String {
        format::render_error(
            self.logger.glyphs(),
            err,
            level,
            Some(self.logger.scope(&self.name)),
        )
    }

    pub fn render_fatal(&self, err: &dyn fmt::Display) -> String {
        format::render_fatal(self.logger.glyphs(), err, Some(self.logger.scope(&self.name)))
    }

    /// Print the error with threat level `level`, raised to 1 if lower.
    pub fn print_error(&self, err: impl fmt::Display, level: i64) {
        let line = self.render_error(&err, level);
        self.logger.record(self.writer.output(&line));
    }

    /// Print the error at threat level 5 and terminate the process with
    /// exit status 1. See [`Logger::fatal`].
    pub fn fatal(&self, err: impl fmt::Display) -> ! {
        let line = self.render_fatal(&err);
        self.logger.record(self.writer.output(&line));
        if let Err(e) = self.writer.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        self.logger.terminate()
    }

    pub fn print_value(&self, name: &str, value: impl Into<Value>) {
        let line = self.render_value(name, &value.into());
        self.logger.record(self.writer.output(&line));
    }
}

impl fmt::Debug for Printer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer")
            .field("name", &self.name)
            .field("prefix", &self.logger.prefix())
            .finish()
    }
}
