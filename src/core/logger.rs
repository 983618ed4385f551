//! Logger facade

use super::{
    destination::Destination,
    flags::FormatFlags,
    format::{self, Scope},
    glyphs::Glyphs,
    line_writer::LineWriter,
    metrics::LoggerMetrics,
    printer::Printer,
    table::{self, TableKey, TableValue, DEFAULT_PADDING, MAX_PADDING},
    value::Value,
};
use super::error::Result;
use crate::destinations::ConsoleDestination;
use std::fmt;

/// Process exit status used by `fatal`.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Called by `fatal` after the line is flushed. Must not return.
pub type ExitHook = fn(i32) -> !;

/// Collapse trailing spaces to exactly one. An empty (or all-space) prefix
/// becomes empty.
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_end_matches(' ');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{} ", trimmed)
    }
}

/// Prints errors and named values as decorated lines, and sequences and
/// maps as ASCII tables.
///
/// A logger is immutable once built and can be shared by reference across
/// threads; each entry is written and flushed under the destination lock.
///
/// # Example
///
/// ```
/// use threat_logger::{FormatFlags, Logger, MemoryDestination};
///
/// let buffer = MemoryDestination::new();
/// let logger = Logger::new(Some(Box::new(buffer.clone())), "Alex", FormatFlags::NONE);
///
/// assert_eq!(logger.prefix(), "Alex ");
/// assert_eq!(logger.flags(), FormatFlags::DATE);
///
/// logger.print_value("retries", 3);
/// assert!(buffer.contents().contains("retries"));
/// ```
pub struct Logger {
    writer: LineWriter,
    glyphs: Glyphs,
    metrics: LoggerMetrics,
    exit_hook: ExitHook,
}

impl Logger {
    /// Build a logger writing to `destination` (standard output when
    /// `None`). Empty `flags` become [`FormatFlags::DATE`].
    #[must_use]
    pub fn new(destination: Option<Box<dyn Destination>>, prefix: &str, flags: FormatFlags) -> Self {
        let destination =
            destination.unwrap_or_else(|| Box::new(ConsoleDestination::stdout()));
        Self::from_parts(destination, prefix, flags, Glyphs::default(), std::process::exit)
    }

    fn from_parts(
        destination: Box<dyn Destination>,
        prefix: &str,
        flags: FormatFlags,
        glyphs: Glyphs,
        exit_hook: ExitHook,
    ) -> Self {
        let flags = if flags.is_empty() { FormatFlags::DATE } else { flags };
        Self {
            writer: LineWriter::new(destination, normalize_prefix(prefix), flags),
            glyphs,
            metrics: LoggerMetrics::new(),
            exit_hook,
        }
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn prefix(&self) -> &str {
        self.writer.prefix()
    }

    pub fn flags(&self) -> FormatFlags {
        self.writer.flags()
    }

    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.flush()
    }

    /// Derive a printer that tags every line with `"{prefix}{name} "`.
    ///
    /// The printer always writes to standard output with no header flags,
    /// whatever this logger's destination and flags are.
    pub fn make_printer(&self, name: impl Into<String>) -> Printer<'_> {
        Printer::new(name.into(), self)
    }

    pub fn render_value(&self, name: &str, value: &Value) -> String {
        format::render_value(&self.glyphs, name, value, None)
    }

    pub fn render_error(&self, err: &dyn fmt::Display, level: i64) -> String {
        format::render_error(&self.glyphs, err, level, None)
    }

    pub fn render_fatal(&self, err: &dyn fmt::Display) -> String {
        format::render_fatal(&self.glyphs, err, None)
    }

    /// Print the error with threat level `level`, raised to 1 if lower.
    pub fn print_error(&self, err: impl fmt::Display, level: i64) {
        let line = self.render_error(&err, level);
        self.record(self.writer.output(&line));
    }

    /// Print the error at threat level 5, then terminate the process with
    /// exit status 1.
    ///
    /// This is an abrupt halt: the line is written and flushed, and then
    /// the exit hook runs. No destructors run and no unwinding happens with
    /// the default hook (`std::process::exit`).
    pub fn fatal(&self, err: impl fmt::Display) -> ! {
        let line = self.render_fatal(&err);
        self.record(self.writer.output(&line));
        self.terminate()
    }

    /// Print `name` and `value`, marked as zero (level 1) when the value is
    /// absent, integer zero or the empty string, and as non-zero (level 0)
    /// otherwise.
    pub fn print_value(&self, name: &str, value: impl Into<Value>) {
        let line = self.render_value(name, &value.into());
        self.record(self.writer.output(&line));
    }

    /// Print `elements` as a `| index | value |` table with the default rule.
    pub fn print_sequence<T: TableValue>(&self, name: &str, elements: &[T]) {
        self.print_sequence_padding(name, elements, DEFAULT_PADDING);
    }

    /// Print `elements` as a table whose rules are `padding` dashes long.
    pub fn print_sequence_padding<T: TableValue>(&self, name: &str, elements: &[T], padding: i64) {
        warn_on_capped_padding(name, padding);
        let block = table::render_sequence(name, elements, padding);
        self.record(self.writer.println(&block));
    }

    /// Print `pairs` as a `| key | value |` table with the default rule.
    ///
    /// Rows follow the iteration order of `pairs`.
    pub fn print_mapping<K, V, I>(&self, name: &str, pairs: I)
    where
        K: TableKey,
        V: TableValue,
        I: IntoIterator<Item = (K, V)>,
    {
        self.print_mapping_padding(name, pairs, DEFAULT_PADDING);
    }

    pub fn print_mapping_padding<K, V, I>(&self, name: &str, pairs: I, padding: i64)
    where
        K: TableKey,
        V: TableValue,
        I: IntoIterator<Item = (K, V)>,
    {
        warn_on_capped_padding(name, padding);
        let block = table::render_mapping(name, pairs, padding);
        self.record(self.writer.println(&block));
    }

    pub(crate) fn scope<'a>(&'a self, name: &'a str) -> Scope<'a> {
        Scope::new(self.prefix(), name)
    }

    /// Count the outcome of a write; failures go to stderr, never to the caller.
    pub(crate) fn record(&self, result: Result<()>) {
        match result {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => {
                self.metrics.record_failed();
                eprintln!("[LOGGER ERROR] Write failed: {}", e);
            }
        }
    }

    pub(crate) fn terminate(&self) -> ! {
        self.metrics.record_fatal();
        if let Err(e) = self.writer.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        (self.exit_hook)(FATAL_EXIT_CODE)
    }
}

fn warn_on_capped_padding(name: &str, padding: i64) -> bool {
    if padding > MAX_PADDING {
        eprintln!(
            "[LOGGER WARNING] Padding {} for table '{}' exceeds {}; rule capped",
            padding, name, MAX_PADDING
        );
        return true;
    }
    false
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(None, "", FormatFlags::NONE)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("writer", &self.writer)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use threat_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .destination(ConsoleDestination::stderr())
///     .prefix("worker")
///     .flags(FormatFlags::STD | FormatFlags::MICROSECONDS)
///     .glyphs(Glyphs::ascii())
///     .build();
///
/// assert_eq!(logger.prefix(), "worker ");
/// ```
pub struct LoggerBuilder {
    destination: Option<Box<dyn Destination>>,
    prefix: String,
    flags: FormatFlags,
    glyphs: Glyphs,
    exit_hook: ExitHook,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            destination: None,
            prefix: String::new(),
            flags: FormatFlags::NONE,
            glyphs: Glyphs::default(),
            exit_hook: std::process::exit,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn destination<D: Destination + 'static>(mut self, destination: D) -> Self {
        self.destination = Some(Box::new(destination));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_destination(mut self, destination: Box<dyn Destination>) -> Self {
        self.destination = Some(destination);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Header flags. Leaving them empty gives [`FormatFlags::DATE`].
    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: FormatFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Replace `std::process::exit` as the action taken by `fatal`.
    #[must_use = "builder methods return a new value"]
    pub fn exit_hook(mut self, hook: ExitHook) -> Self {
        self.exit_hook = hook;
        self
    }

    pub fn build(self) -> Logger {
        let destination = self
            .destination
            .unwrap_or_else(|| Box::new(ConsoleDestination::stdout()));
        Logger::from_parts(destination, &self.prefix, self.flags, self.glyphs, self.exit_hook)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;
    use crate::core::threat_level::glyph_for;
    use crate::destinations::MemoryDestination;

    struct FailingDestination;

    impl Destination for FailingDestination {
        fn write_all(&mut self, _bytes: &[u8]) -> Result<()> {
            Err(LoggerError::writer("refused"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn capture() -> (Logger, MemoryDestination) {
        let buffer = MemoryDestination::new();
        let logger = Logger::builder()
            .destination(buffer.clone())
            .flags(FormatFlags::MSG_PREFIX)
            .build();
        (logger, buffer)
    }

    #[test]
    fn test_prefix_normalization() {
        assert_eq!(normalize_prefix("Alex"), "Alex ");
        assert_eq!(normalize_prefix("Alex "), "Alex ");
        assert_eq!(normalize_prefix("Alex   "), "Alex ");
        assert_eq!(normalize_prefix(""), "");
        assert_eq!(normalize_prefix("   "), "");
    }

    #[test]
    fn test_new_defaults() {
        let logger = Logger::new(None, "Alex", FormatFlags::NONE);
        assert_eq!(logger.prefix(), "Alex ");
        assert_eq!(logger.flags(), FormatFlags::DATE);
        assert_eq!(logger.writer.destination_name(), "stdout");

        let logger = Logger::new(None, "", FormatFlags::TIME);
        assert_eq!(logger.prefix(), "");
        assert_eq!(logger.flags(), FormatFlags::TIME);
    }

    #[test]
    fn test_print_value_writes_one_entry() {
        let (logger, buffer) = capture();
        logger.print_value("answer", 42);

        assert_eq!(buffer.contents(), logger.render_value("answer", &Value::from(42)));
        assert_eq!(logger.metrics().lines_written(), 1);
    }

    #[test]
    fn test_print_error_gets_trailing_newline() {
        let (logger, buffer) = capture();
        logger.print_error("boom", 0);

        let contents = buffer.contents();
        assert_eq!(contents, format!("{}\n", logger.render_error(&"boom", 1)));
        assert!(contents.ends_with(&format!("T.H. {}\n", glyph_for(1))));
    }

    #[test]
    fn test_print_sequence_uses_println() {
        let (logger, buffer) = capture();
        logger.print_sequence_padding("nums", &[1, 2], 3);

        assert_eq!(
            buffer.contents(),
            format!("{}\n", table::render_sequence("nums", &[1, 2], 3))
        );
    }

    #[test]
    fn test_print_mapping_default_padding() {
        let (logger, buffer) = capture();
        logger.print_mapping("empty", Vec::<(&str, i32)>::new());

        assert_eq!(
            buffer.contents(),
            format!(": empty:\n\t{}\n\t \n", "-".repeat(30))
        );
    }

    #[test]
    fn test_oversized_padding_is_capped_with_warning() {
        assert!(warn_on_capped_padding("nums", i64::MAX));
        assert!(!warn_on_capped_padding("nums", MAX_PADDING));
        assert!(!warn_on_capped_padding("nums", -1));

        let (logger, buffer) = capture();
        logger.print_sequence_padding("nums", &[7], i64::MAX);
        assert_eq!(
            buffer.contents(),
            format!("{}\n", table::render_sequence("nums", &[7], MAX_PADDING))
        );
        assert_eq!(logger.metrics().lines_written(), 1);
    }

    #[test]
    fn test_write_failures_are_counted_not_raised() {
        let logger = Logger::builder().destination(FailingDestination).build();
        logger.print_value("x", 1);
        logger.print_error("y", 3);

        assert_eq!(logger.metrics().failed_writes(), 2);
        assert_eq!(logger.metrics().lines_written(), 0);
    }

    #[test]
    fn test_make_printer_keeps_back_reference() {
        let logger = Logger::new(None, "Alex", FormatFlags::STD);
        let printer = logger.make_printer("main");
        assert_eq!(printer.name(), "main");
        assert_eq!(printer.logger().prefix(), "Alex ");
    }
}
