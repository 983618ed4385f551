//! Basic usage: value lines, errors and a scoped printer on stdout.

use std::collections::HashMap;
use threat_logger::prelude::*;
use threat_logger::print_value;

fn main() {
    let logger = Logger::new(None, "Alex", FormatFlags::TIME);

    let mut dictionary = HashMap::new();
    dictionary.insert("barrage", "artillery bombardment");
    dictionary.insert("debugging", "removing errors");
    logger.print_value("dictionary", dictionary.clone());

    let retries = 0;
    print_value!(logger, retries);
    logger.print_value("user", "");
    logger.print_value("ratio", 0.75);

    let err = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer went away");
    logger.print_error(&err, 3);
    logger.print_error("minor glitch", 0);

    let printer = logger.make_printer("main");
    printer.print_value("dictionary", dictionary.len());
    printer.print_error("cache miss", 2);

    logger.print_mapping("dictionary", &dictionary);
}
