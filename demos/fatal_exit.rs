//! Reports a fatal error and exits with status 1.
//!
//! Run with `cargo run --example fatal_exit; echo $?`.

use threat_logger::prelude::*;

fn main() {
    let logger = Logger::builder()
        .destination(ConsoleDestination::stderr())
        .prefix("svc")
        .flags(FormatFlags::STD | FormatFlags::UTC)
        .build();

    logger.print_value("attempts", 3);
    match std::fs::read_to_string("/definitely/not/here.toml") {
        Ok(contents) => logger.print_value("config", contents),
        Err(err) => logger.fatal(err),
    }
}
