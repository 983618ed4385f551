//! Sequence and mapping tables with default and custom padding.

use std::collections::BTreeMap;
use threat_logger::prelude::*;

fn main() {
    let logger = Logger::builder()
        .prefix("tables")
        .flags(FormatFlags::STD | FormatFlags::MSG_PREFIX)
        .build();

    let primes = [2, 3, 5, 7, 11];
    logger.print_sequence("primes", &primes);
    logger.print_sequence_padding("primes", &primes, 12);

    let mut scores: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    scores.insert("alice", vec![9.5, 8.0]);
    scores.insert("bob", vec![]);
    scores.insert("carol", vec![7.25]);
    logger.print_mapping("scores", &scores);

    let ascii = Logger::builder()
        .glyphs(Glyphs::ascii())
        .flags(FormatFlags::MSG_PREFIX)
        .build();
    ascii.print_value("plain", "no emoji here");
    ascii.print_sequence_padding("words", &["alpha", "beta"], 0);
}
