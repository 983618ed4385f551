//! Marker glyphs used when rendering lines
//!
//! The default set is emoji. [`Glyphs::ascii`] is available for terminals
//! that cannot render emoji; it is never picked automatically.

use super::threat_level::{LEVEL_GLYPHS, UNKNOWN_LEVEL_GLYPH};
use serde::{Deserialize, Serialize};

pub const ERROR_MARK: &str = "\u{2757}";
pub const FATAL_MARK: &str = "\u{2622}";
pub const NON_ZERO_MARK: &str = "\u{2705}";
pub const ZERO_MARK: &str = "\u{274c}";
pub const VALUE_OPEN: &str = "\u{1f449}";
pub const VALUE_CLOSE: &str = "\u{1f448}";

/// Full glyph set: value/error markers and one glyph per threat level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    pub error: String,
    pub fatal: String,
    pub non_zero: String,
    pub zero: String,
    pub value_open: String,
    pub value_close: String,
    pub levels: [String; 11],
    pub unknown_level: String,
}

impl Glyphs {
    pub fn emoji() -> Self {
        Self {
            error: ERROR_MARK.to_string(),
            fatal: FATAL_MARK.to_string(),
            non_zero: NON_ZERO_MARK.to_string(),
            zero: ZERO_MARK.to_string(),
            value_open: VALUE_OPEN.to_string(),
            value_close: VALUE_CLOSE.to_string(),
            levels: LEVEL_GLYPHS.map(String::from),
            unknown_level: UNKNOWN_LEVEL_GLYPH.to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            error: "[!]".to_string(),
            fatal: "[X]".to_string(),
            non_zero: "[+]".to_string(),
            zero: "[0]".to_string(),
            value_open: ">".to_string(),
            value_close: "<".to_string(),
            levels: std::array::from_fn(|i| format!("L{}", i)),
            unknown_level: "L?".to_string(),
        }
    }

    /// Glyph for `level`, or the unknown glyph outside 0..=10.
    pub fn level(&self, level: i64) -> &str {
        usize::try_from(level)
            .ok()
            .and_then(|idx| self.levels.get(idx))
            .unwrap_or(&self.unknown_level)
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::emoji()
    }
}
