//! Threat level definitions and the level-to-glyph table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Glyphs for threat levels 0 through 10, indexed by level.
pub const LEVEL_GLYPHS: [&str; 11] = [
    "0\u{fe0f}\u{20e3}",
    "1\u{fe0f}\u{20e3}",
    "2\u{fe0f}\u{20e3}",
    "3\u{fe0f}\u{20e3}",
    "4\u{fe0f}\u{20e3}",
    "5\u{fe0f}\u{20e3}",
    "6\u{fe0f}\u{20e3}",
    "7\u{fe0f}\u{20e3}",
    "8\u{fe0f}\u{20e3}",
    "9\u{fe0f}\u{20e3}",
    "\u{1f51f}",
];

/// Glyph shown for a level outside 0..=10.
pub const UNKNOWN_LEVEL_GLYPH: &str = "\u{2754}";

/// Raw table lookup. Out-of-range levels get [`UNKNOWN_LEVEL_GLYPH`].
pub fn glyph_for(level: i64) -> &'static str {
    usize::try_from(level)
        .ok()
        .and_then(|idx| LEVEL_GLYPHS.get(idx))
        .copied()
        .unwrap_or(UNKNOWN_LEVEL_GLYPH)
}

/// How urgent a logged condition is: 0 is informational, 5 is fatal, 10 is the top of the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ThreatLevel(u8);

impl ThreatLevel {
    pub const MIN: ThreatLevel = ThreatLevel(0);
    pub const MAX: ThreatLevel = ThreatLevel(10);

    /// Level used for non-empty values.
    pub const FINE: ThreatLevel = ThreatLevel(0);
    /// Level used for empty values and the floor for reported errors.
    pub const NOTICE: ThreatLevel = ThreatLevel(1);
    /// Level always used by `fatal`.
    pub const FATAL: ThreatLevel = ThreatLevel(5);

    pub fn new(level: i64) -> Option<Self> {
        u8::try_from(level)
            .ok()
            .filter(|l| *l <= Self::MAX.0)
            .map(ThreatLevel)
    }

    /// Raise levels below 1 to 1. Levels above 10 are not clamped and
    /// render with the unknown glyph.
    pub fn coerce_error(level: i64) -> i64 {
        level.max(i64::from(Self::NOTICE.0))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn glyph(&self) -> &'static str {
        LEVEL_GLYPHS[usize::from(self.0)]
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl TryFrom<u8> for ThreatLevel {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        ThreatLevel::new(i64::from(level))
            .ok_or_else(|| format!("Threat level out of range [0, 10]: {}", level))
    }
}

impl From<ThreatLevel> for u8 {
    fn from(level: ThreatLevel) -> Self {
        level.0
    }
}

impl FromStr for ThreatLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_uppercase().as_str() {
            "FINE" => return Ok(ThreatLevel::FINE),
            "NOTICE" => return Ok(ThreatLevel::NOTICE),
            "FATAL" => return Ok(ThreatLevel::FATAL),
            _ => {}
        }
        trimmed
            .parse::<i64>()
            .ok()
            .and_then(ThreatLevel::new)
            .ok_or_else(|| format!("Invalid threat level: '{}'", s))
    }
}
