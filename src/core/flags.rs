//! Line header flags
//!
//! Flags select what the line writer puts in front of every entry: the
//! date, the wall-clock time (optionally with microseconds), and where the
//! writer prefix goes relative to them.

use super::error::{LoggerError, Result};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// Bit set of header flags.
///
/// # Examples
///
/// ```
/// use threat_logger::FormatFlags;
///
/// let flags = FormatFlags::DATE | FormatFlags::TIME;
/// assert_eq!(flags, FormatFlags::STD);
/// assert!(flags.contains(FormatFlags::TIME));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatFlags(u8);

impl FormatFlags {
    /// No header at all
    pub const NONE: FormatFlags = FormatFlags(0);
    /// Local date: `2009/01/23 `
    pub const DATE: FormatFlags = FormatFlags(1);
    /// Local time: `01:23:23 `
    pub const TIME: FormatFlags = FormatFlags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123 `. Implies `TIME`.
    pub const MICROSECONDS: FormatFlags = FormatFlags(1 << 2);
    /// Use UTC rather than the local time zone
    pub const UTC: FormatFlags = FormatFlags(1 << 3);
    /// Move the prefix from the start of the line to just before the message
    pub const MSG_PREFIX: FormatFlags = FormatFlags(1 << 4);
    /// Initial values for a standard logger
    pub const STD: FormatFlags = FormatFlags(Self::DATE.0 | Self::TIME.0);

    const NAMES: [(&'static str, FormatFlags); 5] = [
        ("date", Self::DATE),
        ("time", Self::TIME),
        ("microseconds", Self::MICROSECONDS),
        ("utc", Self::UTC),
        ("msgprefix", Self::MSG_PREFIX),
    ];

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn contains(&self, other: FormatFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Build flags from names such as `["date", "time"]`.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        names.iter().try_fold(FormatFlags::NONE, |acc, name| {
            let name = name.as_ref().trim().to_lowercase();
            match name.as_str() {
                "std" => Ok(acc | FormatFlags::STD),
                "" | "none" => Ok(acc),
                other => Self::NAMES
                    .iter()
                    .find(|(n, _)| *n == other)
                    .map(|(_, flag)| acc | *flag)
                    .ok_or_else(|| {
                        LoggerError::config("FormatFlags", format!("unknown flag '{}'", other))
                    }),
            }
        })
    }

    fn has_timestamp(&self) -> bool {
        self.0 & (Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0) != 0
    }

    /// Render the timestamp part of a header for `now`.
    ///
    /// Returns an empty string when no date or time flag is set.
    #[must_use]
    pub fn format_timestamp(&self, now: &DateTime<Utc>) -> String {
        if !self.has_timestamp() {
            return String::new();
        }
        if self.contains(Self::UTC) {
            self.format_in_zone(now)
        } else {
            self.format_in_zone(&now.with_timezone(&Local))
        }
    }

    fn format_in_zone<Tz: chrono::TimeZone>(&self, t: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        let mut out = String::with_capacity(28);
        if self.contains(Self::DATE) {
            out.push_str(&t.format("%Y/%m/%d ").to_string());
        }
        if self.contains(Self::TIME) || self.contains(Self::MICROSECONDS) {
            out.push_str(&t.format("%H:%M:%S").to_string());
            if self.contains(Self::MICROSECONDS) {
                out.push_str(&t.format("%.6f").to_string());
            }
            out.push(' ');
        }
        out
    }
}

impl BitOr for FormatFlags {
    type Output = FormatFlags;

    fn bitor(self, rhs: Self) -> Self::Output {
        FormatFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for FormatFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for FormatFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect();
        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}

impl FromStr for FormatFlags {
    type Err = LoggerError;

    /// Parse a `|`- or `,`-separated list of flag names.
    fn from_str(s: &str) -> Result<Self> {
        let names: Vec<&str> = s.split(['|', ',']).collect();
        Self::from_names(&names)
    }
}
