//! Value and error line rendering
//!
//! Every function here is pure: it returns the text handed to the line
//! writer and never touches a destination. Lines look like
//!
//! ```text
//! :
//! ✅	{ 👉 retries        : 3               👈 }          T.H. 0️⃣
//! ```
//!
//! The name and value columns are padded (never truncated) to
//! [`NAME_WIDTH`] and [`VALUE_WIDTH`] characters, and the whole block is
//! padded to [`BLOCK_WIDTH`] before the `T.H.` (threat level) label.

use super::glyphs::Glyphs;
use super::threat_level::ThreatLevel;
use super::value::Value;
use std::fmt::Display;

pub const NAME_WIDTH: usize = 15;
pub const VALUE_WIDTH: usize = 15;
pub const BLOCK_WIDTH: usize = 50;
pub const SCOPED_ERROR_BLOCK_WIDTH: usize = 60;

/// Call-site tag placed in front of scoped lines: `"{prefix}{name} :"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope<'a> {
    pub prefix: &'a str,
    pub name: &'a str,
}

impl<'a> Scope<'a> {
    pub fn new(prefix: &'a str, name: &'a str) -> Self {
        Self { prefix, name }
    }
}

/// Marker and threat level for a value: zero marker at level 1 for empty
/// values, non-zero marker at level 0 otherwise.
pub fn value_marker<'g>(glyphs: &'g Glyphs, value: &Value) -> (&'g str, ThreatLevel) {
    if value.is_empty() {
        (glyphs.zero.as_str(), ThreatLevel::NOTICE)
    } else {
        (glyphs.non_zero.as_str(), ThreatLevel::FINE)
    }
}

pub fn render_value(glyphs: &Glyphs, name: &str, value: &Value, scope: Option<Scope<'_>>) -> String {
    let (mark, level) = value_marker(glyphs, value);
    let body = format!(
        "{mark}\t{{ {open} {name:<nw$}: {value:<vw$} {close} }}",
        mark = mark,
        open = glyphs.value_open,
        close = glyphs.value_close,
        name = name,
        value = value,
        nw = NAME_WIDTH,
        vw = VALUE_WIDTH,
    );
    let block = match scope {
        Some(scope) => format!("{}{} :\n{}\t", scope.prefix, scope.name, body),
        None => format!(":\n{}", body),
    };
    format!(
        "{:<width$} T.H. {}\n",
        block,
        glyphs.level(i64::from(level.value())),
        width = BLOCK_WIDTH
    )
}

/// Render a reported error. Levels below 1 are raised to 1; levels above
/// 10 render with the unknown-level glyph.
pub fn render_error(glyphs: &Glyphs, err: &dyn Display, level: i64, scope: Option<Scope<'_>>) -> String {
    let level = ThreatLevel::coerce_error(level);
    let body = format!(
        "{mark}\t{{ {mark}: {msg:<w$} {mark} }}",
        mark = glyphs.error,
        msg = err.to_string(),
        w = VALUE_WIDTH,
    );
    let (block, width) = match scope {
        Some(scope) => (
            format!("{}{} :\n{}", scope.prefix, scope.name, body),
            SCOPED_ERROR_BLOCK_WIDTH,
        ),
        None => (format!(":\n{}", body), BLOCK_WIDTH),
    };
    format!("{:<width$} T.H. {}", block, glyphs.level(level), width = width)
}

/// Render the line written just before the process is terminated. Always
/// threat level 5.
pub fn render_fatal(glyphs: &Glyphs, err: &dyn Display, scope: Option<Scope<'_>>) -> String {
    let body = format!(
        "{mark}\t {{ {mark} : {msg:<w$} {mark} }}",
        mark = glyphs.fatal,
        msg = err.to_string(),
        w = VALUE_WIDTH,
    );
    let glyph = glyphs.level(i64::from(ThreatLevel::FATAL.value()));
    match scope {
        Some(scope) => format!(
            "{}{} :\n{}\t\tT.H. {}\n",
            scope.prefix, scope.name, body, glyph
        ),
        None => format!(":\n{} \t\tT.H. {}\n", body, glyph),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::threat_level::{glyph_for, UNKNOWN_LEVEL_GLYPH};

    #[test]
    fn test_non_empty_value_line() {
        let glyphs = Glyphs::default();
        let line = render_value(&glyphs, "retries", &Value::from(3), None);

        let expected_block = format!(
            ":\n\u{2705}\t{{ \u{1f449} {:<15}: {:<15} \u{1f448} }}",
            "retries", "3"
        );
        assert_eq!(
            line,
            format!("{:<50} T.H. {}\n", expected_block, glyph_for(0))
        );
    }

    #[test]
    fn test_empty_value_uses_zero_marker_and_level_one() {
        let glyphs = Glyphs::default();
        let line = render_value(&glyphs, "name", &Value::from(""), None);
        assert!(line.contains(&glyphs.zero));
        assert!(!line.contains(&glyphs.non_zero));
        assert!(line.ends_with(&format!("T.H. {}\n", glyph_for(1))));
    }

    #[test]
    fn test_scoped_value_starts_with_scope() {
        let glyphs = Glyphs::default();
        let line = render_value(
            &glyphs,
            "count",
            &Value::from(0),
            Some(Scope::new("Alex ", "main")),
        );
        assert!(line.starts_with("Alex main :\n"));
        assert!(line.contains("👈 }\t"));
    }

    #[test]
    fn test_long_names_are_not_truncated() {
        let glyphs = Glyphs::default();
        let name = "a_really_long_variable_name";
        let line = render_value(&glyphs, name, &Value::from(1), None);
        assert!(line.contains(&format!("{}: ", name)));
    }

    #[test]
    fn test_error_level_coercion() {
        let glyphs = Glyphs::default();
        let err = "disk on fire";
        for level in [-3, 0, 1] {
            let line = render_error(&glyphs, &err, level, None);
            assert!(line.ends_with(&format!("T.H. {}", glyph_for(1))));
        }
        for level in 2..=10 {
            let line = render_error(&glyphs, &err, level, None);
            assert!(line.ends_with(&format!("T.H. {}", glyph_for(level))));
        }
        let line = render_error(&glyphs, &err, 11, None);
        assert!(line.ends_with(&format!("T.H. {}", UNKNOWN_LEVEL_GLYPH)));
    }

    #[test]
    fn test_error_line_layout() {
        let glyphs = Glyphs::default();
        let line = render_error(&glyphs, &"boom", 2, None);
        let block = format!(":\n\u{2757}\t{{ \u{2757}: {:<15} \u{2757} }}", "boom");
        assert_eq!(line, format!("{:<50} T.H. {}", block, glyph_for(2)));
    }

    #[test]
    fn test_scoped_error_uses_wider_block() {
        let glyphs = Glyphs::default();
        let line = render_error(&glyphs, &"boom", 1, Some(Scope::new("", "worker")));
        let block = format!("worker :\n\u{2757}\t{{ \u{2757}: {:<15} \u{2757} }}", "boom");
        assert_eq!(line, format!("{:<60} T.H. {}", block, glyph_for(1)));
    }

    #[test]
    fn test_fatal_always_level_five() {
        let glyphs = Glyphs::default();
        let line = render_fatal(&glyphs, &"out of memory", None);
        assert!(line.starts_with(":\n\u{2622}\t { \u{2622} : out of memory   \u{2622} } \t\t"));
        assert!(line.ends_with(&format!("T.H. {}\n", glyph_for(5))));
        assert!(!line.contains(&glyphs.error));

        let scoped = render_fatal(&glyphs, &"out of memory", Some(Scope::new("Alex ", "main")));
        assert!(scoped.starts_with("Alex main :\n"));
        assert!(scoped.contains("\u{2622} }\t\tT.H. "));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let glyphs = Glyphs::default();
        let value = Value::from(vec![1.5, 2.5]);
        assert_eq!(
            render_value(&glyphs, "xs", &value, None),
            render_value(&glyphs, "xs", &value, None)
        );
    }

    #[test]
    fn test_ascii_glyphs_substitute() {
        let glyphs = Glyphs::ascii();
        let line = render_value(&glyphs, "flag", &Value::from(false), None);
        assert!(line.contains("[+]\t{ > flag"));
        assert!(line.ends_with("T.H. L0\n"));
    }
}
