//! ASCII table rendering for sequences and maps
//!
//! A table is a header line, a dash rule, then one `| key | value |` row per
//! element, each followed by another rule:
//!
//! ```text
//! : nums:
//! 	-----
//! 	 | 0   |1                   |
//! 	-----
//! 	 | 1   |2                   |
//! 	-----
//!
//! ```
//!
//! Mapping rows come out in the iteration order of the collection passed
//! in. A `HashMap` gives an unspecified order that may change between runs;
//! pass a `BTreeMap` for a stable, sorted table. The renderer never sorts.

use super::value::{format_float, Value};
use std::fmt::Write;

/// Rule length used by the non-padding variants.
pub const DEFAULT_PADDING: i64 = 30;
/// Longest rule drawn; larger paddings are capped to this.
pub const MAX_PADDING: i64 = 1 << 16;
pub const KEY_WIDTH: usize = 4;
pub const CELL_WIDTH: usize = 20;

mod sealed {
    pub trait Sealed {}

    impl<T: Sealed + ?Sized> Sealed for &T {}
}

/// Types allowed as an index or map key: strings, integers and floats.
pub trait TableKey: sealed::Sealed {
    fn render_key(&self) -> String;
}

/// Types allowed in the value column.
pub trait TableValue {
    fn render_cell(&self) -> String;
}

macro_rules! table_display {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl TableKey for $t {
                fn render_key(&self) -> String {
                    self.to_string()
                }
            }

            impl TableValue for $t {
                fn render_cell(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

macro_rules! table_float {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl TableKey for $t {
                fn render_key(&self) -> String {
                    self.render_cell()
                }
            }

            impl TableValue for $t {
                fn render_cell(&self) -> String {
                    format_float(*self)
                }
            }
        )*
    };
}

table_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String, str);
table_float!(f32, f64);

impl<T: TableKey + ?Sized> TableKey for &T {
    fn render_key(&self) -> String {
        (**self).render_key()
    }
}

impl<T: TableValue + ?Sized> TableValue for &T {
    fn render_cell(&self) -> String {
        (**self).render_cell()
    }
}

impl TableValue for bool {
    fn render_cell(&self) -> String {
        self.to_string()
    }
}

impl TableValue for char {
    fn render_cell(&self) -> String {
        self.to_string()
    }
}

impl TableValue for Value {
    fn render_cell(&self) -> String {
        self.to_string()
    }
}

impl<T: TableValue> TableValue for Option<T> {
    fn render_cell(&self) -> String {
        self.as_ref()
            .map_or_else(|| Value::Null.to_string(), TableValue::render_cell)
    }
}

impl<T: TableValue> TableValue for Vec<T> {
    fn render_cell(&self) -> String {
        self.as_slice().render_cell()
    }
}

impl<T: TableValue> TableValue for [T] {
    fn render_cell(&self) -> String {
        let items: Vec<String> = self.iter().map(TableValue::render_cell).collect();
        format!("[{}]", items.join(" "))
    }
}

fn rule(padding: i64) -> String {
    let dashes = padding.clamp(0, MAX_PADDING);
    "-".repeat(usize::try_from(dashes).unwrap_or(0))
}

fn render_rows<I>(name: &str, rows: I, padding: i64) -> String
where
    I: IntoIterator<Item = (String, String)>,
{
    let rule = rule(padding);
    let mut out = format!(": {}:\n\t{}\n\t ", name, rule);
    for (key, cell) in rows {
        let _ = writeln!(out, "| {:<kw$}|{:<cw$}|", key, cell, kw = KEY_WIDTH, cw = CELL_WIDTH);
        out.push('\t');
        out.push_str(&rule);
        out.push_str("\n\t ");
    }
    out
}

/// Render `elements` as an index/value table with a rule of `padding`
/// dashes. A padding of zero or less gives an empty rule, and one above
/// [`MAX_PADDING`] is capped.
pub fn render_sequence<T: TableValue>(name: &str, elements: &[T], padding: i64) -> String {
    render_rows(
        name,
        elements
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v.render_cell())),
        padding,
    )
}

/// Render `pairs` as a key/value table in the order the iterator yields.
pub fn render_mapping<K, V, I>(name: &str, pairs: I, padding: i64) -> String
where
    K: TableKey,
    V: TableValue,
    I: IntoIterator<Item = (K, V)>,
{
    render_rows(
        name,
        pairs
            .into_iter()
            .map(|(k, v)| (k.render_key(), v.render_cell())),
        padding,
    )
}
