//! Dynamic values accepted by the value formatter
//!
//! [`Value`] is the open-typed parameter of `print_value`. Its `Display`
//! output mirrors the classic `%v` verb: `<nil>` for absence, `[a b]` for
//! lists and `map[k:v]` for maps.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Largest decimal exponent printed without switching to `e` notation.
const MAX_PLAIN_EXPONENT: i32 = 5;
/// Smallest decimal exponent printed without switching to `e` notation.
const MIN_PLAIN_EXPONENT: i32 = -4;

/// Format a float the way `%v` does: the shortest digits that round-trip,
/// in plain decimal when the exponent is within -4..=5 and as `d.ddde±XX`
/// otherwise. Infinities are `+Inf` and `-Inf`.
///
/// ```
/// use threat_logger::core::value::format_float;
///
/// assert_eq!(format_float(123456.0), "123456");
/// assert_eq!(format_float(1e21), "1e+21");
/// assert_eq!(format_float(0.00001), "1e-05");
/// assert_eq!(format_float(1.5f32), "1.5");
/// ```
pub fn format_float<F>(f: F) -> String
where
    F: Into<f64> + fmt::LowerExp + Copy,
{
    let wide: f64 = f.into();
    if wide.is_nan() {
        return "NaN".to_string();
    }
    if wide.is_infinite() {
        return if wide > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits for the source width
    let scientific = format!("{:e}", f);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if !(MIN_PLAIN_EXPONENT..=MAX_PLAIN_EXPONENT).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs());
    }

    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let point = exponent + 1;

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }
    if point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take(point.unsigned_abs() as usize));
        out.push_str(&digits);
    } else {
        let point = point as usize;
        if point >= digits.len() {
            out.push_str(&digits);
            out.extend(std::iter::repeat('0').take(point - digits.len()));
        } else {
            out.push_str(&digits[..point]);
            out.push('.');
            out.push_str(&digits[point..]);
        }
    }
    out
}

/// Key order for printed maps: absence, then booleans, then numbers by
/// value, then strings lexically, then everything else by rendered text.
fn compare_keys(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::UInt(_) | Value::Float(_) => 2,
            Value::Str(_) => 3,
            _ => 4,
        }
    }

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::UInt(x), Value::UInt(y)) => x.cmp(y),
        (Value::Int(x), Value::UInt(y)) => i128::from(*x).cmp(&i128::from(*y)),
        (Value::UInt(x), Value::Int(y)) => i128::from(*x).cmp(&i128::from(*y)),
        (Value::Str(x), Value::Str(y)) => x.cmp(y),
        _ if rank(a) == 2 && rank(b) == 2 => compare_floats(a.as_f64(), b.as_f64()),
        _ => rank(a)
            .cmp(&rank(b))
            .then_with(|| a.to_string().cmp(&b.to_string())),
    }
}

/// NaN sorts before every other number.
fn compare_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Str(String),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
    /// Pre-rendered text for anything without a structured representation
    Other(String),
}

impl Value {
    /// Narrow emptiness check: absence, integer zero, or the empty string.
    ///
    /// `false`, `0.0`, `[]` and `map[]` are all non-empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Null | Value::Int(0) | Value::UInt(0))
            || matches!(self, Value::Str(s) if s.is_empty())
    }

    /// Convert any serializable value through its JSON data model.
    ///
    /// Serializer failures become [`Value::Other`] holding the error text.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => Value::from(json),
            Err(e) => Value::Other(format!("%!v(serialize error: {})", e)),
        }
    }

    fn as_f64(&self) -> f64 {
        match self {
            Value::Int(i) => *i as f64,
            Value::UInt(u) => *u as f64,
            Value::Float(f) => *f,
            _ => f64::NAN,
        }
    }

    fn render(&self, out: &mut String) {
        use std::fmt::Write;

        match self {
            Value::Null => out.push_str("<nil>"),
            Value::Int(i) => {
                let _ = write!(out, "{}", i);
            }
            Value::UInt(u) => {
                let _ = write!(out, "{}", u);
            }
            Value::Float(f) => out.push_str(&format_float(*f)),
            Value::Bool(b) => {
                let _ = write!(out, "{}", b);
            }
            Value::Str(s) | Value::Other(s) => out.push_str(s),
            Value::List(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    item.render(out);
                }
                out.push(']');
            }
            Value::Map(entries) => {
                out.push_str("map[");
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    k.render(out);
                    out.push(':');
                    v.render(out);
                }
                out.push(']');
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        self.render(&mut rendered);
        // pad() so that width specifiers like {:<15} apply
        f.pad(&rendered)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

macro_rules! value_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(i: $t) -> Self {
                Value::Int(i as i64)
            }
        })*
    };
}

macro_rules! value_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(u: $t) -> Self {
                Value::UInt(u as u64)
            }
        })*
    };
}

value_from_signed!(i8, i16, i32, i64, isize);
value_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    /// Keeps the shortest `f32` digits, so `0.1f32` prints as `0.1`.
    fn from(f: f32) -> Self {
        Value::Float(f.to_string().parse().unwrap_or_else(|_| f64::from(f)))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Str(c.to_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::List(items.iter().cloned().map(Into::into).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<HashMap<K, V>> for Value {
    /// Entries are sorted by key, numbers by value and strings lexically,
    /// the way `%v` prints maps.
    fn from(map: HashMap<K, V>) -> Self {
        let mut entries: Vec<(Value, Value)> =
            map.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
        Value::Map(entries)
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::Map(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    n.as_f64().map_or_else(|| Value::Other(n.to_string()), Value::Float)
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (Value::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}
