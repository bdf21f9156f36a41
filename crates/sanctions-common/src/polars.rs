//! Polars `AnyValue` conversions.
//!
//! Raw list extracts are loaded with every column typed as text, but frames
//! built in tests or by downstream tools may carry numeric columns. These
//! helpers give both shapes the same treatment.

use polars::prelude::AnyValue;

/// Converts a Polars `AnyValue` to text, returning `None` for nulls and blanks.
///
/// Numeric values are rendered without trailing zeros, so a float-typed
/// identifier column (`12.0`) reads back as `"12"`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use sanctions_common::any_to_text;
///
/// assert_eq!(any_to_text(AnyValue::Null), None);
/// assert_eq!(any_to_text(AnyValue::String("  ")), None);
/// assert_eq!(any_to_text(AnyValue::Int64(7)), Some("7".to_string()));
/// ```
pub fn any_to_text(value: AnyValue<'_>) -> Option<String> {
    let text = match value {
        AnyValue::Null => return None,
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => {
            let s = other.to_string();
            if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    };
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Formats a floating-point number without a trailing fractional zero.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Converts an `AnyValue` to `i64`.
///
/// Floats are accepted only when they hold a whole number; text is parsed
/// after trimming (`"12.0"` is accepted the same way).
pub fn any_to_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(i64::from(v)),
        AnyValue::Int16(v) => Some(i64::from(v)),
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt8(v) => Some(i64::from(v)),
        AnyValue::UInt16(v) => Some(i64::from(v)),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok(),
        AnyValue::Float32(v) => whole_float(f64::from(v)),
        AnyValue::Float64(v) => whole_float(v),
        AnyValue::String(s) => parse_i64(s),
        AnyValue::StringOwned(s) => parse_i64(&s),
        _ => None,
    }
}

fn whole_float(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 9.0e15 {
        Some(v as i64)
    } else {
        None
    }
}

/// Parses an integer, tolerating surrounding whitespace and a `.0` suffix.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = trimmed.parse::<i64>() {
        return Some(parsed);
    }
    trimmed.parse::<f64>().ok().and_then(whole_float)
}
