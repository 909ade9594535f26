//! Small helpers for formatting JSON values as CSS text.

use serde_json::{Number, Value};

/// Formats a number the way it should appear in CSS text.
///
/// Integral floats drop their fractional part, so `4.0` becomes `"4"` rather
/// than serde_json's `"4.0"`.
///
/// # Example
///
/// ```rust
/// use propcss::format_number;
/// use serde_json::Number;
///
/// assert_eq!(format_number(&Number::from(16)), "16");
/// assert_eq!(format_number(&Number::from_f64(1.5).unwrap()), "1.5");
/// assert_eq!(format_number(&Number::from_f64(4.0).unwrap()), "4");
/// ```
pub fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        // Rust's f64 Display never emits a trailing ".0"
        n.as_f64().map(|f| f.to_string()).unwrap_or_default()
    }
}

/// Builds a JSON number from an `f64`, keeping integral values integral.
///
/// Returns `Value::Null` for non-finite input, which JSON cannot represent.
pub fn number_value(f: f64) -> Value {
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Value::from(f as i64)
    } else {
        Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
    }
}

/// Renders a scalar JSON value as CSS text.
///
/// Strings are returned verbatim, numbers via [`format_number`]. Containers
/// and null have no textual form and yield `None`.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(format_number(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Returns whether a value counts as "set" when probing scales and breakpoints.
///
/// Null, `false`, zero and the empty string are unset; everything else,
/// including empty containers, is set.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Converts a camelCase property name to its kebab-case CSS spelling.
///
/// Names that already start with `-` (custom properties, vendor prefixes)
/// are returned unchanged.
///
/// # Example
///
/// ```rust
/// use propcss::camel_to_kebab;
///
/// assert_eq!(camel_to_kebab("backgroundColor"), "background-color");
/// assert_eq!(camel_to_kebab("color"), "color");
/// assert_eq!(camel_to_kebab("--brand"), "--brand");
/// ```
pub fn camel_to_kebab(name: &str) -> String {
    if name.starts_with('-') {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
