//! Value transforms: turning a raw prop value plus a scale into a CSS value.
//!
//! Every transform has the [`TransformFn`] signature. Returning `None` (or
//! `Value::Null`) means "no value", and the style function then emits no
//! declaration for that slot.

use serde_json::Value;

use crate::resolve::{get, lookup};
use crate::util::{display_value, format_number, number_value};

/// A transform from `(raw value, scale)` to a CSS value.
pub type TransformFn = fn(&Value, &Value) -> Option<Value>;

/// Appends `px` to non-zero numbers. Zero, strings and everything else pass
/// through unchanged.
///
/// # Example
///
/// ```rust
/// use propcss::px;
/// use serde_json::json;
///
/// assert_eq!(px(&json!(16)), json!("16px"));
/// assert_eq!(px(&json!(0)), json!(0));
/// assert_eq!(px(&json!("2em")), json!("2em"));
/// ```
pub fn px(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => {
            Value::String(format!("{}px", format_number(n)))
        }
        other => other.clone(),
    }
}

/// The default transform: the scale entry for the raw value, or the raw
/// value itself.
pub fn get_value(raw: &Value, scale: &Value) -> Option<Value> {
    Some(lookup(scale, raw).unwrap_or(raw).clone())
}

/// Scale lookup followed by [`px`].
pub fn get_px(raw: &Value, scale: &Value) -> Option<Value> {
    Some(px(lookup(scale, raw).unwrap_or(raw)))
}

/// Scale lookup that understands negative values.
///
/// - `"-md"` resolves `md` and negates the result.
/// - `-2` resolves index 2 and negates the result.
///
/// Numeric results are negated and converted with [`px`]; string results get
/// a leading `-`. When the scale has no entry, the unsigned input is used as
/// the result before the sign is reapplied.
///
/// # Example
///
/// ```rust
/// use propcss::get_space;
/// use serde_json::json;
///
/// let scale = json!([0, 4, 8, 16]);
/// assert_eq!(get_space(&json!(-2), &scale), Some(json!("-8px")));
/// assert_eq!(get_space(&json!(3), &scale), Some(json!("16px")));
/// assert_eq!(get_space(&json!("auto"), &scale), Some(json!("auto")));
/// ```
pub fn get_space(raw: &Value, scale: &Value) -> Option<Value> {
    match raw {
        Value::Null => None,
        Value::String(s) => {
            let (negative, key) = match s.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, s.as_str()),
            };
            let resolved = get(scale, key)
                .cloned()
                .unwrap_or_else(|| Value::from(key));
            Some(apply_sign(resolved, negative))
        }
        Value::Number(n) => {
            let f = n.as_f64()?;
            let absolute = number_value(f.abs());
            let resolved = lookup(scale, &absolute).cloned().unwrap_or(absolute);
            Some(apply_sign(resolved, f < 0.0))
        }
        other => get_px(other, scale),
    }
}

fn apply_sign(value: Value, negative: bool) -> Value {
    match value {
        Value::Number(n) => {
            let f = n.as_f64().unwrap_or_default();
            px(&number_value(if negative { -f } else { f }))
        }
        Value::String(s) if negative => Value::String(format!("-{s}")),
        other => other,
    }
}

/// Scale lookup followed by the width rule: numbers in `(.., 1]` are
/// fractions of the container (`0.5` becomes `"50%"`), larger numbers are
/// pixels, strings pass through.
///
/// ```rust
/// use propcss::get_width;
/// use serde_json::json;
///
/// let scale = json!({});
/// assert_eq!(get_width(&json!(0.5), &scale), Some(json!("50%")));
/// assert_eq!(get_width(&json!(1), &scale), Some(json!("100%")));
/// assert_eq!(get_width(&json!(256), &scale), Some(json!("256px")));
/// assert_eq!(get_width(&json!("auto"), &scale), Some(json!("auto")));
/// ```
pub fn get_width(raw: &Value, scale: &Value) -> Option<Value> {
    let resolved = lookup(scale, raw).unwrap_or(raw);
    match resolved.as_f64() {
        Some(f) if f <= 1.0 => {
            let percent = display_value(&number_value(f * 100.0)).unwrap_or_default();
            Some(Value::String(format!("{percent}%")))
        }
        _ => Some(px(resolved)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_px() {
        assert_eq!(px(&json!(4)), json!("4px"));
        assert_eq!(px(&json!(-8)), json!("-8px"));
        assert_eq!(px(&json!(1.5)), json!("1.5px"));
        assert_eq!(px(&json!(0)), json!(0));
        assert_eq!(px(&json!("1em")), json!("1em"));
        assert_eq!(px(&json!(null)), json!(null));
    }

    #[test]
    fn test_get_value_uses_scale() {
        let scale = json!({ "blue": "#07c" });
        assert_eq!(get_value(&json!("blue"), &scale), Some(json!("#07c")));
        assert_eq!(get_value(&json!("tomato"), &scale), Some(json!("tomato")));
    }

    #[test]
    fn test_get_value_empty_scale_passes_raw() {
        let scale = json!({});
        assert_eq!(get_value(&json!(0), &scale), Some(json!(0)));
        assert_eq!(get_value(&json!("50%"), &scale), Some(json!("50%")));
    }

    #[test]
    fn test_get_px() {
        let scale = json!([12, 14, 16]);
        assert_eq!(get_px(&json!(1), &scale), Some(json!("14px")));
        assert_eq!(get_px(&json!(48), &scale), Some(json!("48px")));
        assert_eq!(get_px(&json!("2em"), &scale), Some(json!("2em")));
    }

    #[test]
    fn test_get_space_negative_numbers() {
        assert_eq!(get_space(&json!(-2), &json!([0, 80, 23])), Some(json!("-23px")));
        assert_eq!(
            get_space(&json!(-1), &json!([0, "100rem", "500rem"])),
            Some(json!("-100rem"))
        );
    }

    #[test]
    fn test_get_space_negative_without_scale_entry() {
        assert_eq!(get_space(&json!(-5), &json!([0, 4])), Some(json!("-5px")));
    }

    #[test]
    fn test_get_space_negative_strings() {
        let scale = json!({ "sm": "32px", "md": "1100rem" });
        assert_eq!(get_space(&json!("-md"), &scale), Some(json!("-1100rem")));
        assert_eq!(get_space(&json!("md"), &scale), Some(json!("1100rem")));
        assert_eq!(get_space(&json!("-auto"), &scale), Some(json!("-auto")));
    }

    #[test]
    fn test_get_space_string_index_into_numeric_scale() {
        let scale = json!([0, 4, 8]);
        assert_eq!(get_space(&json!("-2"), &scale), Some(json!("-8px")));
        assert_eq!(get_space(&json!("2"), &scale), Some(json!("8px")));
    }

    #[test]
    fn test_get_space_zero() {
        assert_eq!(get_space(&json!(0), &json!([0, 4])), Some(json!(0)));
    }

    #[test]
    fn test_get_space_null() {
        assert_eq!(get_space(&Value::Null, &json!([0, 4])), None);
    }

    #[test]
    fn test_get_width() {
        let scale = json!({});
        assert_eq!(get_width(&json!(0.25), &scale), Some(json!("25%")));
        assert_eq!(get_width(&json!(1.0001), &scale), Some(json!("1.0001px")));
        assert_eq!(get_width(&json!(0), &scale), Some(json!("0%")));
    }

    #[test]
    fn test_get_width_resolves_scale_first() {
        let scale = json!({ "half": 0.5, "card": 320 });
        assert_eq!(get_width(&json!("half"), &scale), Some(json!("50%")));
        assert_eq!(get_width(&json!("card"), &scale), Some(json!("320px")));
    }
}
