//! Dotted-path lookup into nested JSON values.
//!
//! Every theme and scale access in the crate goes through [`get`]. A missing
//! path is an ordinary outcome, never an error: callers fall back to the raw
//! value they were trying to resolve.

use serde_json::Value;

use crate::util::{format_number, is_truthy};

/// Resolves a dotted `path` inside `source`.
///
/// The path is split on `.` and walked one segment at a time. Object segments
/// are keys, array segments are decimal indexes. The walk stops as soon as the
/// current value is unset (null, `false`, `0`, `""`) or has no child under the
/// next segment.
///
/// Returns `Some` only when every segment was consumed. A `null` found at the
/// end of the path is returned as `Some(&Value::Null)`.
///
/// # Example
///
/// ```rust
/// use propcss::get;
/// use serde_json::json;
///
/// let theme = json!({ "space": [0, 4, 8], "colors": { "blue": "#07c" } });
///
/// assert_eq!(get(&theme, "colors.blue"), Some(&json!("#07c")));
/// assert_eq!(get(&theme, "space.2"), Some(&json!(8)));
/// assert_eq!(get(&theme, "colors.blue.5"), None);
/// ```
pub fn get<'a>(source: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = source;

    for segment in path.split('.') {
        if !is_truthy(current) {
            return None;
        }
        current = child(current, segment)?;
    }

    Some(current)
}

/// Like [`get`], but returns `fallback` when the path does not resolve.
///
/// ```rust
/// use propcss::get_or;
/// use serde_json::json;
///
/// let fallback = json!("fallback");
/// assert_eq!(get_or(&json!({}), "a.b.c", &fallback), &fallback);
/// ```
pub fn get_or<'a>(source: &'a Value, path: &str, fallback: &'a Value) -> &'a Value {
    get(source, path).unwrap_or(fallback)
}

/// Resolves a raw prop value used as a key, e.g. `2` or `"primary.1"`,
/// against a scale.
///
/// Numbers are formatted without a trailing `.0` before lookup, so `2` and
/// `2.0` both find index 2. Null and container keys never resolve.
pub fn lookup<'a>(scale: &'a Value, key: &Value) -> Option<&'a Value> {
    let path = path_key(key)?;
    get(scale, &path)
}

/// Converts a scalar value into the textual path used for lookup.
pub fn path_key(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(format_number(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => {
            let index: usize = segment.parse().ok()?;
            // "01" and "+1" are keys, not indexes
            if index.to_string() != segment {
                return None;
            }
            items.get(index)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_returns_a_value() {
        let source = json!({ "blue": "#0cf" });
        assert_eq!(get(&source, "blue"), Some(&json!("#0cf")));
    }

    #[test]
    fn test_get_missing_key() {
        let source = json!({ "blue": "#0cf" });
        assert_eq!(get(&source, "green"), None);
    }

    #[test]
    fn test_get_array_index() {
        let source = json!({ "space": [123, 456] });
        assert_eq!(get(&source, "space.0"), Some(&json!(123)));
        assert_eq!(get(&source, "space.1"), Some(&json!(456)));
        assert_eq!(get(&source, "space.2"), None);
    }

    #[test]
    fn test_get_deeply_nested() {
        let source = json!({ "hi": { "hello": { "beep": "boop" } } });
        assert_eq!(get(&source, "hi.hello.beep"), Some(&json!("boop")));
    }

    #[test]
    fn test_get_or_fallback() {
        let fallback = json!("fallback");
        assert_eq!(get_or(&json!({}), "a.b.c", &fallback), &fallback);

        let source = json!({ "a": { "b": { "c": 1 } } });
        assert_eq!(get_or(&source, "a.b.c", &fallback), &json!(1));
    }

    #[test]
    fn test_get_stops_at_scalars() {
        let source = json!({ "colors": { "blue": "#07c" } });
        assert_eq!(get(&source, "colors.blue.5"), None);
    }

    #[test]
    fn test_get_stops_at_unset_values() {
        let source = json!({ "a": 0, "b": "", "c": null, "d": false });
        assert_eq!(get(&source, "a.x"), None);
        assert_eq!(get(&source, "b.x"), None);
        assert_eq!(get(&source, "c.x"), None);
        assert_eq!(get(&source, "d.x"), None);
    }

    #[test]
    fn test_get_returns_unset_leaf() {
        let source = json!({ "zero": 0, "nothing": null });
        assert_eq!(get(&source, "zero"), Some(&json!(0)));
        assert_eq!(get(&source, "nothing"), Some(&Value::Null));
    }

    #[test]
    fn test_get_on_null_source() {
        assert_eq!(get(&Value::Null, "space"), None);
    }

    #[test]
    fn test_get_rejects_non_canonical_indexes() {
        let source = json!([10, 20]);
        assert_eq!(get(&source, "01"), None);
        assert_eq!(get(&source, "+1"), None);
        assert_eq!(get(&source, "-1"), None);
        assert_eq!(get(&source, "1"), Some(&json!(20)));
    }

    #[test]
    fn test_lookup_formats_numeric_keys() {
        let scale = json!([0, 4, 8, 16]);
        assert_eq!(lookup(&scale, &json!(2)), Some(&json!(8)));
        assert_eq!(lookup(&scale, &json!(2.0)), Some(&json!(8)));
        assert_eq!(lookup(&scale, &json!(9)), None);
        assert_eq!(lookup(&scale, &json!(null)), None);
    }

    #[test]
    fn test_lookup_dotted_string_keys() {
        let colors = json!({ "primary": ["#69d", "#58c"] });
        assert_eq!(lookup(&colors, &json!("primary.1")), Some(&json!("#58c")));
    }
}
