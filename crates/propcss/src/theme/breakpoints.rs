//! Breakpoint lookup and media-query text.

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use crate::style::px;
use crate::util::{display_value, is_truthy};

/// Breakpoints used when the theme does not define any.
pub const DEFAULT_BREAKPOINTS: [&str; 3] = ["40em", "52em", "64em"];

static DEFAULT_BREAKPOINT_VALUES: Lazy<Vec<Value>> = Lazy::new(|| {
    DEFAULT_BREAKPOINTS
        .iter()
        .map(|bp| Value::from(*bp))
        .collect()
});

/// A theme's breakpoint definitions.
///
/// Breakpoints are either an ordered list, addressed by position (responsive
/// arrays) or by index key (responsive objects such as `{ "2": "50%" }`), or a
/// mapping of named breakpoints, addressed only by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Breakpoints<'a> {
    /// Ordered breakpoints, smallest first.
    List(&'a [Value]),
    /// Named breakpoints such as `{ "sm": "40em", "md": "52em" }`.
    Named(&'a Map<String, Value>),
}

impl<'a> Breakpoints<'a> {
    /// Resolves the breakpoints defined at `theme.breakpoints`.
    ///
    /// Anything other than a list or a mapping falls back to
    /// [`DEFAULT_BREAKPOINTS`].
    pub fn from_theme_value(value: Option<&'a Value>) -> Self {
        match value {
            Some(Value::Array(items)) => Breakpoints::List(items),
            Some(Value::Object(map)) => Breakpoints::Named(map),
            _ => Self::default_list(),
        }
    }

    /// The default `40em / 52em / 64em` list.
    pub fn default_list() -> Breakpoints<'static> {
        Breakpoints::List(DEFAULT_BREAKPOINT_VALUES.as_slice())
    }

    /// Number of breakpoints addressable by position.
    ///
    /// Named breakpoints have no positions, so responsive arrays only ever
    /// produce their base value against them.
    pub fn positional_len(&self) -> usize {
        match self {
            Breakpoints::List(items) => items.len(),
            Breakpoints::Named(_) => 0,
        }
    }

    /// Returns the breakpoint at `index` in a list.
    pub fn at(&self, index: usize) -> Option<&'a Value> {
        match self {
            Breakpoints::List(items) => items.get(index),
            Breakpoints::Named(_) => None,
        }
    }

    /// Looks up a breakpoint by the key used in a responsive object.
    ///
    /// List breakpoints accept decimal index keys, named breakpoints accept
    /// their names. Unset entries (null, `0`, `""`) count as unmatched.
    pub fn find(&self, key: &str) -> Option<&'a Value> {
        let found = match self {
            Breakpoints::List(items) => key
                .parse::<usize>()
                .ok()
                .filter(|index| index.to_string() == key)
                .and_then(|index| items.get(index)),
            Breakpoints::Named(map) => map.get(key),
        };
        found.filter(|bp| is_truthy(bp))
    }
}

/// Builds the media-query selector for a breakpoint.
///
/// Numeric breakpoints are converted to pixels.
///
/// # Example
///
/// ```rust
/// use propcss::media_query;
/// use serde_json::json;
///
/// assert_eq!(media_query(&json!("40em")), "@media screen and (min-width: 40em)");
/// assert_eq!(media_query(&json!(768)), "@media screen and (min-width: 768px)");
/// ```
pub fn media_query(breakpoint: &Value) -> String {
    let width = display_value(&px(breakpoint)).unwrap_or_default();
    format!("@media screen and (min-width: {width})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_breakpoints() {
        let bps = Breakpoints::from_theme_value(None);
        assert_eq!(bps.positional_len(), 3);
        assert_eq!(bps.at(0), Some(&json!("40em")));
        assert_eq!(bps.at(2), Some(&json!("64em")));
        assert_eq!(bps.at(3), None);
    }

    #[test]
    fn test_invalid_breakpoints_fall_back_to_default() {
        let value = json!("48em");
        let bps = Breakpoints::from_theme_value(Some(&value));
        assert_eq!(bps, Breakpoints::default_list());
    }

    #[test]
    fn test_list_find_by_index_key() {
        let value = json!(["30em", "60em"]);
        let bps = Breakpoints::from_theme_value(Some(&value));
        assert_eq!(bps.find("1"), Some(&json!("60em")));
        assert_eq!(bps.find("2"), None);
        assert_eq!(bps.find("_"), None);
        assert_eq!(bps.find("01"), None);
    }

    #[test]
    fn test_named_find() {
        let value = json!({ "sm": "40em", "md": 960, "off": 0 });
        let bps = Breakpoints::from_theme_value(Some(&value));
        assert_eq!(bps.find("sm"), Some(&json!("40em")));
        assert_eq!(bps.find("md"), Some(&json!(960)));
        assert_eq!(bps.find("off"), None);
        assert_eq!(bps.find("lg"), None);
        assert_eq!(bps.positional_len(), 0);
        assert_eq!(bps.at(0), None);
    }

    #[test]
    fn test_media_query_formats() {
        assert_eq!(
            media_query(&json!("52em")),
            "@media screen and (min-width: 52em)"
        );
        assert_eq!(
            media_query(&json!(1024)),
            "@media screen and (min-width: 1024px)"
        );
    }
}
