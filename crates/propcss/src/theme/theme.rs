//! Theme struct holding scales and breakpoints.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::breakpoints::Breakpoints;
use super::error::ThemeError;
use crate::resolve::get;
use crate::util::is_truthy;

/// A collection of named scales plus breakpoint definitions.
///
/// A theme is a plain JSON mapping: `space`, `colors`, `fontSizes` and any
/// other scale a style function names through its lookup key, plus an
/// optional `breakpoints` entry. Themes are never mutated by style functions.
///
/// # Example
///
/// ```rust
/// use propcss::Theme;
/// use serde_json::json;
///
/// let theme = Theme::new()
///     .add("space", json!([0, 4, 8, 16]))
///     .add("colors", json!({ "blue": "#07c" }))
///     .add("breakpoints", json!(["30em", "60em"]));
///
/// assert_eq!(theme.get("colors.blue"), Some(&json!("#07c")));
/// assert_eq!(theme.breakpoints().positional_len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    root: Value,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Wraps an existing JSON value as a theme.
    ///
    /// Non-mapping values are accepted; every lookup against them misses.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Picks the theme out of a value that is either a theme or a property
    /// bag carrying one under `theme`.
    ///
    /// A set `theme` field wins; otherwise the value itself is the theme.
    pub fn from_theme_or_props(value: &Value) -> Self {
        match value.get("theme") {
            Some(theme) if is_truthy(theme) => Self::from_value(theme.clone()),
            _ => Self::from_value(value.clone()),
        }
    }

    /// Parses a theme from a JSON document.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        let root: Value = serde_json::from_str(source)?;
        Self::checked(root, "json")
    }

    /// Parses a theme from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        let root: Value = serde_yaml::from_str(source)?;
        Self::checked(root, "yaml")
    }

    /// Loads a theme file, choosing the parser from its extension.
    ///
    /// `.json` files are parsed as JSON, `.yaml` and `.yml` as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ThemeError> = match extension.as_deref() {
            Some("json") => Self::from_json,
            Some("yaml") | Some("yml") => Self::from_yaml,
            _ => {
                return Err(ThemeError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|e| ThemeError::io(path, e))?;
        let theme = parse(&source)?;
        tracing::debug!(path = %path.display(), "loaded theme file");
        Ok(theme)
    }

    fn checked(root: Value, format: &str) -> Result<Self, ThemeError> {
        let found = match &root {
            Value::Object(map) => {
                tracing::debug!(format = format, scales = map.len(), "parsed theme");
                None
            }
            Value::Null => Some("null"),
            Value::Bool(_) => Some("boolean"),
            Value::Number(_) => Some("number"),
            Value::String(_) => Some("string"),
            Value::Array(_) => Some("array"),
        };

        match found {
            Some(found) => Err(ThemeError::NotAMapping { found }),
            None => Ok(Self { root }),
        }
    }

    /// Adds or replaces a top-level entry, returning the theme for chaining.
    pub fn add(mut self, key: &str, value: impl Into<Value>) -> Self {
        if !self.root.is_object() {
            self.root = Value::Object(Map::new());
        }
        if let Value::Object(map) = &mut self.root {
            map.insert(key.to_string(), value.into());
        }
        self
    }

    /// Resolves a dotted path inside the theme.
    pub fn get(&self, path: &str) -> Option<&Value> {
        get(&self.root, path)
    }

    /// Returns the theme's breakpoints, or the defaults when none are set.
    pub fn breakpoints(&self) -> Breakpoints<'_> {
        Breakpoints::from_theme_value(self.get("breakpoints"))
    }

    /// Returns the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Returns true when the theme has no entries.
    pub fn is_empty(&self) -> bool {
        match &self.root {
            Value::Object(map) => map.is_empty(),
            other => !is_truthy(other),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for Theme {
    fn from(root: Value) -> Self {
        Self::from_value(root)
    }
}
