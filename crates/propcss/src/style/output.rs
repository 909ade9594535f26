//! The declaration tree produced by style functions.

use serde::Serialize;
use serde_json::{Map, Value};

/// CSS produced by a style function.
///
/// A [`Css::Declaration`] maps CSS property names, or selector strings such
/// as media queries and `&:hover`, to values or nested CSS. A [`Css::List`]
/// is an ordered sequence whose order is the cascade order.
///
/// The tree serializes untagged, so it can be handed to any consumer that
/// expects plain JSON objects and arrays.
///
/// # Example
///
/// ```rust
/// use propcss::Css;
/// use serde_json::json;
///
/// let css = Css::List(vec![
///     Css::declaration("width", "100%"),
///     Css::declaration("@media screen and (min-width: 40em)", Css::declaration("width", "50%")),
/// ]);
///
/// assert_eq!(
///     serde_json::Value::from(css),
///     json!([
///         { "width": "100%" },
///         { "@media screen and (min-width: 40em)": { "width": "50%" } }
///     ])
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Css {
    /// A single declaration fragment.
    Declaration(Map<String, Value>),
    /// An ordered list of fragments.
    List(Vec<Css>),
}

impl Css {
    /// Creates a fragment with a single entry.
    pub fn declaration(property: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut map = Map::new();
        map.insert(property.into(), value.into());
        Css::Declaration(map)
    }

    /// Interprets a JSON value as CSS.
    ///
    /// Objects become declarations and arrays become lists (dropping entries
    /// that are not CSS themselves). Scalars and null are not CSS.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Css::Declaration(map)),
            Value::Array(items) => Some(Css::List(
                items.into_iter().filter_map(Css::from_value).collect(),
            )),
            _ => None,
        }
    }

    /// Returns true for an empty list.
    ///
    /// An empty declaration is still a result; only empty lists are dropped
    /// during composition.
    pub fn is_empty(&self) -> bool {
        matches!(self, Css::List(items) if items.is_empty())
    }

    /// Returns the fragment if this is a single declaration.
    pub fn as_declaration(&self) -> Option<&Map<String, Value>> {
        match self {
            Css::Declaration(map) => Some(map),
            Css::List(_) => None,
        }
    }

    /// Returns the entries if this is a list.
    pub fn as_list(&self) -> Option<&[Css]> {
        match self {
            Css::Declaration(_) => None,
            Css::List(items) => Some(items),
        }
    }
}

impl From<Css> for Value {
    fn from(css: Css) -> Self {
        match css {
            Css::Declaration(map) => Value::Object(map),
            Css::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
        }
    }
}

impl From<Map<String, Value>> for Css {
    fn from(map: Map<String, Value>) -> Self {
        Css::Declaration(map)
    }
}

impl From<Vec<Css>> for Css {
    fn from(items: Vec<Css>) -> Self {
        Css::List(items)
    }
}
