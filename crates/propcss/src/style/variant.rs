//! Style functions that read whole style objects out of the theme.

use serde_json::Value;

use super::function::{PropertyBag, StyleFn};
use super::output::Css;
use crate::resolve::path_key;
use crate::theme::Theme;

/// Default prop naming the variant.
pub const DEFAULT_VARIANT_PROP: &str = "variant";

/// Creates a style function that picks a named style object from
/// `theme[key]`.
///
/// The variant name is read from the `variant` prop unless another prop is
/// configured with [`Variant::prop`].
///
/// # Example
///
/// ```rust
/// use propcss::{variant, Css, StyleFn};
/// use serde_json::json;
///
/// let buttons = variant("buttons");
/// let props = json!({
///     "variant": "primary",
///     "theme": { "buttons": { "primary": { "padding": "32px" } } }
/// });
///
/// assert_eq!(buttons.evaluate(&props), Some(Css::declaration("padding", "32px")));
/// ```
pub fn variant(key: impl Into<String>) -> Variant {
    Variant {
        key: key.into(),
        prop: DEFAULT_VARIANT_PROP.to_string(),
    }
}

/// A theme variant lookup. See [`variant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    key: String,
    prop: String,
}

impl Variant {
    /// Reads the variant name from `name` instead of `variant`.
    pub fn prop(mut self, name: impl Into<String>) -> Self {
        self.prop = name.into();
        self
    }
}

impl StyleFn for Variant {
    fn apply(&self, props: &PropertyBag, theme: &Theme) -> Option<Css> {
        let name = path_key(props.get(&self.prop)?)?;
        let found = theme.get(&format!("{}.{}", self.key, name))?;
        Css::from_value(found.clone())
    }
}

/// Creates a style function returning the style object stored at
/// `theme[key]`, regardless of props.
pub fn themed(key: impl Into<String>) -> Themed {
    Themed { key: key.into() }
}

/// A fixed theme style lookup. See [`themed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Themed {
    key: String,
}

impl StyleFn for Themed {
    fn apply(&self, _props: &PropertyBag, theme: &Theme) -> Option<Css> {
        let found = theme.as_value().get(&self.key)?;
        Css::from_value(found.clone())
    }
}

/// Returns a getter resolving `path` in a theme, with an optional fallback.
///
/// ```rust
/// use propcss::{theme_get, Theme};
/// use serde_json::json;
///
/// let primary = theme_get("colors.primary", Some(json!("black")));
///
/// let theme = Theme::new().add("colors", json!({ "primary": "#07c" }));
/// assert_eq!(primary(&theme), Some(json!("#07c")));
/// assert_eq!(primary(&Theme::new()), Some(json!("black")));
/// ```
pub fn theme_get(
    path: impl Into<String>,
    fallback: Option<Value>,
) -> impl Fn(&Theme) -> Option<Value> + Clone + Send + Sync {
    let path = path.into();
    move |theme: &Theme| theme.get(&path).cloned().or_else(|| fallback.clone())
}
