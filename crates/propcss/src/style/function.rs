//! The style-function trait and its calling convention.

use std::sync::Arc;

use serde_json::{Map, Value};

use super::output::Css;
use crate::theme::Theme;

/// Component properties handed to a style function, without the theme.
pub type PropertyBag = Map<String, Value>;

/// A style function shared between composites, factories and components.
pub type SharedStyleFn = Arc<dyn StyleFn>;

/// Maps a property bag and a theme to CSS.
///
/// Style functions are pure: they never mutate their inputs and return the
/// same output for the same inputs. `None` means the function had nothing to
/// contribute, which composition treats the same as an empty list.
///
/// Any `Fn(&PropertyBag, &Theme) -> Option<Css>` closure is a style function.
///
/// # Example
///
/// ```rust
/// use propcss::{Css, PropertyBag, StyleFn, Theme};
/// use serde_json::json;
///
/// let uppercase = |props: &PropertyBag, _theme: &Theme| {
///     props.get("caps").map(|_| Css::declaration("textTransform", "uppercase"))
/// };
///
/// assert_eq!(
///     uppercase.evaluate(&json!({ "caps": true })),
///     Some(Css::declaration("textTransform", "uppercase"))
/// );
/// assert_eq!(uppercase.evaluate(&json!({})), None);
/// ```
pub trait StyleFn: Send + Sync {
    /// Evaluates the function against props and an already resolved theme.
    fn apply(&self, props: &PropertyBag, theme: &Theme) -> Option<Css>;

    /// Evaluates the function against a property bag that carries its theme
    /// under the conventional `theme` field.
    fn evaluate(&self, props: &Value) -> Option<Css> {
        let (bag, theme) = split_theme(props);
        self.apply(&bag, &theme)
    }

    /// Moves the function behind an [`Arc`] so it can be shared.
    fn shared(self) -> SharedStyleFn
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

impl<F> StyleFn for F
where
    F: Fn(&PropertyBag, &Theme) -> Option<Css> + Send + Sync,
{
    fn apply(&self, props: &PropertyBag, theme: &Theme) -> Option<Css> {
        self(props, theme)
    }
}

/// Wraps a closure as a shared style function.
///
/// Passing the closure through this function pins down its signature, so
/// argument types need no annotations.
pub fn from_fn<F>(f: F) -> SharedStyleFn
where
    F: Fn(&PropertyBag, &Theme) -> Option<Css> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Separates the `theme` field from a property bag.
///
/// Non-mapping values yield an empty bag. A missing or unset `theme` yields
/// an empty theme.
pub fn split_theme(props: &Value) -> (PropertyBag, Theme) {
    let Value::Object(map) = props else {
        return (PropertyBag::new(), Theme::new());
    };

    let mut theme = Theme::new();
    let mut bag = PropertyBag::new();
    for (key, value) in map {
        if key == "theme" {
            if !value.is_null() {
                theme = Theme::from_value(value.clone());
            }
        } else {
            bag.insert(key.clone(), value.clone());
        }
    }

    (bag, theme)
}

/// Applies every function in order, keeping the results that are neither
/// `None` nor an empty list.
pub(crate) fn apply_all<'a, I>(fns: I, props: &PropertyBag, theme: &Theme) -> Vec<Css>
where
    I: IntoIterator<Item = &'a SharedStyleFn>,
{
    fns.into_iter()
        .filter_map(|f| f.apply(props, theme))
        .filter(|css| !css.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn color_fn() -> SharedStyleFn {
        from_fn(|props, _theme| props.get("color").map(|c| Css::declaration("color", c.clone())))
    }

    #[test]
    fn test_split_theme() {
        let props = json!({ "color": "blue", "theme": { "colors": {} }, "width": 1 });
        let (bag, theme) = split_theme(&props);

        let keys: Vec<_> = bag.keys().cloned().collect();
        assert_eq!(keys, vec!["color", "width"]);
        assert_eq!(theme.as_value(), &json!({ "colors": {} }));
    }

    #[test]
    fn test_split_theme_without_theme() {
        let (bag, theme) = split_theme(&json!({ "color": "blue" }));
        assert_eq!(bag.len(), 1);
        assert!(theme.is_empty());
    }

    #[test]
    fn test_split_theme_non_mapping() {
        let (bag, theme) = split_theme(&json!([1, 2]));
        assert!(bag.is_empty());
        assert!(theme.is_empty());
    }

    #[test]
    fn test_evaluate_passes_theme() {
        let f = from_fn(|_props, theme| {
            theme
                .get("colors.blue")
                .map(|c| Css::declaration("color", c.clone()))
        });
        let css = f.evaluate(&json!({ "theme": { "colors": { "blue": "#07c" } } }));
        assert_eq!(css, Some(Css::declaration("color", "#07c")));
    }

    #[test]
    fn test_apply_all_filters_empty_results() {
        let nothing = from_fn(|_props, _theme| None);
        let empty = from_fn(|_props, _theme| Some(Css::List(vec![])));
        let fns = vec![nothing, color_fn(), empty, color_fn()];

        let props = json!({ "color": "red" });
        let results = apply_all(&fns, props.as_object().unwrap(), &Theme::new());
        assert_eq!(
            results,
            vec![Css::declaration("color", "red"), Css::declaration("color", "red")]
        );
    }

    #[test]
    fn test_closure_shared() {
        let f = (|_props: &PropertyBag, _theme: &Theme| Some(Css::declaration("display", "flex")))
            .shared();
        assert_eq!(f.evaluate(&json!({})), Some(Css::declaration("display", "flex")));
    }
}
