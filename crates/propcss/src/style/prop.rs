//! The single-property style function and responsive value expansion.

use std::fmt;

use serde_json::{Map, Value};

use super::function::{PropertyBag, StyleFn};
use super::output::Css;
use super::transform::{get_value, TransformFn};
use super::value::{StyleValue, BASE_KEY};
use crate::theme::{media_query, Breakpoints, Theme};
use crate::util::is_truthy;

/// Creates a style function reading the prop named `prop`.
///
/// The CSS property defaults to the prop name, the transform to
/// [`get_value`] and the default scale to an empty mapping.
///
/// # Example
///
/// ```rust
/// use propcss::{style, Css, StyleFn};
/// use serde_json::json;
///
/// let width = style("width");
///
/// assert_eq!(width.evaluate(&json!({ "width": "50%" })), Some(Css::declaration("width", "50%")));
/// assert_eq!(width.evaluate(&json!({ "width": 0 })), Some(Css::declaration("width", 0)));
/// assert_eq!(width.evaluate(&json!({})), None);
/// ```
pub fn style(prop: impl Into<String>) -> StyleProp {
    StyleProp {
        prop: prop.into(),
        css_property: None,
        alias: None,
        key: None,
        transform: get_value,
        scale: Value::Object(Map::new()),
    }
}

/// A style function for one prop, built with [`style`].
///
/// Configuration is fixed once the function is in use; the builder methods
/// consume and return the value.
#[derive(Clone)]
pub struct StyleProp {
    prop: String,
    css_property: Option<String>,
    alias: Option<String>,
    key: Option<String>,
    transform: TransformFn,
    scale: Value,
}

impl StyleProp {
    /// Sets the emitted CSS property name.
    pub fn css_property(mut self, name: impl Into<String>) -> Self {
        self.css_property = Some(name.into());
        self
    }

    /// Sets a secondary prop name read when the main prop is absent.
    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.alias = Some(name.into());
        self
    }

    /// Sets the theme key whose scale values are resolved against.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets the value transform.
    pub fn transform(mut self, transform: TransformFn) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the scale used when the theme has none under the lookup key.
    pub fn scale(mut self, scale: impl Into<Value>) -> Self {
        self.scale = scale.into();
        self
    }

    /// The prop this function reads.
    pub fn prop_name(&self) -> &str {
        &self.prop
    }

    /// The CSS property this function writes.
    pub fn property_name(&self) -> &str {
        self.css_property.as_deref().unwrap_or(&self.prop)
    }

    fn raw_value<'a>(&self, props: &'a PropertyBag) -> Option<&'a Value> {
        let value = match props.get(&self.prop) {
            Some(value) => value,
            None => props.get(self.alias.as_deref()?)?,
        };
        (!value.is_null()).then_some(value)
    }

    fn resolve_scale<'a>(&'a self, theme: &'a Theme) -> &'a Value {
        self.key
            .as_deref()
            .and_then(|key| theme.get(key))
            .unwrap_or(&self.scale)
    }

    /// One declaration for a single value, or `None` when the transform
    /// produces nothing.
    fn declare(&self, raw: &Value, scale: &Value) -> Option<Css> {
        if raw.is_null() {
            return None;
        }
        let value = (self.transform)(raw, scale)?;
        if value.is_null() {
            return None;
        }
        Some(Css::declaration(self.property_name(), value))
    }

    fn expand_array(&self, items: &[Value], scale: &Value, breakpoints: Breakpoints<'_>) -> Vec<Css> {
        let limit = items.len().min(breakpoints.positional_len() + 1);
        let mut styles = Vec::with_capacity(limit);

        for (index, item) in items.iter().take(limit).enumerate() {
            let Some(rule) = self.declare(item, scale) else {
                continue;
            };
            let Some(slot) = index.checked_sub(1) else {
                styles.push(rule);
                continue;
            };
            // An unset breakpoint has no width to apply from, so its entry is dropped.
            match breakpoints.at(slot).filter(|bp| is_truthy(bp)) {
                Some(bp) => styles.push(Css::declaration(media_query(bp), rule)),
                None => {
                    tracing::trace!(prop = %self.prop, index, "skipped entry for unset breakpoint");
                }
            }
        }

        styles
    }

    // Unmatched keys are unshifted in front of everything produced so far,
    // so several of them end up in reverse key order.
    fn expand_object(
        &self,
        entries: &Map<String, Value>,
        scale: &Value,
        breakpoints: Breakpoints<'_>,
    ) -> Vec<Css> {
        let mut base = Vec::new();
        let mut media = Vec::new();

        for (key, raw) in entries {
            let Some(rule) = self.declare(raw, scale) else {
                continue;
            };
            match breakpoints.find(key) {
                Some(bp) => media.push(Css::declaration(media_query(bp), rule)),
                None => {
                    if key != BASE_KEY {
                        tracing::trace!(prop = %self.prop, key = %key, "unmatched breakpoint key treated as base");
                    }
                    base.push(rule);
                }
            }
        }

        base.reverse();
        base.extend(media);
        base
    }
}

impl fmt::Debug for StyleProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleProp")
            .field("prop", &self.prop)
            .field("css_property", &self.property_name())
            .field("alias", &self.alias)
            .field("key", &self.key)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl StyleFn for StyleProp {
    fn apply(&self, props: &PropertyBag, theme: &Theme) -> Option<Css> {
        let raw = self.raw_value(props)?;
        let scale = self.resolve_scale(theme);

        let styles = match StyleValue::parse(raw) {
            StyleValue::Scalar(value) => return self.declare(value, scale),
            StyleValue::ResponsiveArray(items) => {
                self.expand_array(items, scale, theme.breakpoints())
            }
            StyleValue::ResponsiveObject(entries) => {
                self.expand_object(entries, scale, theme.breakpoints())
            }
        };

        (!styles.is_empty()).then_some(Css::List(styles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{get_px, get_space};
    use serde_json::json;

    fn media(bp: &str, property: &str, value: Value) -> Css {
        Css::declaration(
            format!("@media screen and (min-width: {bp})"),
            Css::declaration(property, value),
        )
    }

    #[test]
    fn test_scalar_string() {
        let width = style("width");
        assert_eq!(
            width.evaluate(&json!({ "width": "50%" })),
            Some(Css::declaration("width", "50%"))
        );
    }

    #[test]
    fn test_zero_is_a_value() {
        let width = style("width");
        assert_eq!(width.evaluate(&json!({ "width": 0 })), Some(Css::declaration("width", 0)));
    }

    #[test]
    fn test_absent_and_null() {
        let width = style("width");
        assert_eq!(width.evaluate(&json!({})), None);
        assert_eq!(width.evaluate(&json!({ "width": null })), None);
    }

    #[test]
    fn test_alias_fallback() {
        let bg = style("backgroundColor").alias("bg");
        assert_eq!(
            bg.evaluate(&json!({ "bg": "red" })),
            Some(Css::declaration("backgroundColor", "red"))
        );
    }

    #[test]
    fn test_prop_wins_over_alias() {
        let bg = style("backgroundColor").alias("bg");
        assert_eq!(
            bg.evaluate(&json!({ "backgroundColor": "blue", "bg": "red" })),
            Some(Css::declaration("backgroundColor", "blue"))
        );
    }

    #[test]
    fn test_null_prop_does_not_fall_back_to_alias() {
        let bg = style("backgroundColor").alias("bg");
        assert_eq!(bg.evaluate(&json!({ "backgroundColor": null, "bg": "red" })), None);
    }

    #[test]
    fn test_css_property() {
        let bg = style("bg").css_property("backgroundColor");
        assert_eq!(bg.property_name(), "backgroundColor");
        assert_eq!(bg.prop_name(), "bg");
        assert_eq!(
            bg.evaluate(&json!({ "bg": "red" })),
            Some(Css::declaration("backgroundColor", "red"))
        );
    }

    #[test]
    fn test_theme_scale_lookup() {
        let color = style("color").key("colors");
        let props = json!({ "color": "primary", "theme": { "colors": { "primary": "#07c" } } });
        assert_eq!(color.evaluate(&props), Some(Css::declaration("color", "#07c")));
    }

    #[test]
    fn test_default_scale_used_without_theme_entry() {
        let font_size = style("fontSize")
            .key("fontSizes")
            .transform(get_px)
            .scale(json!([12, 14, 16]));
        assert_eq!(
            font_size.evaluate(&json!({ "fontSize": 2 })),
            Some(Css::declaration("fontSize", "16px"))
        );
    }

    #[test]
    fn test_theme_scale_replaces_default_scale() {
        let font_size = style("fontSize")
            .key("fontSizes")
            .transform(get_px)
            .scale(json!([12, 14, 16]));
        let props = json!({ "fontSize": 2, "theme": { "fontSizes": [10, 20, 30] } });
        assert_eq!(font_size.evaluate(&props), Some(Css::declaration("fontSize", "30px")));
    }

    #[test]
    fn test_transform_returning_none_omits_declaration() {
        let margin = style("margin").transform(|_raw, _scale| None);
        assert_eq!(margin.evaluate(&json!({ "margin": 4 })), None);
    }

    #[test]
    fn test_responsive_array() {
        let width = style("width");
        let css = width.evaluate(&json!({ "width": ["100%", "50%", "25%"] }));
        assert_eq!(
            css,
            Some(Css::List(vec![
                Css::declaration("width", "100%"),
                media("40em", "width", json!("50%")),
                media("52em", "width", json!("25%")),
            ]))
        );
    }

    #[test]
    fn test_responsive_array_skips_null_entries() {
        let width = style("width");
        let css = width.evaluate(&json!({ "width": ["100%", null, "25%"] }));
        assert_eq!(
            css,
            Some(Css::List(vec![
                Css::declaration("width", "100%"),
                media("52em", "width", json!("25%")),
            ]))
        );
    }

    #[test]
    fn test_responsive_array_drops_entries_past_breakpoints() {
        let width = style("width");
        let props = json!({
            "width": [1, 2, 3, 4, 5, 6],
            "theme": { "breakpoints": ["30em"] }
        });
        assert_eq!(
            width.evaluate(&props),
            Some(Css::List(vec![
                Css::declaration("width", 1),
                media("30em", "width", json!(2)),
            ]))
        );
    }

    #[test]
    fn test_responsive_array_numeric_breakpoints() {
        let width = style("width");
        let props = json!({ "width": ["a", "b"], "theme": { "breakpoints": [768] } });
        assert_eq!(
            width.evaluate(&props),
            Some(Css::List(vec![
                Css::declaration("width", "a"),
                media("768px", "width", json!("b")),
            ]))
        );
    }

    #[test]
    fn test_responsive_array_unset_breakpoint_drops_entry() {
        let width = style("width");
        for unset in [Value::Null, json!(0), json!("")] {
            let props = json!({
                "width": ["a", "b", "c"],
                "theme": { "breakpoints": ["40em", unset] }
            });
            assert_eq!(
                width.evaluate(&props),
                Some(Css::List(vec![
                    Css::declaration("width", "a"),
                    media("40em", "width", json!("b")),
                ]))
            );
        }
    }

    #[test]
    fn test_responsive_array_named_breakpoints_only_base() {
        let width = style("width");
        let props = json!({ "width": ["a", "b"], "theme": { "breakpoints": { "sm": "30em" } } });
        assert_eq!(
            width.evaluate(&props),
            Some(Css::List(vec![Css::declaration("width", "a")]))
        );
    }

    #[test]
    fn test_responsive_array_all_null() {
        let width = style("width");
        assert_eq!(width.evaluate(&json!({ "width": [null, null] })), None);
    }

    #[test]
    fn test_responsive_array_negative_space() {
        let margin = style("margin").transform(get_space).scale(json!([0, 4, 8, 16]));
        let css = margin.evaluate(&json!({ "margin": [-1, 2] }));
        assert_eq!(
            css,
            Some(Css::List(vec![
                Css::declaration("margin", "-4px"),
                media("40em", "margin", json!("8px")),
            ]))
        );
    }

    #[test]
    fn test_responsive_object_index_keys() {
        let width = style("width");
        let css = width.evaluate(&json!({ "width": { "_": "100%", "1": "50%" } }));
        assert_eq!(
            css,
            Some(Css::List(vec![
                Css::declaration("width", "100%"),
                media("52em", "width", json!("50%")),
            ]))
        );
    }

    #[test]
    fn test_responsive_object_named_breakpoints() {
        let width = style("width");
        let props = json!({
            "width": { "md": "50%", "_": "100%", "sm": "75%" },
            "theme": { "breakpoints": { "sm": "30em", "md": "60em" } }
        });
        assert_eq!(
            width.evaluate(&props),
            Some(Css::List(vec![
                Css::declaration("width", "100%"),
                media("60em", "width", json!("50%")),
                media("30em", "width", json!("75%")),
            ]))
        );
    }

    #[test]
    fn test_responsive_object_unmatched_keys_are_unshifted() {
        let width = style("width");
        let css = width.evaluate(&json!({ "width": { "_": "1", "0": "2", "huge": "3" } }));
        assert_eq!(
            css,
            Some(Css::List(vec![
                Css::declaration("width", "3"),
                Css::declaration("width", "1"),
                media("40em", "width", json!("2")),
            ]))
        );
    }

    #[test]
    fn test_responsive_object_uses_scale() {
        let color = style("color").key("colors");
        let props = json!({
            "color": { "_": "primary", "0": "secondary" },
            "theme": { "colors": { "primary": "#07c", "secondary": "#30c" } }
        });
        assert_eq!(
            color.evaluate(&props),
            Some(Css::List(vec![
                Css::declaration("color", "#07c"),
                media("40em", "color", json!("#30c")),
            ]))
        );
    }

    #[test]
    fn test_does_not_mutate_props() {
        let width = style("width");
        let props = json!({ "width": ["100%", "50%"], "theme": {} });
        let before = props.clone();
        width.evaluate(&props);
        assert_eq!(props, before);
    }
}
