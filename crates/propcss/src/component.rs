//! Attaching style functions to components.
//!
//! A [`Styled`] describes an element or a wrapped component together with the
//! style functions it applies. Style props (such as `SPACE` or `TYPOGRAPHY`)
//! are only evaluated by the outermost component of a composition, after every
//! base style, so they take precedence and are never applied twice.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::style::{apply_all, compose, split_theme, Compose, Css, PropertyBag, SharedStyleFn, StyleFn};
use crate::theme::Theme;

/// What a [`Styled`] renders: an element tag or another styled component.
#[derive(Debug, Clone)]
pub enum Target {
    Tag(String),
    Component(Arc<Styled>),
}

impl From<&str> for Target {
    fn from(tag: &str) -> Self {
        Target::Tag(tag.to_string())
    }
}

impl From<String> for Target {
    fn from(tag: String) -> Self {
        Target::Tag(tag)
    }
}

impl From<Styled> for Target {
    fn from(component: Styled) -> Self {
        Target::Component(Arc::new(component))
    }
}

impl From<Arc<Styled>> for Target {
    fn from(component: Arc<Styled>) -> Self {
        Target::Component(component)
    }
}

/// Options for [`Styled::new`].
#[derive(Clone, Default)]
pub struct StyledOptions {
    style_props: Option<Vec<SharedStyleFn>>,
}

impl StyledOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the style props of the new component.
    ///
    /// Without this, style props are inherited from the wrapped component.
    pub fn style_props<I>(mut self, fns: I) -> Self
    where
        I: IntoIterator<Item = SharedStyleFn>,
    {
        self.style_props = Some(fns.into_iter().collect());
        self
    }
}

/// The element tag and CSS produced for one set of props.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub tag: String,
    pub css: Css,
}

/// A component descriptor with base styles and style props.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use propcss::component::{Styled, StyledOptions};
/// use propcss::system::SPACE;
/// use propcss::Css;
/// use serde_json::json;
///
/// let boxed = Styled::new("div", StyledOptions::new().style_props([Arc::clone(&SPACE)]));
/// let image = Styled::new(boxed, StyledOptions::new());
///
/// assert_eq!(image.display_name(), "Styled(Styled(div))");
///
/// let rendered = image.render(&json!({ "as": "img", "px": 1 }));
/// assert_eq!(rendered.tag, "img");
/// assert_eq!(
///     rendered.css,
///     Css::List(vec![Css::List(vec![
///         Css::declaration("paddingLeft", "4px"),
///         Css::declaration("paddingRight", "4px"),
///     ])])
/// );
/// ```
#[derive(Clone)]
pub struct Styled {
    target: Target,
    styles: Vec<SharedStyleFn>,
    style_props: Vec<SharedStyleFn>,
    composed_style_props: Compose,
    display_name: String,
}

impl Styled {
    /// Creates a component around `target`.
    pub fn new(target: impl Into<Target>, options: StyledOptions) -> Self {
        let target = target.into();

        let style_props = match (options.style_props, &target) {
            (Some(fns), _) => fns,
            (None, Target::Component(inner)) => inner.style_props.clone(),
            (None, Target::Tag(_)) => Vec::new(),
        };

        let display_name = match &target {
            Target::Tag(tag) => format!("Styled({tag})"),
            Target::Component(inner) => format!("Styled({})", inner.display_name),
        };

        Self {
            target,
            composed_style_props: compose(style_props.iter().cloned()),
            styles: Vec::new(),
            style_props,
            display_name,
        }
    }

    /// Appends base styles, evaluated in order before the style props.
    pub fn with_styles<I>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = SharedStyleFn>,
    {
        self.styles.extend(styles);
        self
    }

    /// Overrides the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn style_props(&self) -> &[SharedStyleFn] {
        &self.style_props
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// The element tag at the bottom of the composition.
    pub fn tag(&self) -> &str {
        match &self.target {
            Target::Tag(tag) => tag,
            Target::Component(inner) => inner.tag(),
        }
    }

    /// Renders with props carrying their theme under `theme`.
    ///
    /// A string `as` prop replaces the element tag.
    pub fn render(&self, props: &Value) -> Rendered {
        let (bag, theme) = split_theme(props);
        let tag = match bag.get("as") {
            Some(Value::String(tag)) => tag.clone(),
            _ => self.tag().to_string(),
        };
        Rendered {
            tag,
            css: Css::List(self.collect(&bag, &theme, false)),
        }
    }

    fn collect(&self, props: &PropertyBag, theme: &Theme, composed: bool) -> Vec<Css> {
        let mut out = match &self.target {
            Target::Component(inner) => inner.collect(props, theme, true),
            Target::Tag(_) => Vec::new(),
        };

        out.extend(apply_all(&self.styles, props, theme));

        if !composed {
            match self.composed_style_props.apply(props, theme) {
                Some(Css::List(items)) => out.extend(items),
                Some(css) => out.push(css),
                None => {}
            }
        }

        out
    }
}

impl StyleFn for Styled {
    fn apply(&self, props: &PropertyBag, theme: &Theme) -> Option<Css> {
        Some(Css::List(self.collect(props, theme, false)))
    }
}

impl fmt::Debug for Styled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Styled")
            .field("display_name", &self.display_name)
            .field("tag", &self.tag())
            .field("styles", &self.styles.len())
            .field("style_props", &self.style_props.len())
            .finish()
    }
}
