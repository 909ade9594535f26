//! Nested CSS blocks built from a fixed set of style functions.
//!
//! A [`CssFactory`] holds style functions and a default theme. Each call to
//! [`CssFactory::css`] captures a block of args, literal or produced from
//! the theme, and resolving the block yields the args themselves, the output
//! of every style function, and one nested entry per object-valued arg
//! (selectors such as `&:hover`).

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::style::{apply_all, Css, PropertyBag, SharedStyleFn, StyleFn};
use crate::theme::Theme;

/// Creates a factory with an empty default theme.
///
/// # Example
///
/// ```rust
/// use propcss::{create_css, style, Css, StyleFn, Theme};
/// use serde_json::json;
///
/// let css = create_css([style("color").key("colors").shared()]);
/// let theme = Theme::new().add("colors", json!({ "primary": "#07c" }));
///
/// let block = css.css(json!({ "color": "primary" }));
/// assert_eq!(
///     block.with_theme(&theme),
///     Some(Css::List(vec![
///         Css::declaration("color", "primary"),
///         Css::declaration("color", "#07c"),
///     ]))
/// );
/// ```
pub fn create_css<I>(fns: I) -> CssFactory
where
    I: IntoIterator<Item = SharedStyleFn>,
{
    CssFactory::with_theme(Theme::new(), fns)
}

/// Style functions plus the theme used when none is supplied.
#[derive(Clone)]
pub struct CssFactory {
    theme: Theme,
    fns: Arc<[SharedStyleFn]>,
}

impl CssFactory {
    /// Creates a factory with a default theme.
    pub fn with_theme<I>(theme: Theme, fns: I) -> Self
    where
        I: IntoIterator<Item = SharedStyleFn>,
    {
        Self {
            theme,
            fns: fns.into_iter().collect(),
        }
    }

    /// The theme used when a block is resolved without one.
    pub fn default_theme(&self) -> &Theme {
        &self.theme
    }

    /// Captures a block of args for later resolution.
    pub fn css(&self, args: impl Into<CssArgs>) -> CssBlock {
        CssBlock {
            factory: self.clone(),
            args: args.into(),
        }
    }

    fn build(&self, args: &CssArgs, theme: &Theme) -> Option<Vec<Css>> {
        let args = match args {
            CssArgs::Literal(bag) => bag.clone(),
            CssArgs::Producer(produce) => produce(&CssContext {
                factory: self,
                theme,
            }),
        };
        self.build_literal(args, theme)
    }

    fn build_literal(&self, args: PropertyBag, theme: &Theme) -> Option<Vec<Css>> {
        let empty_args = args.is_empty();
        let mut values = vec![Css::Declaration(args.clone())];

        values.extend(apply_all(self.fns.iter(), &args, theme));

        for (key, value) in args {
            if let Value::Object(nested) = value {
                let nested = self
                    .build_literal(nested, theme)
                    .map_or(Value::Null, |list| Css::List(list).into());
                values.push(Css::declaration(key, nested));
            }
        }

        // Empty args with no other output resolve to nothing.
        (!empty_args || values.len() > 1).then_some(values)
    }
}

impl fmt::Debug for CssFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CssFactory")
            .field("theme", &self.theme)
            .field("fns", &self.fns.len())
            .finish()
    }
}

/// Args for a CSS block.
#[derive(Clone)]
pub enum CssArgs {
    /// A literal property bag.
    Literal(PropertyBag),
    /// Builds the property bag once the theme is known.
    Producer(Arc<dyn Fn(&CssContext<'_>) -> PropertyBag + Send + Sync>),
}

impl CssArgs {
    /// Wraps a closure producing args from the resolution context.
    ///
    /// ```rust
    /// use propcss::{create_css, CssArgs, Css, Theme};
    /// use serde_json::json;
    ///
    /// let css = create_css([]);
    /// let theme = Theme::new().add("colors", json!({ "primary": "#07c" }));
    ///
    /// let block = css.css(CssArgs::producer(|cx| {
    ///     let color = cx.get("colors.primary").and_then(|c| c.as_str()).unwrap_or("black");
    ///     let mut args = propcss::PropertyBag::new();
    ///     args.insert("outline".into(), json!(format!("1px solid {color}")));
    ///     args
    /// }));
    ///
    /// assert_eq!(
    ///     block.with_theme(&theme),
    ///     Some(Css::List(vec![Css::declaration("outline", "1px solid #07c")]))
    /// );
    /// ```
    pub fn producer<F>(produce: F) -> Self
    where
        F: Fn(&CssContext<'_>) -> PropertyBag + Send + Sync + 'static,
    {
        CssArgs::Producer(Arc::new(produce))
    }
}

impl fmt::Debug for CssArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssArgs::Literal(bag) => f.debug_tuple("Literal").field(bag).finish(),
            CssArgs::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

impl From<PropertyBag> for CssArgs {
    fn from(bag: PropertyBag) -> Self {
        CssArgs::Literal(bag)
    }
}

/// Objects become literal args; any other value is an empty block.
impl From<Value> for CssArgs {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(bag) => CssArgs::Literal(bag),
            _ => CssArgs::Literal(PropertyBag::new()),
        }
    }
}

/// What a producer sees while a block resolves.
pub struct CssContext<'a> {
    factory: &'a CssFactory,
    theme: &'a Theme,
}

impl<'a> CssContext<'a> {
    /// Resolves a dotted path in the theme.
    pub fn get(&self, path: &str) -> Option<&'a Value> {
        self.theme.get(path)
    }

    /// Resolves a dotted path in the theme, with a fallback.
    pub fn get_or(&self, path: &str, fallback: Value) -> Value {
        self.get(path).cloned().unwrap_or(fallback)
    }

    /// Resolves a nested block against the same theme, for use as the value
    /// of a selector key. An empty block resolves to null.
    pub fn sub(&self, args: impl Into<CssArgs>) -> Value {
        self.factory
            .build(&args.into(), self.theme)
            .map_or(Value::Null, |list| Css::List(list).into())
    }

    /// The theme the block is resolving against.
    pub fn theme(&self) -> &'a Theme {
        self.theme
    }
}

/// Args captured by [`CssFactory::css`], waiting for a theme.
#[derive(Debug, Clone)]
pub struct CssBlock {
    factory: CssFactory,
    args: CssArgs,
}

impl CssBlock {
    /// Resolves against the factory's default theme.
    pub fn resolve(&self) -> Option<Css> {
        self.with_theme(&self.factory.theme)
    }

    /// Resolves against `theme`.
    ///
    /// Returns `None` when the args are empty and no style function
    /// contributes anything.
    pub fn with_theme(&self, theme: &Theme) -> Option<Css> {
        self.factory.build(&self.args, theme).map(Css::List)
    }

    /// Resolves against a value that is either a theme or a property bag
    /// carrying one under `theme`. Null uses the default theme.
    pub fn with_props(&self, theme_or_props: &Value) -> Option<Css> {
        if theme_or_props.is_null() {
            return self.resolve();
        }
        self.with_theme(&Theme::from_theme_or_props(theme_or_props))
    }
}

/// Blocks work as style functions, so they can be attached to components.
/// Props are ignored; an empty theme means the default theme.
impl StyleFn for CssBlock {
    fn apply(&self, _props: &PropertyBag, theme: &Theme) -> Option<Css> {
        if theme.is_empty() {
            self.resolve()
        } else {
            self.with_theme(theme)
        }
    }
}
