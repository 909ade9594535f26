//! Combinators over style functions.

use std::fmt;

use super::function::{apply_all, PropertyBag, SharedStyleFn, StyleFn};
use super::output::Css;
use crate::theme::Theme;

/// Combines style functions into one that runs each of them in order.
///
/// Every function is evaluated; results that are `None` or empty lists are
/// omitted and the survivors keep their order. The composite always returns a
/// list, possibly empty.
///
/// # Example
///
/// ```rust
/// use propcss::{compose, style, Css, StyleFn};
/// use serde_json::json;
///
/// let box_style = compose([style("width").shared(), style("color").shared()]);
///
/// assert_eq!(
///     box_style.evaluate(&json!({ "color": "red" })),
///     Some(Css::List(vec![Css::declaration("color", "red")]))
/// );
/// ```
pub fn compose<I>(fns: I) -> Compose
where
    I: IntoIterator<Item = SharedStyleFn>,
{
    Compose {
        fns: fns.into_iter().collect(),
    }
}

/// A composed style function. See [`compose`].
#[derive(Clone, Default)]
pub struct Compose {
    fns: Vec<SharedStyleFn>,
}

impl Compose {
    /// Appends another style function, returning the composite for chaining.
    pub fn with(mut self, f: SharedStyleFn) -> Self {
        self.fns.push(f);
        self
    }

    /// Number of constituent functions.
    pub fn len(&self) -> usize {
        self.fns.len()
    }

    /// Returns true when nothing has been composed.
    pub fn is_empty(&self) -> bool {
        self.fns.is_empty()
    }

    /// The constituent functions in evaluation order.
    pub fn functions(&self) -> &[SharedStyleFn] {
        &self.fns
    }
}

impl fmt::Debug for Compose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose").field("len", &self.fns.len()).finish()
    }
}

impl StyleFn for Compose {
    fn apply(&self, props: &PropertyBag, theme: &Theme) -> Option<Css> {
        Some(Css::List(apply_all(&self.fns, props, theme)))
    }
}

/// Rewrites the property bag before handing it to `inner`.
///
/// The mapper sees the props without the theme and returns the bag the inner
/// function evaluates. Typical use is expanding shorthand props.
///
/// # Example
///
/// ```rust
/// use propcss::{map_props, style, Css, PropertyBag, StyleFn};
/// use serde_json::json;
///
/// let size = map_props(
///     |props: &PropertyBag| {
///         let mut mapped = props.clone();
///         if let Some(size) = props.get("size") {
///             mapped.entry("width").or_insert_with(|| size.clone());
///         }
///         mapped
///     },
///     style("width"),
/// );
///
/// assert_eq!(size.evaluate(&json!({ "size": 10 })), Some(Css::declaration("width", 10)));
/// ```
pub fn map_props<M, F>(mapper: M, inner: F) -> MapProps<M, F>
where
    M: Fn(&PropertyBag) -> PropertyBag + Send + Sync,
    F: StyleFn,
{
    MapProps { mapper, inner }
}

/// A style function with a props rewrite in front. See [`map_props`].
#[derive(Clone)]
pub struct MapProps<M, F> {
    mapper: M,
    inner: F,
}

impl<M, F: fmt::Debug> fmt::Debug for MapProps<M, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapProps")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<M, F> StyleFn for MapProps<M, F>
where
    M: Fn(&PropertyBag) -> PropertyBag + Send + Sync,
    F: StyleFn,
{
    fn apply(&self, props: &PropertyBag, theme: &Theme) -> Option<Css> {
        let mapped = (self.mapper)(props);
        self.inner.apply(&mapped, theme)
    }
}
