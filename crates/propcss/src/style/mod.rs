//! The style-function engine.
//!
//! This module provides the core styling primitives:
//!
//! - [`style`]: A style function for one prop, with responsive values
//! - [`compose`] and [`map_props`]: Combinators over style functions
//! - [`variant`], [`themed`] and [`theme_get`]: Theme-driven style objects
//! - Value transforms such as [`px`] and [`get_space`]
//! - [`Css`]: The declaration tree every style function produces
//!
//! A style function receives a property bag and a theme. Props resolve
//! against the scale named by the function's lookup key, and responsive
//! values expand into media-query fragments using the theme's breakpoints.

mod compose;
mod function;
mod output;
mod prop;
mod transform;
mod value;
mod variant;

pub use compose::{compose, map_props, Compose, MapProps};
pub use function::{from_fn, split_theme, PropertyBag, SharedStyleFn, StyleFn};
pub use output::Css;
pub use prop::{style, StyleProp};
pub use transform::{get_px, get_space, get_value, get_width, px, TransformFn};
pub use value::{StyleValue, BASE_KEY};
pub use variant::{theme_get, themed, variant, Themed, Variant, DEFAULT_VARIANT_PROP};

pub(crate) use function::apply_all;
