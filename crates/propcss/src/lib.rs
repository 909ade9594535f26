//! Themeable style functions that turn component props into CSS.
//!
//! A style function reads props such as `margin`, `color` or `width`,
//! resolves them against the matching scale of a theme, and produces CSS
//! declaration fragments. Values can be responsive: arrays map positions to
//! breakpoints, objects map breakpoint keys to values.
//!
//! # Modules
//!
//! - [`style`] - The engine: [`style()`], [`compose`], [`map_props`], transforms
//! - [`css`] - Nested CSS blocks with [`create_css`]
//! - [`system`] - Ready-made style functions for common CSS properties
//! - [`component`] - Attaching style functions to components
//! - [`theme`] - [`Theme`] loading and breakpoints
//!
//! # Example
//!
//! ```rust
//! use propcss::{style, Css, StyleFn};
//! use serde_json::json;
//!
//! let width = style("width");
//!
//! let css = width.evaluate(&json!({ "width": ["100%", "50%"] }));
//! assert_eq!(
//!     css,
//!     Some(Css::List(vec![
//!         Css::declaration("width", "100%"),
//!         Css::declaration(
//!             "@media screen and (min-width: 40em)",
//!             Css::declaration("width", "50%"),
//!         ),
//!     ]))
//! );
//! ```
//!
//! Themes are plain JSON mappings and can be loaded from files:
//!
//! ```rust,ignore
//! let theme = propcss::Theme::from_file("theme.yaml")?;
//! let css = propcss::system::SPACE.apply(&props, &theme);
//! ```

pub mod component;
pub mod css;
mod resolve;
mod sheet;
pub mod style;
pub mod system;
pub mod theme;
mod util;

pub use component::{Rendered, Styled, StyledOptions, Target};
pub use css::{create_css, CssArgs, CssBlock, CssContext, CssFactory};
pub use resolve::{get, get_or, lookup, path_key};
pub use sheet::to_stylesheet;
pub use style::{
    compose, from_fn, get_px, get_space, get_value, get_width, map_props, px, split_theme, style,
    theme_get, themed, variant, Compose, Css, MapProps, PropertyBag, SharedStyleFn, StyleFn,
    StyleProp, StyleValue, Themed, TransformFn, Variant,
};
pub use theme::{media_query, Breakpoints, Theme, ThemeError, DEFAULT_BREAKPOINTS};
pub use util::{camel_to_kebab, format_number};
