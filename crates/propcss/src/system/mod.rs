//! Ready-made style functions for common CSS properties.
//!
//! Each property has a constructor returning its [`StyleProp`], so it can be
//! used alone or reconfigured. Related properties are grouped into composites
//! exposed as lazily built statics:
//!
//! | Static | Props |
//! |--------|-------|
//! | [`SPACE`] | margin, padding and their aliases, `mx`/`my`/`px`/`py` |
//! | [`TYPOGRAPHY`] | color, font, line height, letter spacing, text props |
//! | [`SIZE`] | width, height and their min/max variants |
//! | [`FLEXBOX`] | flex container and item props |
//! | [`GRID`] | grid gaps, tracks and placement |
//! | [`BORDERS`] | borders, border width/style/color, radius |
//! | [`BACKGROUNDS`] | background and its longhands, `bg`/`bgColor` |
//! | [`POSITIONING`] | display, position, z-index, offsets |
//!
//! ```rust
//! use propcss::system::{SPACE, TYPOGRAPHY};
//! use propcss::{Css, StyleFn};
//! use serde_json::json;
//!
//! let css = TYPOGRAPHY.evaluate(&json!({ "fontSize": 2 }));
//! assert_eq!(css, Some(Css::List(vec![Css::declaration("fontSize", "16px")])));
//!
//! let css = SPACE.evaluate(&json!({ "px": 3 }));
//! assert_eq!(
//!     css,
//!     Some(Css::List(vec![
//!         Css::declaration("paddingLeft", "16px"),
//!         Css::declaration("paddingRight", "16px"),
//!     ]))
//! );
//! ```

mod decor;
mod layout;
mod position;
mod space;
mod typography;

use crate::style::{compose, Compose, StyleFn, StyleProp};

pub use decor::{
    background, background_color, background_image, background_position, background_repeat,
    background_size, border, border_bottom, border_color, border_left, border_radius,
    border_right, border_style, border_top, border_width, box_shadow, cursor, opacity, overflow,
    BACKGROUNDS, BORDERS,
};
pub use layout::{
    align_content, align_items, align_self, flex, flex_basis, flex_direction, flex_wrap, grid_area,
    grid_auto_columns, grid_auto_flow, grid_auto_rows, grid_column, grid_column_gap, grid_gap,
    grid_row, grid_row_gap, grid_template_areas, grid_template_columns, grid_template_rows,
    height, justify_content, justify_items, justify_self, max_height, max_width, min_height,
    min_width, order, width, FLEXBOX, GRID, SIZE,
};
pub use position::{bottom, display, left, position, right, top, vertical_align, z_index, POSITIONING};
pub use space::{
    expand_space_shorthands, margin, margin_bottom, margin_left, margin_right, margin_top,
    padding, padding_bottom, padding_left, padding_right, SPACE, SPACE_SCALE,
};
pub use typography::{
    color, font_family, font_size, font_style, font_weight, letter_spacing, line_height,
    text_align, text_decoration, white_space, FONT_SIZE_SCALE, TYPOGRAPHY,
};

/// Composes single-prop style functions in the given order.
fn group<I>(props: I) -> Compose
where
    I: IntoIterator<Item = StyleProp>,
{
    compose(props.into_iter().map(StyleFn::shared))
}
