//! Text and font props.

use once_cell::sync::Lazy;

use super::group;
use crate::style::{get_px, style, SharedStyleFn, StyleFn, StyleProp};

/// Font-size scale used when the theme has no `fontSizes` entry.
pub const FONT_SIZE_SCALE: [i64; 9] = [12, 14, 16, 20, 24, 32, 48, 64, 72];

pub fn color() -> StyleProp {
    style("color").key("colors")
}

/// Font size, resolved against `fontSizes` and converted to pixels.
pub fn font_size() -> StyleProp {
    style("fontSize")
        .key("fontSizes")
        .transform(get_px)
        .scale(FONT_SIZE_SCALE.to_vec())
}

pub fn font_family() -> StyleProp {
    style("fontFamily").key("fonts")
}

pub fn font_weight() -> StyleProp {
    style("fontWeight").key("fontWeights")
}

pub fn line_height() -> StyleProp {
    style("lineHeight").key("lineHeights")
}

pub fn font_style() -> StyleProp {
    style("fontStyle")
}

pub fn text_align() -> StyleProp {
    style("textAlign")
}

pub fn letter_spacing() -> StyleProp {
    style("letterSpacing").key("letterSpacings").transform(get_px)
}

pub fn text_decoration() -> StyleProp {
    style("textDecoration")
}

pub fn white_space() -> StyleProp {
    style("whiteSpace")
}

pub static TYPOGRAPHY: Lazy<SharedStyleFn> = Lazy::new(|| {
    group([
        color(),
        font_size(),
        font_family(),
        font_weight(),
        font_style(),
        line_height(),
        text_align(),
        letter_spacing(),
        text_decoration(),
        white_space(),
    ])
    .shared()
});
