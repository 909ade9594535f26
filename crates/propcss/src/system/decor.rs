//! Borders, backgrounds and other decoration props.

use once_cell::sync::Lazy;

use super::group;
use crate::style::{get_px, style, SharedStyleFn, StyleFn, StyleProp};

pub fn border() -> StyleProp {
    style("border").key("borders")
}

pub fn border_width() -> StyleProp {
    style("borderWidth").key("borderWidths").transform(get_px)
}

pub fn border_style() -> StyleProp {
    style("borderStyle").key("borderStyles")
}

pub fn border_color() -> StyleProp {
    style("borderColor").key("colors")
}

pub fn border_top() -> StyleProp {
    style("borderTop").key("borders")
}

pub fn border_right() -> StyleProp {
    style("borderRight").key("borders")
}

pub fn border_bottom() -> StyleProp {
    style("borderBottom").key("borders")
}

pub fn border_left() -> StyleProp {
    style("borderLeft").key("borders")
}

pub fn border_radius() -> StyleProp {
    style("borderRadius").key("radii").transform(get_px)
}

pub static BORDERS: Lazy<SharedStyleFn> = Lazy::new(|| {
    group([
        border(),
        border_top(),
        border_right(),
        border_bottom(),
        border_left(),
        border_width(),
        border_style(),
        border_color(),
        border_radius(),
    ])
    .shared()
});

/// `background`, also read from `bg`.
pub fn background() -> StyleProp {
    style("background").alias("bg")
}

/// `backgroundColor`, also read from `bgColor`, resolved against `colors`.
pub fn background_color() -> StyleProp {
    style("backgroundColor").alias("bgColor").key("colors")
}

pub fn background_image() -> StyleProp {
    style("backgroundImage")
}

pub fn background_size() -> StyleProp {
    style("backgroundSize")
}

pub fn background_position() -> StyleProp {
    style("backgroundPosition")
}

pub fn background_repeat() -> StyleProp {
    style("backgroundRepeat")
}

pub static BACKGROUNDS: Lazy<SharedStyleFn> = Lazy::new(|| {
    group([
        background(),
        background_color(),
        background_image(),
        background_size(),
        background_position(),
        background_repeat(),
    ])
    .shared()
});

pub fn box_shadow() -> StyleProp {
    style("boxShadow").key("shadows")
}

pub fn opacity() -> StyleProp {
    style("opacity")
}

pub fn overflow() -> StyleProp {
    style("overflow")
}

pub fn cursor() -> StyleProp {
    style("cursor")
}
