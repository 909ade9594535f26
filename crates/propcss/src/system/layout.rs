//! Sizing, flexbox and grid props.

use once_cell::sync::Lazy;

use super::group;
use super::space::SPACE_SCALE;
use crate::style::{get_px, get_width, style, SharedStyleFn, StyleFn, StyleProp};

/// Width, resolved against `widths`. Fractions up to 1 become percentages.
pub fn width() -> StyleProp {
    style("width").key("widths").transform(get_width)
}

pub fn max_width() -> StyleProp {
    style("maxWidth").key("maxWidths").transform(get_width)
}

pub fn min_width() -> StyleProp {
    style("minWidth").key("minWidths").transform(get_width)
}

/// Height, resolved against `heights` and converted to pixels.
pub fn height() -> StyleProp {
    style("height").key("heights").transform(get_px)
}

pub fn max_height() -> StyleProp {
    style("maxHeight").key("heights").transform(get_px)
}

pub fn min_height() -> StyleProp {
    style("minHeight").key("heights").transform(get_px)
}

pub static SIZE: Lazy<SharedStyleFn> = Lazy::new(|| {
    group([
        width(),
        max_width(),
        min_width(),
        height(),
        max_height(),
        min_height(),
    ])
    .shared()
});

pub fn align_items() -> StyleProp {
    style("alignItems")
}

pub fn align_content() -> StyleProp {
    style("alignContent")
}

pub fn justify_items() -> StyleProp {
    style("justifyItems")
}

pub fn justify_content() -> StyleProp {
    style("justifyContent")
}

pub fn flex_wrap() -> StyleProp {
    style("flexWrap")
}

pub fn flex_basis() -> StyleProp {
    style("flexBasis").transform(get_width)
}

pub fn flex_direction() -> StyleProp {
    style("flexDirection")
}

pub fn flex() -> StyleProp {
    style("flex")
}

pub fn justify_self() -> StyleProp {
    style("justifySelf")
}

pub fn align_self() -> StyleProp {
    style("alignSelf")
}

pub fn order() -> StyleProp {
    style("order")
}

pub static FLEXBOX: Lazy<SharedStyleFn> = Lazy::new(|| {
    group([
        align_items(),
        align_content(),
        justify_items(),
        justify_content(),
        flex_wrap(),
        flex_basis(),
        flex_direction(),
        flex(),
        justify_self(),
        align_self(),
        order(),
    ])
    .shared()
});

fn gap(prop: &str) -> StyleProp {
    style(prop)
        .key("space")
        .transform(get_px)
        .scale(SPACE_SCALE.to_vec())
}

pub fn grid_gap() -> StyleProp {
    gap("gridGap")
}

pub fn grid_column_gap() -> StyleProp {
    gap("gridColumnGap")
}

pub fn grid_row_gap() -> StyleProp {
    gap("gridRowGap")
}

pub fn grid_column() -> StyleProp {
    style("gridColumn")
}

pub fn grid_row() -> StyleProp {
    style("gridRow")
}

pub fn grid_auto_flow() -> StyleProp {
    style("gridAutoFlow")
}

pub fn grid_auto_columns() -> StyleProp {
    style("gridAutoColumns")
}

pub fn grid_auto_rows() -> StyleProp {
    style("gridAutoRows")
}

pub fn grid_template_columns() -> StyleProp {
    style("gridTemplateColumns")
}

pub fn grid_template_rows() -> StyleProp {
    style("gridTemplateRows")
}

pub fn grid_template_areas() -> StyleProp {
    style("gridTemplateAreas")
}

pub fn grid_area() -> StyleProp {
    style("gridArea")
}

pub static GRID: Lazy<SharedStyleFn> = Lazy::new(|| {
    group([
        grid_gap(),
        grid_column_gap(),
        grid_row_gap(),
        grid_column(),
        grid_row(),
        grid_auto_flow(),
        grid_auto_columns(),
        grid_auto_rows(),
        grid_template_columns(),
        grid_template_rows(),
        grid_template_areas(),
        grid_area(),
    ])
    .shared()
});
