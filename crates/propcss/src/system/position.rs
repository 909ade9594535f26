//! Display, positioning and offsets.

use once_cell::sync::Lazy;

use super::group;
use crate::style::{get_px, style, SharedStyleFn, StyleFn, StyleProp};

pub fn display() -> StyleProp {
    style("display")
}

pub fn position() -> StyleProp {
    style("position")
}

pub fn z_index() -> StyleProp {
    style("zIndex").key("zIndices")
}

pub fn top() -> StyleProp {
    style("top").transform(get_px)
}

pub fn right() -> StyleProp {
    style("right").transform(get_px)
}

pub fn bottom() -> StyleProp {
    style("bottom").transform(get_px)
}

pub fn left() -> StyleProp {
    style("left").transform(get_px)
}

pub static POSITIONING: Lazy<SharedStyleFn> = Lazy::new(|| {
    group([display(), position(), z_index(), top(), right(), bottom(), left()]).shared()
});

pub fn vertical_align() -> StyleProp {
    style("verticalAlign")
}
