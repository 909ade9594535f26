//! Margin and padding.

use once_cell::sync::Lazy;

use super::group;
use crate::style::{get_space, map_props, style, PropertyBag, SharedStyleFn, StyleFn, StyleProp};

/// Spacing scale used when the theme has no `space` entry.
pub const SPACE_SCALE: [i64; 9] = [0, 4, 8, 16, 32, 64, 128, 256, 512];

fn space_prop(prop: &str, alias: &str) -> StyleProp {
    style(prop)
        .alias(alias)
        .key("space")
        .transform(get_space)
        .scale(SPACE_SCALE.to_vec())
}

pub fn margin() -> StyleProp {
    space_prop("margin", "m")
}

pub fn margin_top() -> StyleProp {
    space_prop("marginTop", "mt")
}

pub fn margin_bottom() -> StyleProp {
    space_prop("marginBottom", "mb")
}

pub fn margin_left() -> StyleProp {
    space_prop("marginLeft", "ml")
}

pub fn margin_right() -> StyleProp {
    space_prop("marginRight", "mr")
}

pub fn padding() -> StyleProp {
    space_prop("padding", "p")
}

pub fn padding_top() -> StyleProp {
    space_prop("paddingTop", "pt")
}

pub fn padding_bottom() -> StyleProp {
    space_prop("paddingBottom", "pb")
}

pub fn padding_left() -> StyleProp {
    space_prop("paddingLeft", "pl")
}

pub fn padding_right() -> StyleProp {
    space_prop("paddingRight", "pr")
}

/// Axis shorthands and the `(longhand, alias)` pairs each one fills.
const SHORTHANDS: [(&str, [(&str, &str); 2]); 4] = [
    ("my", [("marginTop", "mt"), ("marginBottom", "mb")]),
    ("mx", [("marginLeft", "ml"), ("marginRight", "mr")]),
    ("py", [("paddingTop", "pt"), ("paddingBottom", "pb")]),
    ("px", [("paddingLeft", "pl"), ("paddingRight", "pr")]),
];

fn is_set(props: &PropertyBag, key: &str) -> bool {
    props.get(key).is_some_and(|value| !value.is_null())
}

/// Expands `my`, `mx`, `py` and `px` into their longhand props.
///
/// A shorthand only fills a side whose longhand and alias are both unset, so
/// `{ "mx": 2, "ml": 4 }` keeps `ml` and sets `marginRight` from `mx`.
pub fn expand_space_shorthands(props: &PropertyBag) -> PropertyBag {
    let mut mapped = props.clone();

    for (shorthand, sides) in SHORTHANDS {
        let Some(value) = props.get(shorthand).filter(|v| !v.is_null()) else {
            continue;
        };
        for (longhand, alias) in sides {
            if !is_set(props, longhand) && !is_set(props, alias) {
                mapped.insert(longhand.to_string(), value.clone());
            }
        }
    }

    mapped
}

/// All margin and padding props, including the axis shorthands.
pub static SPACE: Lazy<SharedStyleFn> = Lazy::new(|| {
    map_props(
        expand_space_shorthands,
        group([
            margin(),
            margin_top(),
            margin_bottom(),
            margin_left(),
            margin_right(),
            padding(),
            padding_top(),
            padding_bottom(),
            padding_left(),
            padding_right(),
        ]),
    )
    .shared()
});
