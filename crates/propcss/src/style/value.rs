//! Classification of raw prop values.

use serde_json::{Map, Value};

/// The shape of a prop value as seen by a style function.
///
/// Parsing happens once at the top of every style function, so the rest of
/// the engine matches on the shape instead of probing the JSON value again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue<'a> {
    /// A number, string, boolean or null. Null produces no declaration.
    Scalar(&'a Value),
    /// Position 0 is the base value, position `i` applies from breakpoint
    /// `i - 1` up. Null entries are skipped.
    ResponsiveArray(&'a [Value]),
    /// Keys name breakpoints; `_` (or any unmatched key) is the base value.
    ResponsiveObject(&'a Map<String, Value>),
}

/// Key conventionally used for the base value of a responsive object.
pub const BASE_KEY: &str = "_";

impl<'a> StyleValue<'a> {
    /// Classifies a raw prop value.
    pub fn parse(value: &'a Value) -> Self {
        match value {
            Value::Array(items) => StyleValue::ResponsiveArray(items),
            Value::Object(map) => StyleValue::ResponsiveObject(map),
            scalar => StyleValue::Scalar(scalar),
        }
    }

    /// Returns true for array and object values.
    pub fn is_responsive(&self) -> bool {
        !matches!(self, StyleValue::Scalar(_))
    }
}
