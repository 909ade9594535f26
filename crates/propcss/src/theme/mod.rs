//! Themes: scales, breakpoints and theme loading.
//!
//! This module provides:
//!
//! - [`Theme`]: A JSON mapping of named scales with a fluent builder API
//! - [`Breakpoints`]: Positional or named breakpoint definitions
//! - [`ThemeError`]: Errors from loading theme documents
//!
//! Style functions read scales from the theme through their lookup key and
//! fall back to raw values when an entry is missing.

mod breakpoints;
mod error;
#[allow(clippy::module_inception)]
mod theme;

pub use breakpoints::{media_query, Breakpoints, DEFAULT_BREAKPOINTS};
pub use error::ThemeError;
pub use theme::Theme;
