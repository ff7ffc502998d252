//! Suffix convention for multi-part values.
//!
//! Composite values are stored as sibling scalar keys sharing a prefix:
//! `marginTop`, `marginLeft`, ... for the insets named `margin`. The
//! convention is fixed for compatibility with existing theme files and is
//! expressed only here.

pub(crate) const INSET_SUFFIXES: [&str; 4] = ["Top", "Left", "Bottom", "Right"];
pub(crate) const POINT_SUFFIXES: [&str; 2] = ["X", "Y"];
pub(crate) const SIZE_SUFFIXES: [&str; 2] = ["Width", "Height"];
pub(crate) const ANIMATION_TIMING_SUFFIXES: [&str; 2] = ["Duration", "Delay"];
pub(crate) const FONT_SIZE_SUFFIX: &str = "Size";
pub(crate) const ANIMATION_CURVE_SUFFIX: &str = "Curve";

/// Name of one component key, e.g. `component_key("margin", "Top")`.
pub(crate) fn component_key(key: &str, suffix: &str) -> String {
    format!("{}{}", key, suffix)
}

/// Resolves every component of `key` through `resolve`, in suffix order.
pub(crate) fn compose<T, const N: usize>(
    key: &str,
    suffixes: [&str; N],
    mut resolve: impl FnMut(&str) -> T,
) -> [T; N] {
    suffixes.map(|suffix| resolve(&component_key(key, suffix)))
}
