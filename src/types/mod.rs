//! Typed values produced by theme accessors.
//!
//! - [`Color`]: RGBA color parsed from `RRGGBB` / `#RRGGBB`
//! - [`Font`] and [`FontFamily`]: family plus point size
//! - [`EdgeInsets`], [`Point`], [`Size`]: geometry assembled from component keys
//! - [`TextCaseTransform`]: `none` / `upper` / `lower`
//! - [`AnimationSpecifier`] and [`AnimationCurve`]: duration, delay and curve

mod animation;
mod color;
mod font;
mod geometry;
mod text_case;

pub use animation::{AnimationCurve, AnimationSpecifier};
pub use color::Color;
pub use font::{Font, FontFamily};
pub use geometry::{EdgeInsets, Point, Size};
pub use text_case::TextCaseTransform;
