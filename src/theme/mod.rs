//! Theme definitions with inheritance and cached derived values.
//!
//! - [`ThemeDefinition`]: a named mapping of raw values with an optional
//!   parent, typed accessors and a per-definition cache of parsed colors
//!   and fonts
//!
//! Composite values (insets, points, sizes, animation timing, font sizes)
//! are read from sibling keys sharing a prefix: `marginTop`, `marginLeft`,
//! `marginBottom`, `marginRight` make up the insets named `margin`.

mod cache;
mod composite;
mod definition;

pub use definition::ThemeDefinition;
