//! Inheritable UI theme definitions with typed accessors.
//!
//! A theme is a named, nested mapping of raw values (booleans, numbers,
//! strings and sub-mappings) loaded from JSON or YAML. Keys a theme does not
//! define are looked up in its parent, so a theme only needs to list what it
//! changes. Accessors turn raw values into typed ones and never fail: a
//! missing or malformed key yields the type's default.
//!
//! # Modules
//!
//! - [`types`]: colors, fonts, geometry and other accessor results
//! - [`theme`]: [`ThemeDefinition`], the accessors and the derived-value cache
//! - [`loader`]: parsing documents, discovering theme files, theme libraries
//! - [`manager`]: the active theme and light/dark selection
//! - [`platform`]: the seam to the host's font and image catalogs
//!
//! # Example
//!
//! ```rust
//! use themestore::{Color, EdgeInsets, ThemeLibrary, ThemeSource};
//!
//! let library = ThemeLibrary::from_document(&ThemeSource::yaml(
//!     r##"
//! Default:
//!   tintColor: "#4895d9"
//!   bodyFont: system
//!   bodyFontSize: 15
//!   noteMarginTop: 12
//!   noteMarginLeft: 20
//!   noteMarginBottom: 12
//!   noteMarginRight: 20
//! dark:
//!   tintColor: "#6aa8e0"
//! "##,
//! ))
//! .unwrap();
//!
//! let dark = library.theme_named("dark").unwrap();
//! assert_eq!(dark.color("tintColor"), Color::rgb(0x6a, 0xa8, 0xe0));
//! assert_eq!(dark.font("bodyFont").size(), 15.0);
//! assert_eq!(dark.edge_insets("noteMargin"), EdgeInsets::new(12.0, 20.0, 12.0, 20.0));
//! assert_eq!(dark.color("missingColor"), Color::CLEAR);
//! ```

pub mod error;
pub mod loader;
pub mod manager;
pub mod platform;
pub mod theme;
pub mod types;
pub mod value;

pub use error::LoadError;
pub use loader::{
    walk_theme_dir, RegistryError, ResolvedTheme, SourceFormat, ThemeFile, ThemeLibrary,
    ThemeRegistry, ThemeSource, DEFAULT_THEME_NAME, THEME_EXTENSIONS,
};
pub use manager::{
    detect_color_mode, reset_appearance_detector, set_appearance_detector, ColorMode,
    ConfigError, ManagerConfig, ThemeManager, ThemeOption, UnknownThemeOption,
};
pub use platform::{DefaultPlatform, Image, Platform, DEFAULT_SYSTEM_FONT_SIZE};
pub use theme::ThemeDefinition;
pub use types::{
    AnimationCurve, AnimationSpecifier, Color, EdgeInsets, Font, FontFamily, Point, Size,
    TextCaseTransform,
};
pub use value::{Number, Value, ValueMap};
