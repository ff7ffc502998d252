//! Loading theme definitions from documents, files and directories.
//!
//! - [`ThemeSource`] / [`SourceFormat`]: JSON or YAML text to parse
//! - [`ThemeRegistry`]: theme files discovered in directories, plus inline
//!   sources, resolved by name
//! - [`ThemeLibrary`]: loaded definitions, linked to the `Default` theme

mod library;
mod registry;
mod source;

pub use library::{ThemeLibrary, DEFAULT_THEME_NAME};
pub use registry::{
    walk_theme_dir, RegistryError, ResolvedTheme, ThemeFile, ThemeRegistry, THEME_EXTENSIONS,
};
pub use source::{SourceFormat, ThemeSource};
