//! Platform seam for fonts and named images.
//!
//! Theme definitions never talk to a UI toolkit directly. Whatever the host
//! platform provides (its default UI font, its standard font size, its
//! named-image catalog) reaches the theme through the [`Platform`] trait.
//! [`DefaultPlatform`] is a toolkit-free implementation suitable for tests,
//! tools and headless use.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use crate::types::Font;

/// Standard UI font size used by [`DefaultPlatform`].
pub const DEFAULT_SYSTEM_FONT_SIZE: f64 = 13.0;

/// A platform image resolved by symbolic name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image {
    pub name: String,
    /// Where the image data lives, when the platform knows.
    pub path: Option<PathBuf>,
}

impl Image {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Host services consumed by theme accessors.
///
/// All methods except [`image_named`](Platform::image_named) have defaults
/// matching [`DefaultPlatform`].
pub trait Platform: fmt::Debug + Send + Sync {
    /// The platform's standard UI font size, in points.
    fn system_font_size(&self) -> f64 {
        DEFAULT_SYSTEM_FONT_SIZE
    }

    /// The platform's UI font at `size`.
    fn system_font(&self, size: f64) -> Font {
        Font::system(size)
    }

    /// Looks up a font by family name.
    ///
    /// Returning `None` makes the theme fall back to
    /// [`system_font`](Platform::system_font) at the same size.
    fn font(&self, family: &str, size: f64) -> Option<Font> {
        Some(Font::named(family, size))
    }

    /// Resolves a symbolic image name.
    fn image_named(&self, name: &str) -> Option<Image>;
}

/// Toolkit-free [`Platform`] with a registrable image catalog.
///
/// # Example
///
/// ```rust
/// use themestore::{DefaultPlatform, Platform};
///
/// let platform = DefaultPlatform::new()
///     .with_image("icon_sync_checkmark", "assets/icon_sync_checkmark.png")
///     .with_system_font_size(14.0);
///
/// assert!(platform.image_named("icon_sync_checkmark").is_some());
/// assert!(platform.image_named("missing").is_none());
/// assert_eq!(platform.system_font_size(), 14.0);
/// ```
#[derive(Debug, Clone)]
pub struct DefaultPlatform {
    system_font_size: f64,
    images: HashMap<String, Image>,
}

impl DefaultPlatform {
    pub fn new() -> Self {
        Self {
            system_font_size: DEFAULT_SYSTEM_FONT_SIZE,
            images: HashMap::new(),
        }
    }

    /// Registers an image under `name`.
    pub fn with_image(mut self, name: &str, path: impl Into<PathBuf>) -> Self {
        self.images
            .insert(name.to_string(), Image::new(name).with_path(path));
        self
    }

    pub fn with_system_font_size(mut self, size: f64) -> Self {
        self.system_font_size = size;
        self
    }
}

impl Default for DefaultPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for DefaultPlatform {
    fn system_font_size(&self) -> f64 {
        self.system_font_size
    }

    fn image_named(&self, name: &str) -> Option<Image> {
        self.images.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_platform_fonts() {
        let platform = DefaultPlatform::new();
        assert_eq!(platform.system_font_size(), DEFAULT_SYSTEM_FONT_SIZE);
        assert_eq!(platform.system_font(12.0), Font::system(12.0));
        assert_eq!(platform.font("Menlo", 12.0), Some(Font::named("Menlo", 12.0)));
    }

    #[test]
    fn test_image_catalog() {
        let platform = DefaultPlatform::new().with_image("logo", "/tmp/logo.png");
        let image = platform.image_named("logo").unwrap();
        assert_eq!(image.name, "logo");
        assert_eq!(image.path, Some(PathBuf::from("/tmp/logo.png")));
        assert_eq!(platform.image_named("other"), None);
    }
}
