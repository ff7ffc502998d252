//! Font descriptors.

use std::fmt;

/// Which typeface a [`Font`] uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// The platform's standard UI typeface.
    System,
    /// A typeface looked up by name, e.g. `"Menlo"`.
    Named(String),
}

/// A typeface at a point size.
///
/// This is a descriptor, not a loaded font: the UI layer turns it into a
/// toolkit font object. Construction goes through the
/// [`Platform`](crate::Platform) so hosts can substitute their own defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f64,
}

impl Font {
    pub fn system(size: f64) -> Self {
        Self {
            family: FontFamily::System,
            size,
        }
    }

    pub fn named(name: impl Into<String>, size: f64) -> Self {
        Self {
            family: FontFamily::Named(name.into()),
            size,
        }
    }

    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Point size.
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn is_system(&self) -> bool {
        self.family == FontFamily::System
    }

    /// Returns the same family at a different size.
    pub fn with_size(&self, size: f64) -> Self {
        Self {
            family: self.family.clone(),
            size,
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.family {
            FontFamily::System => write!(f, "System {}pt", self.size),
            FontFamily::Named(name) => write!(f, "{} {}pt", name, self.size),
        }
    }
}
