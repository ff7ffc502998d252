//! A set of loaded theme definitions linked to a common default.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use super::registry::ThemeRegistry;
use super::source::ThemeSource;
use crate::error::LoadError;
use crate::platform::{DefaultPlatform, Platform};
use crate::theme::ThemeDefinition;
use crate::value::{Value, ValueMap};

/// Name of the theme every other theme in a library inherits from.
pub const DEFAULT_THEME_NAME: &str = "Default";

/// Loaded theme definitions, addressable by name.
///
/// The theme named [`DEFAULT_THEME_NAME`] is the parent of every other
/// theme loaded into the library, so partial themes only need to list the
/// keys they change.
///
/// # Example
///
/// ```rust
/// use themestore::{Color, ThemeLibrary, ThemeSource};
///
/// let library = ThemeLibrary::from_document(&ThemeSource::yaml(
///     r#"
/// Default:
///   tintColor: "4895d9"
///   textColor: "2c3338"
/// dark:
///   textColor: "dcdcde"
/// "#,
/// ))
/// .unwrap();
///
/// let dark = library.theme_named("dark").unwrap();
/// assert_eq!(dark.color("textColor"), Color::rgb(0xdc, 0xdc, 0xde));
/// assert_eq!(dark.color("tintColor"), Color::rgb(0x48, 0x95, 0xd9));
/// ```
#[derive(Debug)]
pub struct ThemeLibrary {
    themes: BTreeMap<String, Arc<ThemeDefinition>>,
    platform: Arc<dyn Platform>,
}

impl ThemeLibrary {
    /// Creates an empty library using [`DefaultPlatform`].
    pub fn new() -> Self {
        Self::with_platform(Arc::new(DefaultPlatform::new()))
    }

    /// Creates an empty library whose themes use `platform`.
    pub fn with_platform(platform: Arc<dyn Platform>) -> Self {
        Self {
            themes: BTreeMap::new(),
            platform,
        }
    }

    /// Creates a library from a document mapping theme names to definitions.
    pub fn from_document(source: &ThemeSource) -> Result<Self, LoadError> {
        let mut library = Self::new();
        library.load_document(source)?;
        Ok(library)
    }

    /// Loads every theme in a multi-theme document.
    ///
    /// The document's top level maps theme names to mappings. The default
    /// theme, from this document or loaded earlier, becomes the parent of
    /// the others.
    ///
    /// # Errors
    ///
    /// Parse errors, or [`LoadError::NotAMapping`] if any theme entry is not
    /// a mapping. Nothing is added to the library on error.
    pub fn load_document(&mut self, source: &ThemeSource) -> Result<(), LoadError> {
        let mut entries = source.parse()?;

        let mut definitions = Vec::with_capacity(entries.len());
        if let Some(values) = entries.remove(DEFAULT_THEME_NAME) {
            let values = theme_values(DEFAULT_THEME_NAME, values)?;
            definitions.push((DEFAULT_THEME_NAME.to_string(), values));
        }
        for (name, values) in entries {
            let values = theme_values(&name, values)?;
            definitions.push((name, values));
        }

        for (name, values) in definitions {
            self.insert(ThemeDefinition::new(name, values));
        }
        debug!(themes = self.themes.len(), "loaded theme document");
        Ok(())
    }

    /// Loads every theme of a registry, one definition per theme name.
    pub fn load_registry(&mut self, registry: &ThemeRegistry) -> Result<(), LoadError> {
        let names = registry.theme_names();
        let ordered = names
            .iter()
            .filter(|name| **name == DEFAULT_THEME_NAME)
            .chain(names.iter().filter(|name| **name != DEFAULT_THEME_NAME));

        let mut loaded = Vec::with_capacity(names.len());
        for name in ordered {
            loaded.push(registry.load(name)?);
        }
        for definition in loaded {
            self.insert(definition);
        }
        Ok(())
    }

    /// Adds a definition, replacing any theme with the same name.
    ///
    /// The library's platform is applied. Every theme other than the default
    /// one that has no parent of its own gets the library's default theme as
    /// its parent, if one has been inserted already. Themes inserted before a
    /// replacement default keep the one they were linked to.
    pub fn insert(&mut self, definition: ThemeDefinition) -> Arc<ThemeDefinition> {
        let mut definition = definition.with_platform(self.platform.clone());
        if definition.name() != DEFAULT_THEME_NAME && definition.parent().is_none() {
            if let Some(default) = self.default_theme() {
                definition = definition.with_parent(default);
            }
        }

        let definition = Arc::new(definition);
        self.themes
            .insert(definition.name().to_string(), definition.clone());
        definition
    }

    pub fn theme_named(&self, name: &str) -> Option<Arc<ThemeDefinition>> {
        self.themes.get(name).cloned()
    }

    /// Like [`theme_named`](Self::theme_named), but falls back to an
    /// ASCII case-insensitive match.
    pub fn find(&self, name: &str) -> Option<Arc<ThemeDefinition>> {
        self.theme_named(name).or_else(|| {
            self.themes
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, theme)| theme.clone())
        })
    }

    pub fn default_theme(&self) -> Option<Arc<ThemeDefinition>> {
        self.theme_named(DEFAULT_THEME_NAME)
    }

    /// Theme names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn platform(&self) -> &Arc<dyn Platform> {
        &self.platform
    }

    /// Clears the derived-value cache of every theme in the library.
    pub fn clear_caches(&self) {
        for theme in self.themes.values() {
            theme.clear_caches();
        }
    }
}

impl Default for ThemeLibrary {
    fn default() -> Self {
        Self::new()
    }
}

fn theme_values(name: &str, value: Value) -> Result<ValueMap, LoadError> {
    match value {
        Value::Map(map) => Ok(map),
        other => Err(LoadError::NotAMapping {
            context: format!("theme \"{}\"", name),
            found: other.kind(),
        }),
    }
}
