//! Name resolution for theme files and inline theme sources.
//!
//! Inline sources registered with [`ThemeRegistry::add_inline`] always win.
//! Files come from directories scanned by [`walk_theme_dir`] and resolve
//! both by their relative path without extension (`"custom/sepia"`) and
//! with it (`"custom/sepia.yaml"`).
//!
//! | Priority | Extension | Format |
//! |----------|-----------|--------|
//! | 1 (highest) | `.json` | JSON |
//! | 2 | `.yaml` | YAML |
//! | 3 (lowest) | `.yml` | YAML |
//!
//! Extensions match regardless of case. Within one directory, `dark.json`
//! hides `dark.yaml`. The same name from two directories is a
//! [`RegistryError::Collision`].
//!
//! Files are read again on every [`ThemeRegistry::load`], so edits show up
//! on the next theme swap.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, trace};

use super::source::{SourceFormat, ThemeSource};
use crate::error::LoadError;
use crate::theme::ThemeDefinition;

/// Recognized theme file extensions in priority order.
pub const THEME_EXTENSIONS: &[&str] = &[".json", ".yaml", ".yml"];

/// Splits a recognized extension off `file_name`, ignoring case.
///
/// Returns the stem and the extension's index in [`THEME_EXTENSIONS`].
fn split_extension(file_name: &str) -> Option<(&str, usize)> {
    THEME_EXTENSIONS
        .iter()
        .enumerate()
        .find_map(|(priority, ext)| {
            let cut = file_name.len().checked_sub(ext.len())?;
            let tail = file_name.get(cut..)?;
            if tail.eq_ignore_ascii_case(ext) {
                Some((&file_name[..cut], priority))
            } else {
                None
            }
        })
}

fn canonical_name(name: &str) -> &str {
    split_extension(name).map_or(name, |(stem, _)| stem)
}

/// A theme file found under a theme directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeFile {
    /// Relative path without extension, `/`-separated.
    pub name: String,
    /// Relative path including the extension as written on disk.
    pub file_name: String,
    pub path: PathBuf,
    /// The scanned directory the file was found under.
    pub root: PathBuf,
}

impl ThemeFile {
    /// Describes the file at `path` below `root`.
    ///
    /// `None` if `path` is not under `root` or has no theme extension.
    pub fn from_path(path: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Option<Self> {
        let (path, root) = (path.into(), root.into());
        let file_name = path
            .strip_prefix(&root)
            .ok()?
            .to_string_lossy()
            .replace(std::path::MAIN_SEPARATOR, "/");
        let (stem, _) = split_extension(&file_name)?;

        Some(Self {
            name: stem.to_string(),
            file_name,
            path,
            root,
        })
    }

    /// Index of the extension in [`THEME_EXTENSIONS`]; lower wins.
    pub fn priority(&self) -> usize {
        split_extension(&self.file_name).map_or(usize::MAX, |(_, priority)| priority)
    }
}

/// Where a registered theme's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTheme {
    /// Source text held in memory.
    Inline(ThemeSource),
    /// Source read from this file on every load.
    File(PathBuf),
}

/// Error resolving a theme name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two theme directories provide the same theme name.
    #[error(
        "theme \"{name}\" is defined twice: {} and {}",
        .first.display(),
        .second.display()
    )]
    Collision {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("theme not found: \"{name}\"")]
    NotFound { name: String },
}

/// Registry resolving theme names to inline or file-based sources.
///
/// ```rust
/// use themestore::{ThemeRegistry, ThemeSource, Color};
///
/// let mut registry = ThemeRegistry::new();
/// registry.add_inline("dark", ThemeSource::yaml("backgroundColor: '101010'"));
///
/// let dark = registry.load("dark").unwrap();
/// assert_eq!(dark.color("backgroundColor"), Color::rgb(16, 16, 16));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    inline: HashMap<String, ThemeSource>,
    /// Canonical name -> winning file.
    files: BTreeMap<String, ThemeFile>,
    /// Name with extension -> file, for every registered file.
    by_file_name: HashMap<String, PathBuf>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an in-memory theme source, shadowing any file of that name.
    pub fn add_inline(&mut self, name: impl Into<String>, source: ThemeSource) {
        self.inline.insert(name.into(), source);
    }

    /// Registers theme files, usually the output of [`walk_theme_dir`].
    ///
    /// # Errors
    ///
    /// [`RegistryError::Collision`] if a name is already provided by a file
    /// from a different root. Files registered before the collision stay.
    pub fn add_from_files(&mut self, mut files: Vec<ThemeFile>) -> Result<(), RegistryError> {
        files.sort_by_key(ThemeFile::priority);

        for file in files {
            match self.files.entry(file.name.clone()) {
                Entry::Occupied(winner) if winner.get().root != file.root => {
                    return Err(RegistryError::Collision {
                        name: file.name,
                        first: winner.get().path.clone(),
                        second: file.path,
                    });
                }
                Entry::Occupied(winner) => {
                    trace!(
                        hidden = %file.file_name,
                        by = %winner.get().file_name,
                        "theme file hidden by higher-priority extension"
                    );
                }
                Entry::Vacant(slot) => {
                    self.by_file_name
                        .insert(file.file_name.clone(), file.path.clone());
                    slot.insert(file);
                }
            }
        }
        Ok(())
    }

    /// Walks `root` and registers every theme file found.
    ///
    /// # Errors
    ///
    /// [`LoadError::Io`] if the directory cannot be read, or
    /// [`LoadError::Registry`] wrapping a collision.
    pub fn add_dir(&mut self, root: impl AsRef<Path>) -> Result<(), LoadError> {
        let root = root.as_ref();
        let files = walk_theme_dir(root).map_err(|source| LoadError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        debug!(dir = %root.display(), files = files.len(), "registering theme directory");
        self.add_from_files(files)?;
        Ok(())
    }

    /// Looks up a theme by name, with or without extension.
    pub fn get(&self, name: &str) -> Result<ResolvedTheme, RegistryError> {
        if let Some(source) = self.inline.get(name) {
            return Ok(ResolvedTheme::Inline(source.clone()));
        }
        self.files
            .get(name)
            .map(|file| &file.path)
            .or_else(|| self.by_file_name.get(name))
            .map(|path| ResolvedTheme::File(path.clone()))
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }

    /// Returns the source of a theme, reading it from disk if necessary.
    pub fn source(&self, name: &str) -> Result<ThemeSource, LoadError> {
        match self.get(name)? {
            ResolvedTheme::Inline(source) => Ok(source),
            ResolvedTheme::File(path) => ThemeSource::from_path(path),
        }
    }

    /// Loads a theme definition named after the extensionless name. The
    /// definition has no parent.
    pub fn load(&self, name: &str) -> Result<ThemeDefinition, LoadError> {
        let source = self.source(name)?;
        ThemeDefinition::from_source(canonical_name(name), &source)
    }

    /// Extensionless theme names, sorted.
    pub fn theme_names(&self) -> BTreeSet<&str> {
        self.files
            .keys()
            .chain(self.inline.keys())
            .map(String::as_str)
            .collect()
    }

    /// Number of distinct themes.
    pub fn len(&self) -> usize {
        self.theme_names().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inline.is_empty() && self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.inline.clear();
        self.files.clear();
        self.by_file_name.clear();
    }
}

/// Collects theme files below `root`, including subdirectories.
///
/// Order is unspecified; [`ThemeRegistry::add_from_files`] sorts by
/// [`ThemeFile::priority`].
pub fn walk_theme_dir(root: impl AsRef<Path>) -> Result<Vec<ThemeFile>, std::io::Error> {
    let root = root.as_ref().canonicalize()?;
    let mut pending = vec![root.clone()];
    let mut files = Vec::new();

    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.is_file() && SourceFormat::from_path(&path).is_some() {
                files.extend(ThemeFile::from_path(path, &root));
            }
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(file_name: &str) -> ThemeFile {
        ThemeFile::from_path(format!("/themes/{}", file_name), "/themes").unwrap()
    }

    #[test]
    fn test_split_extension_ignores_case() {
        assert_eq!(split_extension("dark.json"), Some(("dark", 0)));
        assert_eq!(split_extension("Dark.JSON"), Some(("Dark", 0)));
        assert_eq!(split_extension("a/sepia.Yaml"), Some(("a/sepia", 1)));
        assert_eq!(split_extension("sepia.YML"), Some(("sepia", 2)));
        assert_eq!(split_extension("dark.plist"), None);
        assert_eq!(split_extension("json"), None);
    }

    #[test]
    fn test_theme_file_from_path() {
        let sepia = file("custom/Sepia.YML");
        assert_eq!(sepia.name, "custom/Sepia");
        assert_eq!(sepia.file_name, "custom/Sepia.YML");
        assert_eq!(sepia.priority(), 2);

        assert!(ThemeFile::from_path("/themes/notes.txt", "/themes").is_none());
        assert!(ThemeFile::from_path("/elsewhere/dark.json", "/themes").is_none());
    }

    #[test]
    fn test_highest_priority_file_wins() {
        let mut registry = ThemeRegistry::new();
        registry
            .add_from_files(vec![file("dark.yml"), file("dark.JSON"), file("dark.yaml")])
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("dark"),
            Ok(ResolvedTheme::File(PathBuf::from("/themes/dark.JSON")))
        );
        assert!(registry.get("dark.JSON").is_ok());
        assert!(registry.get("dark.yml").is_err());
    }

    #[test]
    fn test_inline_wins_over_file() {
        let mut registry = ThemeRegistry::new();
        registry.add_from_files(vec![file("dark.json")]).unwrap();
        registry.add_inline("dark", ThemeSource::json(r#"{"isDark": true}"#));

        assert!(matches!(registry.get("dark"), Ok(ResolvedTheme::Inline(_))));
        assert!(matches!(registry.get("dark.json"), Ok(ResolvedTheme::File(_))));
        assert!(registry.load("dark").unwrap().boolean("isDark"));
    }

    #[test]
    fn test_unknown_name() {
        let registry = ThemeRegistry::new();
        assert!(matches!(
            registry.load("sepia"),
            Err(LoadError::Registry(RegistryError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_load_uses_extensionless_name() {
        let mut registry = ThemeRegistry::new();
        registry.add_inline("sepia.yaml", ThemeSource::yaml("a: 1"));
        assert_eq!(registry.load("sepia.yaml").unwrap().name(), "sepia");
    }

    #[test]
    fn test_clear() {
        let mut registry = ThemeRegistry::new();
        registry.add_inline("a", ThemeSource::yaml("x: 1"));
        registry.add_from_files(vec![file("b.json")]).unwrap();
        assert_eq!(registry.len(), 2);

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.theme_names().is_empty());
    }
}
