//! Persisted theme preference.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::option::ThemeOption;
use crate::loader::SourceFormat;

/// Theme selection settings for a [`ThemeManager`](super::ThemeManager).
///
/// Every field has a default, so partial files are fine:
///
/// ```yaml
/// theme: dark          # omit or null to follow the system appearance
/// light_theme: default
/// dark_theme: dark
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Explicitly selected theme, or `None` to follow the system.
    pub theme: Option<String>,
    /// Theme used for the light appearance and as the fallback.
    pub light_theme: String,
    /// Theme used for the dark appearance.
    pub dark_theme: String,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            theme: None,
            light_theme: ThemeOption::Light.theme_name().unwrap_or("default").to_string(),
            dark_theme: ThemeOption::Dark.theme_name().unwrap_or("dark").to_string(),
        }
    }
}

/// Error reading or writing a [`ManagerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file \"{}\": {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ManagerConfig {
    /// Reads a config file. YAML for `.yaml`/`.yml`, JSON otherwise.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no theme config file; using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let parsed = match SourceFormat::from_path(path) {
            Some(SourceFormat::Yaml) => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
            _ => serde_json::from_str(&content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Writes the config as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The option this config corresponds to in the theme menu.
    ///
    /// Theme names compare ASCII-case-insensitively, as library lookups do.
    pub fn option(&self) -> ThemeOption {
        match &self.theme {
            None => ThemeOption::System,
            Some(name) if name.eq_ignore_ascii_case(&self.dark_theme) => ThemeOption::Dark,
            Some(_) => ThemeOption::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ManagerConfig::default();
        assert_eq!(config.theme, None);
        assert_eq!(config.light_theme, "default");
        assert_eq!(config.dark_theme, "dark");
        assert_eq!(config.option(), ThemeOption::System);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ManagerConfig::load(dir.path().join("absent.json")).unwrap();
        assert_eq!(config, ManagerConfig::default());
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        let config = ManagerConfig {
            theme: Some("dark".to_string()),
            ..ManagerConfig::default()
        };

        config.save(&path).unwrap();
        assert_eq!(ManagerConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.yaml");
        std::fs::write(&path, "theme: sepia\n").unwrap();

        let config = ManagerConfig::load(&path).unwrap();
        assert_eq!(config.theme.as_deref(), Some("sepia"));
        assert_eq!(config.dark_theme, "dark");
        assert_eq!(config.option(), ThemeOption::Light);
    }

    #[test]
    fn test_option_ignores_case() {
        let config = ManagerConfig {
            theme: Some("Dark".to_string()),
            ..ManagerConfig::default()
        };
        assert_eq!(config.option(), ThemeOption::Dark);
    }

    #[test]
    fn test_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "{ nope").unwrap();

        assert!(matches!(
            ManagerConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
