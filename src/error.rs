//! Theme loading errors.
//!
//! Only construction can fail. Once a [`ThemeDefinition`](crate::ThemeDefinition)
//! exists, every accessor resolves misses and malformed values to a default
//! instead of returning an error.

use std::path::PathBuf;

use thiserror::Error;

use crate::loader::{RegistryError, SourceFormat};

/// Error returned when a theme source cannot be turned into definitions.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source text is not valid JSON/YAML.
    #[error("failed to parse {format} theme source: {message}")]
    Parse {
        format: SourceFormat,
        message: String,
    },

    /// A document, or a theme entry inside one, is not a key/value mapping.
    #[error("{context} must be a mapping, found {found}")]
    NotAMapping {
        context: String,
        found: &'static str,
    },

    #[error("failed to read theme file \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A registry lookup failed or theme directories collide.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The file extension does not name a known source format.
    #[error("unsupported theme file: \"{}\"", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_mapping_display() {
        let err = LoadError::NotAMapping {
            context: "theme \"dark\"".to_string(),
            found: "string",
        };
        assert_eq!(err.to_string(), "theme \"dark\" must be a mapping, found string");
    }

    #[test]
    fn test_io_error_display_and_source() {
        let err = LoadError::Io {
            path: PathBuf::from("/themes/dark.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/themes/dark.json"));
        assert!(msg.contains("missing"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_parse_error_display() {
        let err = LoadError::Parse {
            format: SourceFormat::Yaml,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse YAML theme source: bad indent");
    }

    #[test]
    fn test_registry_error_is_transparent() {
        let err = LoadError::from(RegistryError::NotFound {
            name: "solarized".to_string(),
        });
        assert_eq!(err.to_string(), "theme not found: \"solarized\"");
    }
}
