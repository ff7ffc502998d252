//! Theme menu options.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The user's theme choice, as offered in the app's theme menu.
///
/// The integer tags (`0`, `1`, `2`) match the menu item tags and can be
/// converted with [`TryFrom<i64>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeOption {
    Light,
    Dark,
    /// Follow the system appearance.
    System,
}

impl ThemeOption {
    /// Theme name selected by this option with the default configuration.
    ///
    /// `None` for [`ThemeOption::System`], which picks a theme from the
    /// current appearance instead.
    pub fn theme_name(&self) -> Option<&'static str> {
        match self {
            ThemeOption::Light => Some("default"),
            ThemeOption::Dark => Some("dark"),
            ThemeOption::System => None,
        }
    }

    pub fn tag(&self) -> i64 {
        match self {
            ThemeOption::Light => 0,
            ThemeOption::Dark => 1,
            ThemeOption::System => 2,
        }
    }
}

impl TryFrom<i64> for ThemeOption {
    type Error = UnknownThemeOption;

    fn try_from(tag: i64) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(ThemeOption::Light),
            1 => Ok(ThemeOption::Dark),
            2 => Ok(ThemeOption::System),
            other => Err(UnknownThemeOption(other)),
        }
    }
}

/// Error for a tag that names no [`ThemeOption`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown theme option tag {0}")]
pub struct UnknownThemeOption(pub i64);
