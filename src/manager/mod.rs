//! Active theme selection.
//!
//! [`ThemeManager`] owns a [`ThemeLibrary`] and tracks which of its themes
//! is current. The choice is either an explicit theme name or "follow the
//! system", in which case the light or dark theme is picked from the
//! detected [`ColorMode`].
//!
//! ```rust
//! use themestore::{ManagerConfig, ThemeLibrary, ThemeManager, ThemeOption, ThemeSource};
//!
//! let library = ThemeLibrary::from_document(&ThemeSource::yaml(
//!     "Default:\n  isDark: false\ndark:\n  isDark: true\n",
//! ))
//! .unwrap();
//!
//! let manager = ThemeManager::new(library, ManagerConfig::default());
//! manager.select(ThemeOption::Dark);
//! assert!(manager.theme().boolean("isDark"));
//! assert!(manager.is_dark_mode());
//! ```

mod appearance;
mod config;
mod option;

pub use appearance::{
    detect_color_mode, reset_appearance_detector, set_appearance_detector, ColorMode,
};
pub use config::{ConfigError, ManagerConfig};
pub use option::{ThemeOption, UnknownThemeOption};

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::loader::ThemeLibrary;
use crate::theme::ThemeDefinition;
use crate::value::ValueMap;

type Listener = Arc<dyn Fn(&Arc<ThemeDefinition>) + Send + Sync>;

struct State {
    config: ManagerConfig,
    current: Arc<ThemeDefinition>,
}

/// Tracks the current theme of a [`ThemeLibrary`].
pub struct ThemeManager {
    library: ThemeLibrary,
    state: RwLock<State>,
    listeners: Mutex<Vec<Listener>>,
}

static SHARED: OnceCell<ThemeManager> = OnceCell::new();

impl ThemeManager {
    /// Creates a manager and resolves the theme `config` asks for.
    ///
    /// Listeners are not notified of this initial selection.
    pub fn new(library: ThemeLibrary, config: ManagerConfig) -> Self {
        let current = resolve(&library, &config);
        debug!(theme = %current.name(), "initial theme");
        Self {
            library,
            state: RwLock::new(State { config, current }),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Installs the process-wide manager returned by [`shared`](Self::shared).
    ///
    /// Fails, handing the manager back, if one is already installed.
    pub fn init_shared(manager: ThemeManager) -> Result<&'static ThemeManager, ThemeManager> {
        SHARED.try_insert(manager).map_err(|(_, rejected)| rejected)
    }

    /// The process-wide manager, if [`init_shared`](Self::init_shared) was called.
    pub fn shared() -> Option<&'static ThemeManager> {
        SHARED.get()
    }

    pub fn theme(&self) -> Arc<ThemeDefinition> {
        self.read().current.clone()
    }

    pub fn library(&self) -> &ThemeLibrary {
        &self.library
    }

    /// A copy of the current configuration, suitable for persisting.
    pub fn config(&self) -> ManagerConfig {
        self.read().config.clone()
    }

    /// Switches to the theme called `name`, or follows the system
    /// appearance when `name` is `None`.
    ///
    /// The previous theme's caches are cleared and listeners are called with
    /// the new theme. Unknown names fall back to the light theme.
    pub fn swap_theme(&self, name: Option<&str>) -> Arc<ThemeDefinition> {
        let (previous, current) = {
            let mut state = self.write();
            state.config.theme = name.map(str::to_string);
            let current = resolve(&self.library, &state.config);
            let previous = std::mem::replace(&mut state.current, current.clone());
            (previous, current)
        };

        debug!(from = %previous.name(), to = %current.name(), "swapped theme");
        previous.clear_caches();
        self.notify(&current);
        current
    }

    /// Applies a theme menu choice.
    pub fn select(&self, option: ThemeOption) -> Arc<ThemeDefinition> {
        let name = {
            let state = self.read();
            match option {
                ThemeOption::Light => Some(state.config.light_theme.clone()),
                ThemeOption::Dark => Some(state.config.dark_theme.clone()),
                ThemeOption::System => None,
            }
        };
        self.swap_theme(name.as_deref())
    }

    pub fn active_option(&self) -> ThemeOption {
        self.read().config.option()
    }

    /// Whether the dark theme is in effect, either selected explicitly or
    /// through a dark system appearance.
    pub fn is_dark_mode(&self) -> bool {
        match self.active_option() {
            ThemeOption::System => detect_color_mode() == ColorMode::Dark,
            ThemeOption::Dark => true,
            ThemeOption::Light => false,
        }
    }

    /// Reacts to a system appearance change.
    ///
    /// When following the system, the theme is re-resolved and swapped if it
    /// differs. Otherwise only the current theme's caches are cleared.
    /// Returns whether the theme changed.
    pub fn appearance_changed(&self) -> bool {
        let (following_system, current) = {
            let state = self.read();
            (state.config.theme.is_none(), state.current.clone())
        };

        if following_system {
            let resolved = resolve(&self.library, &self.config());
            if resolved.name() != current.name() {
                self.swap_theme(None);
                return true;
            }
        }
        current.clear_caches();
        false
    }

    /// Registers a callback invoked with the new theme after every swap.
    ///
    /// Listeners run on the swapping thread, after the swap is complete. A
    /// listener may swap themes or subscribe again; listeners added during a
    /// notification are first called on the next swap.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&Arc<ThemeDefinition>) + Send + Sync + 'static,
    {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    fn notify(&self, theme: &Arc<ThemeDefinition>) {
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in &listeners {
            listener(theme);
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("ThemeManager")
            .field("theme", &state.current.name())
            .field("config", &state.config)
            .field("library", &self.library.names().collect::<Vec<_>>())
            .finish()
    }
}

fn requested_name(config: &ManagerConfig) -> &str {
    match &config.theme {
        Some(name) => name,
        None => match detect_color_mode() {
            ColorMode::Dark => &config.dark_theme,
            ColorMode::Light => &config.light_theme,
        },
    }
}

fn resolve(library: &ThemeLibrary, config: &ManagerConfig) -> Arc<ThemeDefinition> {
    let name = requested_name(config);
    if let Some(theme) = library.find(name) {
        return theme;
    }

    warn!(theme = %name, fallback = %config.light_theme, "unknown theme; using light theme");
    if let Some(theme) = library.find(&config.light_theme) {
        return theme;
    }

    warn!(theme = %name, "light theme missing; using an empty theme");
    Arc::new(ThemeDefinition::new(name, ValueMap::new()).with_platform(library.platform().clone()))
}
