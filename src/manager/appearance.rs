//! System appearance detection.

use dark_light::{detect as detect_os_appearance, Mode as OsAppearance};
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

/// The system's light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    Light,
    Dark,
}

type AppearanceDetector = fn() -> ColorMode;

static APPEARANCE_DETECTOR: Lazy<Mutex<AppearanceDetector>> =
    Lazy::new(|| Mutex::new(os_appearance_detector));

/// Overrides how the system appearance is detected.
///
/// Useful in tests, or for hosts that learn the appearance from their own
/// toolkit instead of querying the OS.
pub fn set_appearance_detector(detector: AppearanceDetector) {
    let mut guard = APPEARANCE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores the OS-backed detector.
pub fn reset_appearance_detector() {
    set_appearance_detector(os_appearance_detector);
}

/// Returns the current system appearance using the installed detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = *APPEARANCE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    detector()
}

fn os_appearance_detector() -> ColorMode {
    match detect_os_appearance() {
        OsAppearance::Dark => ColorMode::Dark,
        _ => ColorMode::Light,
    }
}
