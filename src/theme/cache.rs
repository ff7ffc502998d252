//! Per-definition cache of derived colors and fonts.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::types::{Color, Font};

/// How a cached font got its point size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum FontSizing {
    /// From the `<key>Size` component.
    Explicit,
    /// The platform's standard size.
    System,
}

#[derive(Debug, Default)]
struct Entries {
    colors: HashMap<String, Color>,
    fonts: HashMap<String, Font>,
    system_sized_fonts: HashMap<String, Font>,
}

impl Entries {
    fn fonts(&self, sizing: FontSizing) -> &HashMap<String, Font> {
        match sizing {
            FontSizing::Explicit => &self.fonts,
            FontSizing::System => &self.system_sized_fonts,
        }
    }

    fn fonts_mut(&mut self, sizing: FontSizing) -> &mut HashMap<String, Font> {
        match sizing {
            FontSizing::Explicit => &mut self.fonts,
            FontSizing::System => &mut self.system_sized_fonts,
        }
    }

    fn len(&self) -> usize {
        self.colors.len() + self.fonts.len() + self.system_sized_fonts.len()
    }
}

/// Cache of derived values keyed by `(key, requested kind)`.
///
/// Entries are only ever added one at a time or dropped all at once. The
/// derive closures run without the lock held.
#[derive(Debug, Default)]
pub(crate) struct DerivedCache {
    entries: RwLock<Entries>,
}

impl DerivedCache {
    pub(crate) fn color(&self, key: &str, derive: impl FnOnce() -> Color) -> Color {
        if let Some(color) = self.read().colors.get(key) {
            return *color;
        }
        let color = derive();
        self.write().colors.insert(key.to_string(), color);
        color
    }

    pub(crate) fn font(
        &self,
        key: &str,
        sizing: FontSizing,
        derive: impl FnOnce() -> Font,
    ) -> Font {
        if let Some(font) = self.read().fonts(sizing).get(key) {
            return font.clone();
        }
        let font = derive();
        self.write()
            .fonts_mut(sizing)
            .insert(key.to_string(), font.clone());
        font
    }

    pub(crate) fn clear(&self) {
        *self.write() = Entries::default();
    }

    pub(crate) fn len(&self) -> usize {
        self.read().len()
    }

    // A panic while holding the lock cannot leave a half-inserted entry, so
    // poisoned guards are safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_color_derived_once() {
        let cache = DerivedCache::default();
        let calls = Cell::new(0);
        let derive = || {
            calls.set(calls.get() + 1);
            Color::rgb(1, 2, 3)
        };

        assert_eq!(cache.color("accent", derive), Color::rgb(1, 2, 3));
        assert_eq!(cache.color("accent", derive), Color::rgb(1, 2, 3));
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_font_sizings_are_separate_entries() {
        let cache = DerivedCache::default();
        cache.font("title", FontSizing::Explicit, || Font::named("Menlo", 20.0));
        let system = cache.font("title", FontSizing::System, || Font::named("Menlo", 13.0));

        assert_eq!(system.size(), 13.0);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_clear_drops_everything() {
        let cache = DerivedCache::default();
        cache.color("a", || Color::BLACK);
        cache.font("b", FontSizing::Explicit, || Font::system(13.0));
        cache.clear();
        assert_eq!(cache.len(), 0);

        let recomputed = cache.color("a", || Color::WHITE);
        assert_eq!(recomputed, Color::WHITE);
    }
}
