//! Theme definitions and their typed accessors.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};

use super::cache::{DerivedCache, FontSizing};
use super::composite::{
    component_key, compose, ANIMATION_CURVE_SUFFIX, ANIMATION_TIMING_SUFFIXES, FONT_SIZE_SUFFIX,
    INSET_SUFFIXES, POINT_SUFFIXES, SIZE_SUFFIXES,
};
use crate::error::LoadError;
use crate::loader::ThemeSource;
use crate::platform::{DefaultPlatform, Image, Platform};
use crate::types::{
    AnimationCurve, AnimationSpecifier, Color, EdgeInsets, Font, Point, Size, TextCaseTransform,
};
use crate::value::{self, Number, Value, ValueMap};

/// A named, inheritable set of style values.
///
/// Lookups check this definition's own values first and then walk the
/// parent chain outward; the first definition holding the key wins. A child
/// key fully shadows the parent's, including for nested mappings.
///
/// Accessors never fail. A missing key, or a value that cannot be coerced
/// to the requested type, yields that type's default (`false`, `0`, `""`,
/// [`Color::CLEAR`], the platform default font, zero geometry, ...).
///
/// Parent links are shared, immutable [`Arc`]s and a definition can only be
/// given a parent that already exists, so inheritance chains are always
/// finite.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use themestore::{Color, ThemeDefinition, ThemeSource};
///
/// let base = ThemeDefinition::from_source(
///     "base",
///     &ThemeSource::json(r##"{"accentColor": "#FF0000", "titleSize": 14}"##),
/// )
/// .unwrap();
/// let dark = ThemeDefinition::from_source(
///     "dark",
///     &ThemeSource::yaml("backgroundColor: '202020'"),
/// )
/// .unwrap()
/// .with_parent(Arc::new(base));
///
/// assert_eq!(dark.color("accentColor"), Color::rgb(255, 0, 0));
/// assert_eq!(dark.integer("titleSize"), 14);
/// assert_eq!(dark.color("backgroundColor"), Color::rgb(0x20, 0x20, 0x20));
/// assert_eq!(dark.color("missing"), Color::CLEAR);
/// ```
#[derive(Debug)]
pub struct ThemeDefinition {
    name: String,
    values: ValueMap,
    parent: Option<Arc<ThemeDefinition>>,
    platform: Arc<dyn Platform>,
    cache: DerivedCache,
}

impl ThemeDefinition {
    /// Creates a definition without a parent, using [`DefaultPlatform`].
    pub fn new(name: impl Into<String>, values: ValueMap) -> Self {
        Self {
            name: name.into(),
            values,
            parent: None,
            platform: Arc::new(DefaultPlatform::new()),
            cache: DerivedCache::default(),
        }
    }

    /// Parses `source` and creates a definition from its top-level mapping.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the source does not parse or its top level is
    /// not a mapping.
    pub fn from_source(name: impl Into<String>, source: &ThemeSource) -> Result<Self, LoadError> {
        let name = name.into();
        let values = source.parse()?;
        debug!(
            theme = %name,
            keys = values.len(),
            format = %source.format(),
            "loaded theme definition"
        );
        Ok(Self::new(name, values))
    }

    /// Sets the theme unset keys are inherited from.
    pub fn with_parent(mut self, parent: Arc<ThemeDefinition>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Sets the platform used for fonts and images.
    pub fn with_platform(mut self, platform: Arc<dyn Platform>) -> Self {
        self.platform = platform;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&Arc<ThemeDefinition>> {
        self.parent.as_ref()
    }

    /// This definition's own values, without inherited ones.
    pub fn values(&self) -> &ValueMap {
        &self.values
    }

    pub fn platform(&self) -> &Arc<dyn Platform> {
        &self.platform
    }

    /// Iterates over this definition and its ancestors, nearest first.
    pub fn chain(&self) -> impl Iterator<Item = &ThemeDefinition> {
        std::iter::successors(Some(self), |theme| theme.parent.as_deref())
    }

    // ========== Raw lookup ==========

    /// Returns the raw value for `key`, following the parent chain.
    ///
    /// Dotted keys (`sidebar.textColor`) walk nested mappings within each
    /// definition before moving on to the parent.
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.chain().find_map(|theme| value::find(&theme.values, key))
    }

    /// Returns true if `key` resolves anywhere in the chain.
    pub fn contains(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    /// All top-level keys visible from this definition, sorted.
    pub fn keys(&self) -> BTreeSet<&str> {
        self.chain()
            .flat_map(|theme| theme.values.keys().map(String::as_str))
            .collect()
    }

    /// Looks up `key` and applies `coerce`, logging values that exist but
    /// do not coerce.
    fn lookup<T>(
        &self,
        key: &str,
        expected: &str,
        coerce: impl FnOnce(&Value) -> Option<T>,
    ) -> Option<T> {
        let raw = self.raw(key)?;
        let coerced = coerce(raw);
        if coerced.is_none() {
            trace!(
                theme = %self.name,
                key,
                found = raw.kind(),
                expected,
                "theme value does not coerce; using default"
            );
        }
        coerced
    }

    // ========== Scalars ==========

    /// Boolean value of `key`. Defaults to `false`.
    pub fn boolean(&self, key: &str) -> bool {
        self.lookup(key, "boolean", Value::as_bool).unwrap_or_default()
    }

    /// Integer value of `key`. Floats are truncated. Defaults to `0`.
    pub fn integer(&self, key: &str) -> i64 {
        self.lookup(key, "integer", Value::as_i64).unwrap_or_default()
    }

    /// Numeric value of `key`, keeping integers and floats apart.
    /// Defaults to `Number::Integer(0)`.
    pub fn number(&self, key: &str) -> Number {
        self.lookup(key, "number", Value::as_number).unwrap_or_default()
    }

    /// Floating point value of `key`. Defaults to `0.0`.
    pub fn float_value(&self, key: &str) -> f64 {
        self.lookup(key, "float", Value::as_f64).unwrap_or_default()
    }

    /// String value of `key`. Numbers and booleans are rendered as text.
    /// Defaults to the empty string.
    pub fn string(&self, key: &str) -> String {
        self.lookup(key, "string", Value::to_text).unwrap_or_default()
    }

    /// Duration in seconds. Negative, non-finite and out-of-range values
    /// yield [`Duration::ZERO`].
    pub fn time_interval(&self, key: &str) -> Duration {
        let seconds = self.float_value(key);
        Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO)
    }

    /// Case transform named by `key` (`"uppercase"` / `"lowercase"`).
    pub fn text_case_transform(&self, key: &str) -> TextCaseTransform {
        TextCaseTransform::parse(&self.string(key))
    }

    // ========== Derived, cached ==========

    /// Color parsed from `RRGGBB` or `#RRGGBB`.
    ///
    /// Misses and malformed strings yield [`Color::CLEAR`]. Unquoted YAML
    /// colors such as `123e45` load as numbers and lose their digits, so
    /// they fall back too; integers that happen to have six digits still
    /// parse. Results,
    /// including the fallback, are cached until [`clear_caches`](Self::clear_caches).
    pub fn color(&self, key: &str) -> Color {
        self.cache.color(key, || {
            let text = self.string(key);
            Color::from_hex(&text).unwrap_or_else(|| {
                match self.raw(key) {
                    Some(Value::Integer(_) | Value::Float(_)) => trace!(
                        theme = %self.name,
                        key,
                        value = %text,
                        "color was parsed as a number; quote hex colors in YAML"
                    ),
                    Some(_) => trace!(
                        theme = %self.name,
                        key,
                        value = %text,
                        "malformed color; using default"
                    ),
                    None => {}
                }
                Color::CLEAR
            })
        })
    }

    /// Font named by `key` at the size stored in `<key>Size`.
    ///
    /// - No family: the platform's UI font at its standard size, whatever
    ///   `<key>Size` says.
    /// - Family `system` (any case): the platform's UI font.
    /// - Missing or non-positive size: the platform's standard size.
    /// - Family the platform does not know: the UI font at the same size.
    pub fn font(&self, key: &str) -> Font {
        self.cache
            .font(key, FontSizing::Explicit, || self.derive_font(key, FontSizing::Explicit))
    }

    /// Like [`font`](Self::font), but always at the platform's standard size.
    pub fn font_with_system_size(&self, key: &str) -> Font {
        self.cache
            .font(key, FontSizing::System, || self.derive_font(key, FontSizing::System))
    }

    fn derive_font(&self, key: &str, sizing: FontSizing) -> Font {
        let standard = self.platform.system_font_size();
        let size = match sizing {
            FontSizing::Explicit => {
                let explicit = self.float_value(&component_key(key, FONT_SIZE_SUFFIX));
                if explicit > 0.0 {
                    explicit
                } else {
                    standard
                }
            }
            FontSizing::System => standard,
        };

        let family = self.string(key);
        if family.is_empty() {
            return self.platform.system_font(standard);
        }
        if family.eq_ignore_ascii_case("system") {
            return self.platform.system_font(size);
        }
        self.platform.font(&family, size).unwrap_or_else(|| {
            trace!(
                theme = %self.name,
                key,
                family = %family,
                "unknown font family; using system font"
            );
            self.platform.system_font(size)
        })
    }

    // ========== Delegated ==========

    /// Image whose symbolic name is stored under `key`, resolved by the
    /// platform. Not cached.
    pub fn image(&self, key: &str) -> Option<Image> {
        let name = self.string(key);
        if name.is_empty() {
            return None;
        }
        self.platform.image_named(&name)
    }

    // ========== Composites ==========

    /// Insets from `<key>Top`, `<key>Left`, `<key>Bottom` and `<key>Right`.
    pub fn edge_insets(&self, key: &str) -> EdgeInsets {
        let [top, left, bottom, right] = compose(key, INSET_SUFFIXES, |k| self.float_value(k));
        EdgeInsets::new(top, left, bottom, right)
    }

    /// Point from `<key>X` and `<key>Y`.
    pub fn point(&self, key: &str) -> Point {
        let [x, y] = compose(key, POINT_SUFFIXES, |k| self.float_value(k));
        Point::new(x, y)
    }

    /// Size from `<key>Width` and `<key>Height`.
    pub fn size(&self, key: &str) -> Size {
        let [width, height] = compose(key, SIZE_SUFFIXES, |k| self.float_value(k));
        Size::new(width, height)
    }

    /// Animation timing from `<key>Duration`, `<key>Delay` and `<key>Curve`.
    pub fn animation(&self, key: &str) -> AnimationSpecifier {
        let [duration, delay] = compose(key, ANIMATION_TIMING_SUFFIXES, |k| self.time_interval(k));
        let curve_key = component_key(key, ANIMATION_CURVE_SUFFIX);
        let curve = AnimationCurve::parse(&self.string(&curve_key));
        AnimationSpecifier {
            duration,
            delay,
            curve,
        }
    }

    // ========== Cache ==========

    /// Drops every cached color and font of this definition.
    ///
    /// Parents and other definitions keep their caches. Later accessor calls
    /// derive and cache again.
    pub fn clear_caches(&self) {
        debug!(theme = %self.name, entries = self.cache.len(), "clearing theme caches");
        self.cache.clear();
    }

    /// Number of derived values currently cached by this definition.
    pub fn cached_value_count(&self) -> usize {
        self.cache.len()
    }
}
