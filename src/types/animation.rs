//! Animation timing read from `<key>Duration`, `<key>Delay` and `<key>Curve`.

use std::time::Duration;

/// Timing curve of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationCurve {
    #[default]
    EaseInOut,
    EaseIn,
    EaseOut,
    Linear,
}

impl AnimationCurve {
    /// Parses `easeinout`, `easein`, `easeout` or `linear`, ignoring case.
    /// Anything else is [`AnimationCurve::EaseInOut`].
    pub fn parse(s: &str) -> Self {
        const NAMES: [(&str, AnimationCurve); 4] = [
            ("easeinout", AnimationCurve::EaseInOut),
            ("easein", AnimationCurve::EaseIn),
            ("easeout", AnimationCurve::EaseOut),
            ("linear", AnimationCurve::Linear),
        ];

        NAMES
            .iter()
            .find(|(name, _)| s.eq_ignore_ascii_case(name))
            .map(|(_, curve)| *curve)
            .unwrap_or_default()
    }
}

/// How a themed transition animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationSpecifier {
    pub duration: Duration,
    pub delay: Duration,
    pub curve: AnimationCurve,
}
