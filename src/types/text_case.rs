/// Case transformation applied to UI labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextCaseTransform {
    #[default]
    None,
    Upper,
    Lower,
}

impl TextCaseTransform {
    /// Maps `"uppercase"` and `"lowercase"` (any letter case) to their
    /// transforms. Everything else is [`TextCaseTransform::None`].
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("uppercase") {
            TextCaseTransform::Upper
        } else if s.eq_ignore_ascii_case("lowercase") {
            TextCaseTransform::Lower
        } else {
            TextCaseTransform::None
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            TextCaseTransform::None => text.to_string(),
            TextCaseTransform::Upper => text.to_uppercase(),
            TextCaseTransform::Lower => text.to_lowercase(),
        }
    }
}
