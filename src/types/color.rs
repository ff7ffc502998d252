//! Hex color parsing and terminal conversion.

use std::fmt;

/// An 8-bit-per-channel RGBA color.
///
/// The [`Default`] is [`Color::CLEAR`], the fully transparent black that
/// theme lookups return when a color key is missing or malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Fully transparent black. The fallback for failed color lookups.
    pub const CLEAR: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Creates an opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parses a 6-digit hex color with an optional single leading `#`.
    ///
    /// Returns `None` for any other shape: wrong length, non-hex digits,
    /// surrounding whitespace, or more than one `#`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use themestore::Color;
    ///
    /// assert_eq!(Color::from_hex("#FF0000"), Some(Color::rgb(255, 0, 0)));
    /// assert_eq!(Color::from_hex("abc123"), Color::from_hex("#abc123"));
    /// assert_eq!(Color::from_hex("12345"), None);
    /// assert_eq!(Color::from_hex("zzzzzz"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Formats the color as `#rrggbb`. Alpha is not included.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Channels normalized to `0.0..=1.0`, in RGBA order.
    ///
    /// This is the shape most drawing toolkits accept.
    pub fn to_unit_rgba(&self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha].map(|c| f32::from(c) / 255.0)
    }

    /// Returns the nearest index in the ANSI 256-color palette.
    ///
    /// Grays map onto the 24-step grayscale ramp, everything else onto the
    /// 6x6x6 color cube.
    pub fn to_ansi256(&self) -> u8 {
        let (r, g, b) = (
            u16::from(self.red),
            u16::from(self.green),
            u16::from(self.blue),
        );

        if r == g && g == b {
            return match r {
                0..=7 => 16,
                249..=255 => 231,
                _ => 232 + ((r - 8) * 24 / 247) as u8,
            };
        }

        let cube = |c: u16| (c * 5 / 255) as u8;
        16 + 36 * cube(r) + 6 * cube(g) + cube(b)
    }

    /// Converts to a terminal color for previewing swatches.
    pub fn to_console(&self) -> console::Color {
        console::Color::Color256(self.to_ansi256())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha == 255 {
            f.write_str(&self.to_hex())
        } else {
            write!(f, "{} (alpha {})", self.to_hex(), self.alpha)
        }
    }
}
