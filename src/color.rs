//! Hex colour validation and normalization.

use std::fmt;
use std::str::FromStr;

use crate::error::{ForgeError, Result};

/// A validated hex colour.
///
/// The inner string is guaranteed to be `#` followed by exactly three or six
/// hexadecimal digits, stored lowercase. Because validation happens at
/// construction, a `Color` can be interpolated into markup or compared for
/// equality without re-checking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Validates a candidate colour string.
    ///
    /// Accepts `#RGB` and `#RRGGBB` in any letter case and normalizes to
    /// lowercase. Everything else, including `#RRGGBBAA`, named colours and
    /// strings with surrounding whitespace, is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use favicon_forge::Color;
    ///
    /// let colour = Color::parse("#6366F1").unwrap();
    /// assert_eq!(colour.as_str(), "#6366f1");
    /// assert!(Color::parse("notacolor").is_err());
    /// ```
    pub fn parse(candidate: &str) -> Result<Self> {
        let invalid = || ForgeError::InvalidColor {
            value: candidate.to_string(),
        };
        let digits = candidate.strip_prefix('#').ok_or_else(invalid)?;
        let len_ok = digits.len() == 3 || digits.len() == 6;
        if !len_ok || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        Ok(Self(candidate.to_ascii_lowercase()))
    }

    /// The indigo used for backgrounds when a candidate fails validation.
    pub fn fallback_background() -> Self {
        Self("#6366f1".to_string())
    }

    /// The white used for glyphs when a candidate fails validation.
    pub fn fallback_foreground() -> Self {
        Self("#ffffff".to_string())
    }

    /// The normalized colour string, e.g. `#6366f1`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Expands the colour to opaque RGBA channels.
    ///
    /// Shorthand digits double themselves, so `#abc` expands to the same
    /// channels as `#aabbcc`.
    pub fn to_rgba(&self) -> [u8; 4] {
        let nibbles: Vec<u8> = self.0[1..]
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();
        let [r, g, b] = match nibbles.as_slice() {
            &[r, g, b] => [r << 4 | r, g << 4 | g, b << 4 | b],
            &[r1, r2, g1, g2, b1, b2] => [r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2],
            // The constructor only admits three or six digits.
            _ => [0, 0, 0],
        };
        [r, g, b, 255]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Color {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
