//! Serializable icon settings for cross-process communication.
//!
//! [`TextIconSettings`] mirrors the control state a frontend keeps while the
//! user edits a text icon. It serializes to the camelCase JSON that state is
//! stored in, and resolves into a validated [`IconSpec`](crate::IconSpec)
//! when it is time to render.
//!
//! # Example
//!
//! ```
//! use favicon_forge::TextIconSettings;
//!
//! // Build settings as a frontend form would
//! let mut settings = TextIconSettings::new()
//!     .with_background_color("#0ea5e9")
//!     .with_corner_radius(32.0);
//! settings.set_text("rs");
//! assert_eq!(settings.text, "RS");
//!
//! // Serialize for sending across the process boundary
//! let json = settings.to_json().unwrap();
//!
//! // Deserialize on the rendering side and resolve to a spec
//! let restored = TextIconSettings::from_json(&json).unwrap();
//! let spec = restored.to_spec();
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::spec::{IconSpec, MAX_GLYPHS, TextSpec};

// ============================================================================
// UI constants
// ============================================================================

/// Slider range a settings UI offers for the reference font size.
///
/// Values outside the range still compose; this is advisory for controls.
pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<f32> = 40.0..=120.0;

/// Slider range a settings UI offers for the reference corner radius.
pub const CORNER_RADIUS_RANGE: std::ops::RangeInclusive<f32> = 0.0..=60.0;

/// Preset background swatches, in display order.
pub const BACKGROUND_PRESETS: [&str; 8] = [
    "#6366f1", "#8b5cf6", "#ec4899", "#f59e0b", "#10b981", "#0ea5e9", "#1e293b", "#ef4444",
];

/// Preset glyph-colour swatches, in display order.
pub const TEXT_PRESETS: [&str; 6] = [
    "#ffffff", "#f1f5f9", "#1e293b", "#6366f1", "#8b5cf6", "#ec4899",
];

// ============================================================================
// TextIconSettings
// ============================================================================

/// The editable state of a text icon, in a JSON-friendly shape.
///
/// Fields are raw user input: colours are plain strings that may be invalid
/// mid-edit, and `text` may hold anything the input widget let through.
/// Validation happens in [`to_spec`](Self::to_spec), not here, so a settings
/// value can always round-trip through storage unchanged.
///
/// # JSON Format
///
/// ```json
/// {
///   "text": "A",
///   "backgroundColor": "#6366f1",
///   "textColor": "#ffffff",
///   "fontSize": 80.0,
///   "cornerRadius": 24.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextIconSettings {
    /// Glyphs to draw.
    pub text: String,

    /// Background colour candidate, e.g. `#6366f1`.
    pub background_color: String,

    /// Glyph colour candidate, e.g. `#ffffff`.
    pub text_color: String,

    /// Font size in reference-canvas units.
    pub font_size: f32,

    /// Corner radius in reference-canvas units.
    pub corner_radius: f32,
}

impl Default for TextIconSettings {
    fn default() -> Self {
        Self {
            text: "A".to_string(),
            background_color: "#6366f1".to_string(),
            text_color: "#ffffff".to_string(),
            font_size: 80.0,
            corner_radius: 24.0,
        }
    }
}

impl TextIconSettings {
    /// Creates settings with the default letter icon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the glyph text the way the input widget does: everything
    /// past the second character is dropped and the rest is uppercased.
    pub fn set_text(&mut self, raw: &str) {
        let kept: String = raw.chars().take(MAX_GLYPHS).collect();
        self.text = kept.to_uppercase();
    }

    /// Sets the glyph text verbatim.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the background colour candidate.
    pub fn with_background_color(mut self, colour: impl Into<String>) -> Self {
        self.background_color = colour.into();
        self
    }

    /// Sets the glyph colour candidate.
    pub fn with_text_color(mut self, colour: impl Into<String>) -> Self {
        self.text_color = colour.into();
        self
    }

    /// Sets the reference font size.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the reference corner radius.
    pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Resolves the settings into a validated spec.
    ///
    /// Colour candidates go through [`Color::parse`]; an invalid candidate
    /// is replaced by the matching fallback instead of failing, so a live
    /// preview keeps rendering while the user is mid-edit.
    pub fn to_spec(&self) -> IconSpec {
        let background = Color::parse(&self.background_color)
            .unwrap_or_else(|_| Color::fallback_background());
        let foreground =
            Color::parse(&self.text_color).unwrap_or_else(|_| Color::fallback_foreground());
        IconSpec::Text(TextSpec::new(
            self.text.clone(),
            background,
            foreground,
            self.font_size,
            self.corner_radius,
        ))
    }

    /// Serializes the settings to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the settings to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================
