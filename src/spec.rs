//! Icon sources: what gets rendered.
//!
//! A source is resolved into an [`IconSpec`] once, up front. Text input is
//! truncated and numeric parameters clamped at construction, and image bytes
//! are decoded at construction, so composition works from a spec that is
//! already known to be renderable.

use image::RgbaImage;

use crate::color::Color;
use crate::error::{ForgeError, Result};

/// Maximum number of glyphs a text icon renders.
pub const MAX_GLYPHS: usize = 2;

/// A text source: up to two glyphs on a rounded square.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    glyphs: String,
    background: Color,
    foreground: Color,
    font_size: f32,
    corner_radius: f32,
}

impl TextSpec {
    /// Creates a text source.
    ///
    /// Glyphs beyond the second character are dropped. Negative font sizes
    /// and corner radii are clamped to zero. An empty glyph string is valid
    /// and renders as a plain rounded square.
    ///
    /// `font_size` and `corner_radius` are authored in reference-canvas
    /// units; [`scale()`](crate::scale()) resolves them per target size.
    pub fn new(
        glyphs: impl Into<String>,
        background: Color,
        foreground: Color,
        font_size: f32,
        corner_radius: f32,
    ) -> Self {
        let mut glyphs: String = glyphs.into();
        if let Some((idx, _)) = glyphs.char_indices().nth(MAX_GLYPHS) {
            glyphs.truncate(idx);
        }
        Self {
            glyphs,
            background,
            foreground,
            font_size: font_size.max(0.0),
            corner_radius: corner_radius.max(0.0),
        }
    }

    /// The glyphs to draw, at most [`MAX_GLYPHS`] characters.
    pub fn glyphs(&self) -> &str {
        &self.glyphs
    }

    /// Fill colour of the rounded square.
    pub fn background(&self) -> &Color {
        &self.background
    }

    /// Fill colour of the glyphs.
    pub fn foreground(&self) -> &Color {
        &self.foreground
    }

    /// Font size in reference units.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Corner radius in reference units.
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }
}

/// An image source: a decoded bitmap stretched to fill the square.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSpec {
    bitmap: RgbaImage,
}

impl ImageSpec {
    /// Wraps an already-decoded bitmap.
    ///
    /// Fails with [`ForgeError::Decode`] when either dimension is zero,
    /// which keeps every constructed spec renderable.
    pub fn new(bitmap: RgbaImage) -> Result<Self> {
        if bitmap.width() == 0 || bitmap.height() == 0 {
            return Err(ForgeError::Decode {
                reason: format!(
                    "bitmap has no pixels ({}x{})",
                    bitmap.width(),
                    bitmap.height()
                ),
            });
        }
        Ok(Self { bitmap })
    }

    /// Decodes encoded image bytes (PNG, JPEG, GIF, ...) into a source.
    ///
    /// This is the upload boundary: decoding either completes or fails here,
    /// before a spec exists, so composition never sees partial pixel data.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes).map_err(|err| ForgeError::Decode {
            reason: err.to_string(),
        })?;
        Self::new(decoded.to_rgba8())
    }

    /// The decoded pixels at their natural size.
    pub fn bitmap(&self) -> &RgbaImage {
        &self.bitmap
    }

    /// Natural dimensions of the source, before any stretching.
    pub fn natural_size(&self) -> (u32, u32) {
        (self.bitmap.width(), self.bitmap.height())
    }
}

/// The single source of truth for a render.
///
/// Whether an icon comes from typed glyphs or an uploaded bitmap is decided
/// here, once; composition, export and previews all branch on this enum
/// rather than re-inspecting raw input.
#[derive(Debug, Clone, PartialEq)]
pub enum IconSpec {
    /// Glyphs on a rounded square, rendered as vector shapes.
    Text(TextSpec),
    /// A bitmap stretched to fill the square.
    Image(ImageSpec),
}

impl From<TextSpec> for IconSpec {
    fn from(spec: TextSpec) -> Self {
        Self::Text(spec)
    }
}

impl From<ImageSpec> for IconSpec {
    fn from(spec: ImageSpec) -> Self {
        Self::Image(spec)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::ImageFormat;

    use super::*;

    fn colours() -> (Color, Color) {
        (
            Color::parse("#6366f1").unwrap(),
            Color::parse("#ffffff").unwrap(),
        )
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let bitmap = RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        bitmap
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn text_truncates_to_two_characters() {
        let (bg, fg) = colours();
        let spec = TextSpec::new("ABC", bg, fg, 80.0, 24.0);
        assert_eq!(spec.glyphs(), "AB");
    }

    #[test]
    fn text_truncates_on_character_boundaries() {
        let (bg, fg) = colours();
        let spec = TextSpec::new("héllo", bg.clone(), fg.clone(), 80.0, 24.0);
        assert_eq!(spec.glyphs(), "hé");

        let emoji = TextSpec::new("🎨🎯🎪", bg, fg, 80.0, 24.0);
        assert_eq!(emoji.glyphs(), "🎨🎯");
    }

    #[test]
    fn text_allows_empty_glyphs() {
        let (bg, fg) = colours();
        let spec = TextSpec::new("", bg, fg, 80.0, 24.0);
        assert_eq!(spec.glyphs(), "");
    }

    #[test]
    fn text_clamps_negative_parameters() {
        let (bg, fg) = colours();
        let spec = TextSpec::new("A", bg, fg, -5.0, -1.0);
        assert_eq!(spec.font_size(), 0.0);
        assert_eq!(spec.corner_radius(), 0.0);
    }

    #[test]
    fn image_from_valid_png() {
        let spec = ImageSpec::from_bytes(&png_bytes(20, 10)).unwrap();
        assert_eq!(spec.natural_size(), (20, 10));
    }

    #[test]
    fn image_from_garbage_bytes_fails() {
        let err = ImageSpec::from_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ForgeError::Decode { .. }));
    }

    #[test]
    fn image_from_truncated_png_fails() {
        let bytes = png_bytes(20, 10);
        let err = ImageSpec::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, ForgeError::Decode { .. }));
    }

    #[test]
    fn image_rejects_empty_bitmap() {
        let err = ImageSpec::new(RgbaImage::new(0, 16)).unwrap_err();
        assert!(matches!(err, ForgeError::Decode { .. }));
    }

    #[test]
    fn spec_from_conversions() {
        let (bg, fg) = colours();
        let text: IconSpec = TextSpec::new("A", bg, fg, 80.0, 24.0).into();
        assert!(matches!(text, IconSpec::Text(_)));

        let image: IconSpec = ImageSpec::from_bytes(&png_bytes(4, 4)).unwrap().into();
        assert!(matches!(image, IconSpec::Image(_)));
    }
}
