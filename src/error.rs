//! Error types for composition and export.

use thiserror::Error;

use crate::export::ExportFormat;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ForgeError>;

/// Errors produced by the composition and export pipeline.
///
/// Every failure is scoped to a single call. Variants carry the offending
/// value or the target size so callers can report the problem without
/// probing any internal state.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// A colour string did not match `#RGB` or `#RRGGBB`.
    #[error("invalid hex colour {value:?}: expected #RGB or #RRGGBB")]
    InvalidColor {
        /// The rejected input, verbatim.
        value: String,
    },

    /// Source image bytes could not be decoded into a usable bitmap.
    #[error("source image is unusable: {reason}")]
    Decode { reason: String },

    /// The requested format cannot represent the composed icon.
    #[error("cannot encode a {size_px}x{size_px} raster icon as {format}")]
    UnsupportedFormat {
        format: ExportFormat,
        size_px: u32,
    },

    /// A vector document could not be rendered into pixels.
    #[error("rasterization failed at {size_px}x{size_px}: {reason}")]
    Rasterize { size_px: u32, reason: String },

    /// A pixel buffer could not be serialized to PNG.
    #[error("PNG encoding failed at {size_px}x{size_px}: {reason}")]
    Encode { size_px: u32, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_message_quotes_input() {
        let err = ForgeError::InvalidColor {
            value: "notacolor".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("\"notacolor\""));
        assert!(message.contains("#RGB"));
    }

    #[test]
    fn unsupported_format_names_format_and_size() {
        let err = ForgeError::UnsupportedFormat {
            format: ExportFormat::Svg,
            size_px: 64,
        };
        let message = err.to_string();
        assert!(message.contains("SVG"));
        assert!(message.contains("64x64"));
    }

    #[test]
    fn rasterize_message_carries_size() {
        let err = ForgeError::Rasterize {
            size_px: 32,
            reason: "no surface".to_string(),
        };
        assert!(err.to_string().contains("32x32"));
    }
}
