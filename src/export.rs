//! Export encoding: from a composed icon to a downloadable file.

use std::fmt;
use std::io::Cursor;

use image::ImageFormat;

use crate::compose::{ComposedIcon, RasterIcon, VectorIcon, rasterize};
use crate::error::{ForgeError, Result};

/// Output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Resolution-independent `image/svg+xml` text.
    Svg,
    /// `image/png` bytes at the icon's exact pixel size.
    Png,
}

impl ExportFormat {
    /// The MIME type artifacts of this format carry.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Svg => "image/svg+xml",
            Self::Png => "image/png",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg => write!(f, "SVG"),
            Self::Png => write!(f, "PNG"),
        }
    }
}

/// Artifact payload: UTF-8 markup or binary image data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactPayload {
    /// SVG markup, ready to write as a text file.
    Text(String),
    /// Encoded binary bytes, ready to write as-is.
    Binary(Vec<u8>),
}

impl ArtifactPayload {
    /// The payload bytes regardless of representation.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }
}

/// A downloadable file produced from one composed icon.
///
/// The crate stops at bytes plus naming metadata; persisting or serving the
/// artifact is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// MIME type for download headers or data URLs.
    pub mime_type: &'static str,
    /// Suggested file name, derived from format and size.
    pub filename: String,
    /// The encoded file content.
    pub payload: ArtifactPayload,
}

/// Encodes a composed icon into the requested format.
///
/// Vector icons encode to SVG directly, or are rasterized at their own
/// composed size first when PNG is requested. Raster icons encode to PNG;
/// asking for SVG from a raster icon fails with
/// [`ForgeError::UnsupportedFormat`] since pixels cannot be vectorized.
///
/// Output is stable: the same icon and format always produce the same
/// file name and the same bytes.
pub fn encode(icon: &ComposedIcon, format: ExportFormat) -> Result<ExportArtifact> {
    match (icon, format) {
        (ComposedIcon::Vector(vector), ExportFormat::Svg) => Ok(svg_artifact(vector)),
        (ComposedIcon::Vector(vector), ExportFormat::Png) => png_artifact(&rasterize(vector)?),
        (ComposedIcon::Raster(raster), ExportFormat::Png) => png_artifact(raster),
        (ComposedIcon::Raster(raster), ExportFormat::Svg) => Err(ForgeError::UnsupportedFormat {
            format,
            size_px: raster.size_px(),
        }),
    }
}

fn svg_artifact(icon: &VectorIcon) -> ExportArtifact {
    ExportArtifact {
        mime_type: ExportFormat::Svg.mime_type(),
        filename: "favicon.svg".to_string(),
        payload: ArtifactPayload::Text(icon.source().to_string()),
    }
}

fn png_artifact(icon: &RasterIcon) -> Result<ExportArtifact> {
    let mut bytes = Vec::new();
    icon.pixels()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|err| ForgeError::Encode {
            size_px: icon.size_px(),
            reason: err.to_string(),
        })?;
    Ok(ExportArtifact {
        mime_type: ExportFormat::Png.mime_type(),
        filename: format!("favicon-{0}x{0}.png", icon.size_px()),
        payload: ArtifactPayload::Binary(bytes),
    })
}
