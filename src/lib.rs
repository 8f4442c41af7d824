//! favicon-forge: favicon composition and multi-resolution export
//!
//! This crate renders small square icons from either typed glyphs or an
//! uploaded bitmap, previews them across the standard favicon sizes, and
//! encodes the result as a downloadable SVG or PNG file.
//!
//! # Example
//!
//! ```
//! use favicon_forge::{
//!     Color, ExportFormat, IconSpec, RenderTarget, TextSpec, compose, encode,
//! };
//!
//! // Describe the icon once
//! let spec = IconSpec::Text(TextSpec::new(
//!     "A",
//!     Color::parse("#6366f1").unwrap(),
//!     Color::parse("#ffffff").unwrap(),
//!     80.0,
//!     24.0,
//! ));
//!
//! // Compose at the reference size and export
//! let icon = compose(&spec, RenderTarget::new(256));
//! let artifact = encode(&icon, ExportFormat::Svg).unwrap();
//! assert_eq!(artifact.filename, "favicon.svg");
//! assert_eq!(artifact.mime_type, "image/svg+xml");
//! ```
//!
//! # Previews
//!
//! [`preview_all`] fans a spec out over a size ladder; every entry is the
//! same render the exports use, just at a different size:
//!
//! ```
//! use favicon_forge::{PREVIEW_SIZES, TextIconSettings, preview_all};
//!
//! let spec = TextIconSettings::new().to_spec();
//! let icons = preview_all(&spec, &PREVIEW_SIZES);
//! assert_eq!(icons.len(), PREVIEW_SIZES.len());
//! ```
//!
//! # Settings Boundary
//!
//! For frontend-backend communication, [`TextIconSettings`] carries raw UI
//! state as camelCase JSON and resolves it into a validated [`IconSpec`]
//! with [`TextIconSettings::to_spec`].

mod color;
mod compose;
mod error;
mod export;
mod preview;
mod scale;
mod settings;
mod spec;

pub use color::Color;
pub use compose::{ComposedIcon, RasterIcon, VectorIcon, compose, fonts_available, rasterize};
pub use error::{ForgeError, Result};
pub use export::{ArtifactPayload, ExportArtifact, ExportFormat, encode};
pub use preview::{COMPACT_PREVIEW_SIZES, PREVIEW_SIZES, preview_all};
pub use scale::{
    REFERENCE_BASELINE, REFERENCE_SIZE, ReferenceParams, RenderTarget, ScaledParams, scale,
};
pub use settings::{
    BACKGROUND_PRESETS, CORNER_RADIUS_RANGE, FONT_SIZE_RANGE, TEXT_PRESETS, TextIconSettings,
};
pub use spec::{IconSpec, ImageSpec, MAX_GLYPHS, TextSpec};
