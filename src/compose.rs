//! Icon composition: from source spec to a rendered icon at one size.
//!
//! Text sources become a small SVG document whose geometry is computed by
//! the proportional scaler ([`scale()`]) for the requested size; image
//! sources become a pixel buffer resampled to the requested size. Both paths
//! are pure functions of their inputs, so repeated composition of the same
//! spec yields identical output.

use std::sync::{Arc, OnceLock};

use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{self, fontdb};

use crate::error::{ForgeError, Result};
use crate::scale::{ReferenceParams, RenderTarget, scale};
use crate::spec::{IconSpec, ImageSpec, TextSpec};

// ============================================================================
// ComposedIcon
// ============================================================================

/// A rendered icon at one target size, before file encoding.
///
/// Text sources compose to [`ComposedIcon::Vector`] and stay resolution
/// independent until an export actually needs pixels; image sources compose
/// straight to [`ComposedIcon::Raster`].
#[derive(Debug, Clone, PartialEq)]
pub enum ComposedIcon {
    /// A resolution-independent SVG document.
    Vector(VectorIcon),
    /// A pixel buffer.
    Raster(RasterIcon),
}

impl ComposedIcon {
    /// Side length this icon was composed for.
    pub fn size_px(&self) -> u32 {
        match self {
            Self::Vector(icon) => icon.size_px,
            Self::Raster(icon) => icon.size_px,
        }
    }
}

/// An SVG document composed for one target size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorIcon {
    source: String,
    size_px: u32,
}

impl VectorIcon {
    /// The SVG markup.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Side length the document was composed for.
    pub fn size_px(&self) -> u32 {
        self.size_px
    }
}

/// A pixel buffer composed for one target size.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterIcon {
    pixels: RgbaImage,
    size_px: u32,
}

impl RasterIcon {
    /// The straight-alpha RGBA pixels, `size_px` on each side.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Side length of the buffer.
    pub fn size_px(&self) -> u32 {
        self.size_px
    }
}

// ============================================================================
// Composition
// ============================================================================

/// Composes `spec` at the target size.
///
/// Text specs produce a vector icon, image specs a raster icon. The call is
/// deterministic: no randomness, no timestamps, no shared mutable state.
///
/// # Example
///
/// ```
/// use favicon_forge::{Color, ComposedIcon, IconSpec, RenderTarget, TextSpec, compose};
///
/// let spec = IconSpec::Text(TextSpec::new(
///     "A",
///     Color::parse("#6366f1").unwrap(),
///     Color::parse("#ffffff").unwrap(),
///     80.0,
///     24.0,
/// ));
/// let icon = compose(&spec, RenderTarget::new(256));
/// assert!(matches!(icon, ComposedIcon::Vector(_)));
/// assert_eq!(icon.size_px(), 256);
/// ```
pub fn compose(spec: &IconSpec, target: RenderTarget) -> ComposedIcon {
    match spec {
        IconSpec::Text(text) => ComposedIcon::Vector(compose_text(text, target)),
        IconSpec::Image(image) => ComposedIcon::Raster(compose_image(image, target)),
    }
}

/// Builds the SVG document for a text spec at the target size.
fn compose_text(spec: &TextSpec, target: RenderTarget) -> VectorIcon {
    let params = scale(
        ReferenceParams::new(spec.font_size(), spec.corner_radius()),
        target,
    );
    let size = target.size_px();
    let source = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">
  <rect width="{size}" height="{size}" fill="{bg}" rx="{radius}"/>
  <text x="{x}" y="{y}" font-family="system-ui, sans-serif" font-size="{font_size}" font-weight="700" fill="{fg}" text-anchor="middle" dominant-baseline="middle">{glyphs}</text>
</svg>
"#,
        bg = spec.background(),
        radius = fmt_num(params.corner_radius),
        x = fmt_num(params.center),
        y = fmt_num(params.baseline),
        font_size = fmt_num(params.font_size),
        fg = spec.foreground(),
        glyphs = escape_xml(spec.glyphs()),
    );
    VectorIcon { source, size_px: size }
}

/// Resamples an image spec to fill the target square.
fn compose_image(spec: &ImageSpec, target: RenderTarget) -> RasterIcon {
    let size = target.size_px();
    // Stretch to fill: aspect ratio is intentionally not preserved.
    let pixels = image::imageops::resize(spec.bitmap(), size, size, FilterType::Lanczos3);
    RasterIcon {
        pixels,
        size_px: size,
    }
}

/// Formats a scaled coordinate, dropping the fraction when it is whole.
fn fmt_num(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Escapes the five XML-special characters in glyph content.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ============================================================================
// Rasterization
// ============================================================================

/// Renders a composed vector document into pixels at its own size.
///
/// This is the one place vector output meets pixels; the PNG export path
/// goes through here rather than resampling some other raster. The document
/// is always rendered at the size it was composed for. Glyphs resolve
/// against the system font database; in an environment with no usable fonts
/// the background shapes still render and glyphs are simply absent.
pub fn rasterize(icon: &VectorIcon) -> Result<RasterIcon> {
    let size = icon.size_px;
    let failed = |reason: String| ForgeError::Rasterize {
        size_px: size,
        reason,
    };

    let mut options = usvg::Options::default();
    options.fontdb = system_fonts();
    let tree =
        usvg::Tree::from_str(&icon.source, &options).map_err(|err| failed(err.to_string()))?;

    let mut pixmap =
        Pixmap::new(size, size).ok_or_else(|| failed("pixmap allocation failed".to_string()))?;
    let scale_x = size as f32 / tree.size().width();
    let scale_y = size as f32 / tree.size().height();
    resvg::render(
        &tree,
        Transform::from_scale(scale_x, scale_y),
        &mut pixmap.as_mut(),
    );

    Ok(RasterIcon {
        pixels: pixmap_to_rgba(&pixmap),
        size_px: size,
    })
}

/// Reports whether glyph rasterization can resolve a font.
///
/// The check runs the same family query the text template triggers, so a
/// `true` here means rasterized glyphs actually appear. Vector output never
/// needs fonts; where this is false, rasterized text renders backgrounds
/// only.
pub fn fonts_available() -> bool {
    let families = [fontdb::Family::Name("system-ui"), fontdb::Family::SansSerif];
    let query = fontdb::Query {
        families: &families,
        weight: fontdb::Weight::BOLD,
        ..fontdb::Query::default()
    };
    system_fonts().query(&query).is_some()
}

/// Process-wide font database, loaded from system fonts exactly once.
///
/// fontdb maps the generic `sans-serif` family to "Arial" out of the box, a
/// name most Linux hosts do not ship, and an unresolved family makes usvg
/// drop the whole text span. The generic is repointed at a family that
/// actually loaded so the template's `sans-serif` fallback resolves wherever
/// any font exists.
fn system_fonts() -> Arc<fontdb::Database> {
    static FONTS: OnceLock<Arc<fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            if let Some(family) = installed_sans_family(&db) {
                db.set_sans_serif_family(family);
            }
            Arc::new(db)
        })
        .clone()
}

/// Picks a loaded family name for the generic sans-serif slot.
///
/// Well-known sans faces win; otherwise any non-monospaced face, then any
/// face at all.
fn installed_sans_family(db: &fontdb::Database) -> Option<String> {
    const KNOWN_SANS: [&str; 6] = [
        "Arial",
        "Helvetica",
        "Liberation Sans",
        "DejaVu Sans",
        "Noto Sans",
        "FreeSans",
    ];
    for wanted in KNOWN_SANS {
        let found = db
            .faces()
            .flat_map(|face| face.families.iter())
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted));
        if let Some((name, _)) = found {
            return Some(name.clone());
        }
    }
    db.faces()
        .find(|face| !face.monospaced)
        .or_else(|| db.faces().next())
        .and_then(|face| face.families.first())
        .map(|(name, _)| name.clone())
}

/// Converts a rendered pixmap into a straight-alpha RGBA image.
fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
    RgbaImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        match pixmap.pixel(x, y) {
            Some(px) => Rgba(unpremultiply(px.red(), px.green(), px.blue(), px.alpha())),
            None => Rgba([0, 0, 0, 0]),
        }
    })
}

/// Recovers straight-alpha channels from a premultiplied pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let alpha = a as f32 / 255.0;
    let restore = |c: u8| (c as f32 / alpha).round().min(255.0) as u8;
    [restore(r), restore(g), restore(b), a]
}
