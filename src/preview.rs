//! Multi-resolution preview fan-out.

use crate::compose::{ComposedIcon, compose};
use crate::scale::RenderTarget;
use crate::spec::IconSpec;

/// The standard favicon size ladder, ascending.
pub const PREVIEW_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// The reduced ladder for space-constrained preview strips.
pub const COMPACT_PREVIEW_SIZES: [u32; 3] = [32, 64, 128];

/// Composes `spec` once per requested size, preserving order.
///
/// This is a pure fan-out: every entry is an independent [`compose`] call
/// against the same immutable spec, so issuing the calls individually, in
/// any order, yields the same icons.
///
/// # Example
///
/// ```
/// use favicon_forge::{Color, IconSpec, PREVIEW_SIZES, TextSpec, preview_all};
///
/// let spec = IconSpec::Text(TextSpec::new(
///     "F",
///     Color::parse("#1e293b").unwrap(),
///     Color::parse("#ffffff").unwrap(),
///     80.0,
///     24.0,
/// ));
/// let icons = preview_all(&spec, &PREVIEW_SIZES);
/// assert_eq!(icons.len(), 6);
/// assert_eq!(icons[0].size_px(), 16);
/// assert_eq!(icons[5].size_px(), 256);
/// ```
pub fn preview_all(spec: &IconSpec, sizes: &[u32]) -> Vec<ComposedIcon> {
    sizes
        .iter()
        .map(|&size| compose(spec, RenderTarget::new(size)))
        .collect()
}
