//! Proportional scaling against the reference canvas.
//!
//! All visual parameters are authored once at a 256-unit reference size and
//! scaled linearly to each output size. Nothing snaps to integers here;
//! keeping fractional values is what makes a 16 px icon a faithful miniature
//! of the 256 px one instead of a rounded approximation.

/// Side length of the reference canvas, in logical units.
pub const REFERENCE_SIZE: f32 = 256.0;

/// Vertical text anchor on the reference canvas.
///
/// Sits slightly below the geometric centre so glyphs anchored with
/// `dominant-baseline="middle"` look optically centred inside the square.
pub const REFERENCE_BASELINE: f32 = 145.0;

/// One requested output resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderTarget {
    size_px: u32,
}

impl RenderTarget {
    /// Creates a target for a square of `size_px` pixels.
    ///
    /// Zero is clamped to one pixel so downstream buffer allocations always
    /// have at least one pixel to write.
    pub fn new(size_px: u32) -> Self {
        Self {
            size_px: size_px.max(1),
        }
    }

    /// Side length in pixels.
    pub fn size_px(&self) -> u32 {
        self.size_px
    }

    /// Linear scale factor relative to the reference canvas.
    pub fn factor(&self) -> f32 {
        self.size_px as f32 / REFERENCE_SIZE
    }
}

/// Visual parameters as authored on the reference canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceParams {
    /// Font size in reference units.
    pub font_size: f32,
    /// Corner radius in reference units.
    pub corner_radius: f32,
    /// Vertical text anchor in reference units.
    pub baseline: f32,
}

impl ReferenceParams {
    /// Parameters with the standard baseline anchor.
    pub fn new(font_size: f32, corner_radius: f32) -> Self {
        Self {
            font_size,
            corner_radius,
            baseline: REFERENCE_BASELINE,
        }
    }
}

/// The same parameters resolved for one concrete output size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledParams {
    /// Font size in output pixels.
    pub font_size: f32,
    /// Corner radius in output pixels.
    pub corner_radius: f32,
    /// Vertical text anchor in output pixels.
    pub baseline: f32,
    /// Horizontal centre of the output square.
    pub center: f32,
    /// Side length of the output square.
    pub size_px: u32,
}

/// Scales reference parameters to a target size.
///
/// Every quantity is multiplied by the same factor, so ratios between
/// parameters are identical at every output size and scaling to the
/// reference size itself returns the parameters unchanged.
pub fn scale(reference: ReferenceParams, target: RenderTarget) -> ScaledParams {
    let factor = target.factor();
    ScaledParams {
        font_size: reference.font_size * factor,
        corner_radius: reference.corner_radius * factor,
        baseline: reference.baseline * factor,
        center: target.size_px() as f32 / 2.0,
        size_px: target.size_px(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_at_reference_size() {
        let reference = ReferenceParams::new(80.0, 24.0);
        let scaled = scale(reference, RenderTarget::new(256));
        assert_eq!(scaled.font_size, 80.0);
        assert_eq!(scaled.corner_radius, 24.0);
        assert_eq!(scaled.baseline, 145.0);
        assert_eq!(scaled.center, 128.0);
    }

    #[test]
    fn halving_the_target_halves_every_parameter() {
        let reference = ReferenceParams::new(80.0, 24.0);
        let scaled = scale(reference, RenderTarget::new(128));
        assert_eq!(scaled.font_size, 40.0);
        assert_eq!(scaled.corner_radius, 12.0);
        assert_eq!(scaled.baseline, 72.5);
        assert_eq!(scaled.center, 64.0);
    }

    #[test]
    fn small_sizes_keep_fractional_precision() {
        let reference = ReferenceParams::new(80.0, 24.0);
        let scaled = scale(reference, RenderTarget::new(16));
        assert_eq!(scaled.font_size, 5.0);
        assert_eq!(scaled.corner_radius, 1.5);
        assert_eq!(scaled.baseline, 9.0625);
    }

    #[test]
    fn ratios_match_the_size_ratio() {
        let reference = ReferenceParams::new(64.0, 20.0);
        let at_48 = scale(reference, RenderTarget::new(48));
        let at_96 = scale(reference, RenderTarget::new(96));
        assert!((at_96.font_size / at_48.font_size - 2.0).abs() < f32::EPSILON);
        assert!((at_96.baseline / at_48.baseline - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn baseline_fraction_is_constant() {
        let reference = ReferenceParams::new(80.0, 24.0);
        for size in [16u32, 32, 48, 64, 128, 256] {
            let scaled = scale(reference, RenderTarget::new(size));
            let fraction = scaled.baseline / size as f32;
            assert!((fraction - 145.0 / 256.0).abs() < 1e-6, "size {size}");
        }
    }

    #[test]
    fn zero_target_clamps_to_one_pixel() {
        let target = RenderTarget::new(0);
        assert_eq!(target.size_px(), 1);
    }

    #[test]
    fn factor_is_relative_to_reference() {
        assert_eq!(RenderTarget::new(64).factor(), 0.25);
        assert_eq!(RenderTarget::new(512).factor(), 2.0);
    }
}
