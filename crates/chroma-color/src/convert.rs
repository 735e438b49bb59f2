//! Color space conversion functions.
//!
//! Free functions for the matrix-based RGB/XYZ conversions and the xyY
//! projection, plus the chainable [`RgbConvert`] trait for the steps that
//! cannot fail.
//!
//! All functions are pure: they consume and produce independent value
//! copies, never touch shared state, and are safe to call from any number
//! of threads at once.

use chroma_core::{Error, Result};
use chroma_math::{Mat3, Vec3};
use chroma_primaries::XyY;

/// Converts linear RGB to CIE XYZ through the given forward matrix.
///
/// The matrix is typically derived with
/// [`rgb_to_xyz_matrix`](chroma_primaries::rgb_to_xyz_matrix). Plain
/// matrix application; always succeeds.
///
/// # Example
///
/// ```rust
/// use chroma_color::convert::rgb_to_xyz;
/// use chroma_primaries::SRGB_TO_XYZ;
/// use chroma_math::Vec3;
///
/// let xyz = rgb_to_xyz(Vec3::ONE, &SRGB_TO_XYZ);
/// // sRGB white lands on D65
/// assert!((xyz.y - 1.0).abs() < 0.001);
/// ```
#[inline]
pub fn rgb_to_xyz(rgb: Vec3, matrix: &Mat3) -> Vec3 {
    matrix.transform(rgb)
}

/// Converts CIE XYZ to linear RGB through the given **forward** matrix.
///
/// The matrix is the same RGB-to-XYZ matrix used by [`rgb_to_xyz`]; it is
/// inverted here before application.
///
/// # Errors
///
/// [`Error::SingularMatrix`] when the matrix has a zero determinant.
pub fn xyz_to_rgb(xyz: Vec3, matrix: &Mat3) -> Result<Vec3> {
    let inverse = matrix
        .inverse()
        .ok_or_else(|| Error::singular_matrix("forward matrix has zero determinant"))?;
    Ok(inverse.transform(xyz))
}

/// Projects an XYZ triple onto the chromaticity diagram as xyY.
///
/// # Errors
///
/// [`Error::DegenerateChromaticity`] when X + Y + Z is zero.
#[inline]
pub fn xyz_to_xyy(xyz: Vec3) -> Result<XyY> {
    XyY::from_xyz(xyz)
}

/// Recovers an XYZ triple from its xyY form.
///
/// # Errors
///
/// [`Error::DegenerateChromaticity`] when the y chromaticity is zero.
#[inline]
pub fn xyy_to_xyz(xyy: XyY) -> Result<Vec3> {
    xyy.to_xyz()
}

/// Chainable per-pixel operations on RGB triplets.
///
/// Covers the conversion steps that cannot fail; the fallible matrix and
/// xyY conversions stay free functions so their error paths are explicit.
///
/// # Example
///
/// ```rust
/// use chroma_color::convert::RgbConvert;
/// use chroma_color::transfer::srgb;
/// use chroma_primaries::SRGB_TO_XYZ;
///
/// let xyz = [0.5_f32, 0.3, 0.2]
///     .linearize(srgb::linearize)  // decode to linear light
///     .transform(&SRGB_TO_XYZ);    // linear RGB -> XYZ
/// ```
pub trait RgbConvert: Sized {
    /// Applies a transfer function to decode each channel to linear.
    fn linearize(self, f: fn(f32) -> f32) -> Self;

    /// Applies a transfer function to encode each channel.
    fn encode(self, f: fn(f32) -> f32) -> Self;

    /// Applies a 3x3 matrix transformation.
    fn transform(self, matrix: &Mat3) -> Self;
}

impl RgbConvert for [f32; 3] {
    #[inline]
    fn linearize(self, f: fn(f32) -> f32) -> Self {
        [f(self[0]), f(self[1]), f(self[2])]
    }

    #[inline]
    fn encode(self, f: fn(f32) -> f32) -> Self {
        [f(self[0]), f(self[1]), f(self[2])]
    }

    #[inline]
    fn transform(self, matrix: &Mat3) -> Self {
        matrix.transform(Vec3::from_array(self)).to_array()
    }
}

impl RgbConvert for Vec3 {
    #[inline]
    fn linearize(self, f: fn(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    #[inline]
    fn encode(self, f: fn(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    #[inline]
    fn transform(self, matrix: &Mat3) -> Self {
        matrix.transform(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_primaries::{D65, SRGB, SRGB_TO_XYZ, rgb_to_xyz_matrix};

    #[test]
    fn test_rgb_to_xyz_applies_matrix() {
        let m = Mat3::diagonal(2.0, 3.0, 4.0);
        let xyz = rgb_to_xyz(Vec3::ONE, &m);
        assert_eq!(xyz, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_xyz_to_rgb_inverts_forward_matrix() {
        let m = rgb_to_xyz_matrix(&SRGB, &D65).unwrap();
        let rgb = Vec3::new(0.25, 0.5, 0.75);
        let xyz = rgb_to_xyz(rgb, &m);
        let back = xyz_to_rgb(xyz, &m).unwrap();
        assert!((back - rgb).abs().max_element() < 1e-4);
    }

    #[test]
    fn test_xyz_to_rgb_singular_matrix() {
        let err = xyz_to_rgb(Vec3::ONE, &Mat3::ZERO).unwrap_err();
        assert!(err.is_singular());
    }

    #[test]
    fn test_xyy_delegates() {
        let xyz = Vec3::new(0.9505, 1.0, 1.0891);
        let xyy = xyz_to_xyy(xyz).unwrap();
        let back = xyy_to_xyz(xyy).unwrap();
        assert!((back - xyz).abs().max_element() < 1e-4);

        assert!(xyz_to_xyy(Vec3::ZERO).unwrap_err().is_degenerate());
    }

    #[test]
    fn test_rgb_convert_transform_matches_free_function() {
        let rgb = [0.25_f32, 0.5, 0.75];
        let via_trait = rgb.transform(&SRGB_TO_XYZ);
        let via_fn = rgb_to_xyz(Vec3::from_array(rgb), &SRGB_TO_XYZ);
        assert_eq!(via_trait, via_fn.to_array());
    }

    #[test]
    fn test_rgb_convert_vec3_matches_array() {
        let f = chroma_transfer::srgb::linearize;
        let a = [0.5_f32, 0.3, 0.2].linearize(f);
        let v = Vec3::new(0.5, 0.3, 0.2).linearize(f);
        assert_eq!(v.to_array(), a);
    }
}
