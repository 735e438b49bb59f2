//! # chroma-primaries
//!
//! Chromaticity primaries, white points, and RGB-XYZ matrix derivation.
//!
//! A display color space is pinned down by four points on the CIE 1931
//! chromaticity diagram: the red, green, and blue primaries, plus a
//! reference white. This crate models those points as value types and
//! derives the 3x3 matrix that converts linear RGB in that space to
//! CIE XYZ.
//!
//! # Usage
//!
//! ```rust
//! use chroma_primaries::{SRGB, D65, rgb_to_xyz_matrix};
//! use chroma_math::Vec3;
//!
//! let matrix = rgb_to_xyz_matrix(&SRGB, &D65).unwrap();
//!
//! // White (1,1,1) lands on the D65 white point
//! let white = matrix * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 0.001);
//! ```
//!
//! Derivation fails with [`chroma_core::Error::SingularMatrix`] when the
//! three primaries are collinear on the diagram, since no invertible
//! matrix exists for a degenerate gamut.
//!
//! # Dependencies
//!
//! - [`chroma-core`] - error types
//! - [`chroma-math`] - matrix operations
//!
//! # Used By
//!
//! - `chroma-color` - color space conversion API

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use chroma_core::{Error, Result};
use chroma_math::{Mat3, Vec3};

/// A chromaticity coordinate on the CIE 1931 diagram.
///
/// Describes one primary of a color space as an (x, y) pair. Immutable
/// value type.
///
/// # Example
///
/// ```rust
/// use chroma_primaries::Chromaticity;
///
/// let red = Chromaticity::new(0.64, 0.33);
/// assert_eq!(red.x, 0.64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticity {
    /// x coordinate on the chromaticity diagram
    pub x: f32,
    /// y coordinate on the chromaticity diagram
    pub y: f32,
}

impl Chromaticity {
    /// Creates a chromaticity coordinate.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Tristimulus XYZ of this chromaticity with Y normalized to 1.
    ///
    /// Computes (x/y, 1, (1-x-y)/y). A y of exactly zero has no
    /// tristimulus representation and yields the zero vector, so a
    /// degenerate primary surfaces downstream as a singular derivation
    /// matrix rather than as infinities.
    #[inline]
    pub fn to_xyz(&self) -> Vec3 {
        if self.y == 0.0 {
            Vec3::ZERO
        } else {
            Vec3::new(self.x / self.y, 1.0, (1.0 - self.x - self.y) / self.y)
        }
    }
}

/// A color in xyY form: chromaticity plus luminance.
///
/// Nominally distinct from the XYZ triples carried in
/// [`Vec3`](chroma_math::Vec3), so the two representations cannot be
/// handed to the wrong conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyY {
    /// x chromaticity
    pub x: f32,
    /// y chromaticity
    pub y: f32,
    /// Luminance Y, carried through conversions unchanged
    pub luminance: f32,
}

impl XyY {
    /// Creates an xyY triple.
    #[inline]
    pub const fn new(x: f32, y: f32, luminance: f32) -> Self {
        Self { x, y, luminance }
    }

    /// Projects an XYZ triple onto the chromaticity diagram.
    ///
    /// x = X/(X+Y+Z), y = Y/(X+Y+Z); luminance is Y unchanged. Fails with
    /// [`Error::DegenerateChromaticity`] when the component sum is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_primaries::XyY;
    /// use chroma_math::Vec3;
    ///
    /// let xyy = XyY::from_xyz(Vec3::new(0.9505, 1.0, 1.0891)).unwrap();
    /// assert!((xyy.x - 0.3127).abs() < 0.001);
    /// assert!((xyy.y - 0.3290).abs() < 0.001);
    /// assert_eq!(xyy.luminance, 1.0);
    /// ```
    pub fn from_xyz(xyz: Vec3) -> Result<Self> {
        let sum = xyz.sum();
        if sum == 0.0 {
            return Err(Error::degenerate("XYZ components sum to zero"));
        }
        Ok(Self::new(xyz.x / sum, xyz.y / sum, xyz.y))
    }

    /// Recovers the XYZ triple: X = x*Y/y, Z = (1-x-y)*Y/y.
    ///
    /// Fails with [`Error::DegenerateChromaticity`] when the y
    /// chromaticity is zero.
    pub fn to_xyz(self) -> Result<Vec3> {
        if self.y == 0.0 {
            return Err(Error::degenerate("y chromaticity is zero"));
        }
        let scale = self.luminance / self.y;
        Ok(Vec3::new(
            self.x * scale,
            self.luminance,
            (1.0 - self.x - self.y) * scale,
        ))
    }
}

/// A reference white point as a CIE XYZ triple.
///
/// Y is conventionally normalized to 1.0. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// X tristimulus value
    pub x: f32,
    /// Y tristimulus value, conventionally 1.0
    pub y: f32,
    /// Z tristimulus value
    pub z: f32,
}

impl WhitePoint {
    /// Creates a white point from XYZ tristimulus values.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The XYZ triple as a vector.
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// The xyY view of this white point, computed on demand.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_primaries::D65;
    ///
    /// let xyy = D65.xyy().unwrap();
    /// assert!((xyy.x - 0.3127).abs() < 0.001);
    /// ```
    #[inline]
    pub fn xyy(&self) -> Result<XyY> {
        XyY::from_xyz(self.to_vec3())
    }
}

// ============================================================================
// Standard White Points
// ============================================================================

/// CIE Standard Illuminant D65 (daylight, ~6500K).
///
/// Reference white for sRGB, Rec.709, Rec.2020, and Adobe RGB.
pub const D65: WhitePoint = WhitePoint::new(0.9505, 1.0, 1.0891);

/// CIE Standard Illuminant D50 (horizon light, ~5000K).
///
/// Reference white for ICC profiles and the printing industry.
pub const D50: WhitePoint = WhitePoint::new(0.9642, 1.0, 0.8249);

// ============================================================================
// Standard Primary Sets
// ============================================================================

/// The red, green, and blue primaries of an RGB color space.
///
/// The gamut corners of the space on the chromaticity diagram. Immutable
/// value type; pair with a [`WhitePoint`] to derive a conversion matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary chromaticity
    pub red: Chromaticity,
    /// Green primary chromaticity
    pub green: Chromaticity,
    /// Blue primary chromaticity
    pub blue: Chromaticity,
}

impl Primaries {
    /// Creates a primary set from three chromaticities.
    #[inline]
    pub const fn new(red: Chromaticity, green: Chromaticity, blue: Chromaticity) -> Self {
        Self { red, green, blue }
    }
}

/// sRGB / Rec.709 primaries (pair with [`D65`]).
///
/// The common color space for web and consumer displays.
pub const SRGB: Primaries = Primaries::new(
    Chromaticity::new(0.64, 0.33),
    Chromaticity::new(0.30, 0.60),
    Chromaticity::new(0.15, 0.06),
);

/// Display P3 primaries (pair with [`D65`]).
///
/// DCI-P3 gamut with a D65 white, common on wide gamut displays.
pub const DISPLAY_P3: Primaries = Primaries::new(
    Chromaticity::new(0.680, 0.320),
    Chromaticity::new(0.265, 0.690),
    Chromaticity::new(0.150, 0.060),
);

/// Rec.2020 primaries (pair with [`D65`]).
///
/// Ultra HD TV color space with a much wider gamut than Rec.709.
pub const REC2020: Primaries = Primaries::new(
    Chromaticity::new(0.708, 0.292),
    Chromaticity::new(0.170, 0.797),
    Chromaticity::new(0.131, 0.046),
);

/// Adobe RGB (1998) primaries (pair with [`D65`]).
pub const ADOBE_RGB: Primaries = Primaries::new(
    Chromaticity::new(0.64, 0.33),
    Chromaticity::new(0.21, 0.71),
    Chromaticity::new(0.15, 0.06),
);

// ============================================================================
// Matrix Derivation
// ============================================================================

/// Derives the linear RGB to CIE XYZ matrix for a primary set and white
/// point.
///
/// # Algorithm
///
/// 1. Convert each primary chromaticity to tristimulus XYZ with Y = 1
/// 2. Assemble the matrix with those vectors as columns
/// 3. Solve S = M^-1 * whitepoint for the per-channel scale factors
/// 4. Scale each column by its factor
///
/// The resulting matrix maps RGB (1, 1, 1) exactly onto the white point.
///
/// # Errors
///
/// [`Error::SingularMatrix`] when the primaries are collinear (or one is
/// degenerate with y = 0), since the column matrix then has no inverse.
///
/// # Example
///
/// ```rust
/// use chroma_primaries::{SRGB, D65, rgb_to_xyz_matrix};
///
/// let m = rgb_to_xyz_matrix(&SRGB, &D65).unwrap();
/// assert!((m.m[0][0] - 0.4124).abs() < 0.001);
/// assert!((m.m[1][0] - 0.2126).abs() < 0.001);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries, white: &WhitePoint) -> Result<Mat3> {
    let r = primaries.red.to_xyz();
    let g = primaries.green.to_xyz();
    let b = primaries.blue.to_xyz();

    // Primaries as columns; the white point pins the channel scales.
    let m = Mat3::from_col_vecs(r, g, b);
    let s = m
        .inverse()
        .ok_or_else(|| Error::singular_matrix("primaries are collinear"))?
        * white.to_vec3();

    Ok(Mat3::from_col_vecs(r * s.x, g * s.y, b * s.z))
}

/// Derives the CIE XYZ to linear RGB matrix for a primary set and white
/// point.
///
/// The inverse of [`rgb_to_xyz_matrix`], with the same error surface.
pub fn xyz_to_rgb_matrix(primaries: &Primaries, white: &WhitePoint) -> Result<Mat3> {
    rgb_to_xyz_matrix(primaries, white)?
        .inverse()
        .ok_or_else(|| Error::singular_matrix("derived RGB to XYZ matrix is singular"))
}

// ============================================================================
// Pre-computed Common Matrices
// ============================================================================

/// sRGB to XYZ (D65) matrix.
///
/// From IEC 61966-2-1:1999. Matches [`rgb_to_xyz_matrix`] on [`SRGB`] and
/// [`D65`] to display precision.
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ (D65) to sRGB matrix.
///
/// Inverse of [`SRGB_TO_XYZ`].
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_matrix_values() {
        let m = rgb_to_xyz_matrix(&SRGB, &D65).unwrap();
        let expected = [
            [0.4124, 0.3576, 0.1805],
            [0.2126, 0.7152, 0.0722],
            [0.0193, 0.1192, 0.9505],
        ];
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (m.m[i][j] - expected[i][j]).abs() < 1e-3,
                    "m[{}][{}] = {}, expected {}",
                    i,
                    j,
                    m.m[i][j],
                    expected[i][j]
                );
            }
        }
    }

    #[test]
    fn test_white_maps_to_white_point() {
        let m = rgb_to_xyz_matrix(&SRGB, &D65).unwrap();
        let white = m * Vec3::ONE;
        assert!((white.x - D65.x).abs() < 1e-4);
        assert!((white.y - D65.y).abs() < 1e-4);
        assert!((white.z - D65.z).abs() < 1e-4);
    }

    #[test]
    fn test_derivation_matches_reference_matrix() {
        let m = rgb_to_xyz_matrix(&SRGB, &D65).unwrap();
        assert!(m.approx_eq(&SRGB_TO_XYZ, 1e-3));
    }

    #[test]
    fn test_reference_matrices_are_inverses() {
        assert!((SRGB_TO_XYZ * XYZ_TO_SRGB).approx_eq(&Mat3::IDENTITY, 1e-5));
    }

    #[test]
    fn test_xyz_to_rgb_matrix_roundtrip() {
        let to_xyz = rgb_to_xyz_matrix(&SRGB, &D65).unwrap();
        let to_rgb = xyz_to_rgb_matrix(&SRGB, &D65).unwrap();
        assert!((to_rgb * to_xyz).approx_eq(&Mat3::IDENTITY, 1e-4));
    }

    #[test]
    fn test_collinear_primaries_rejected() {
        let gray = Chromaticity::new(0.3127, 0.3290);
        let degenerate = Primaries::new(gray, gray, gray);
        let err = rgb_to_xyz_matrix(&degenerate, &D65).unwrap_err();
        assert!(err.is_singular());
    }

    #[test]
    fn test_zero_y_primary_rejected() {
        let broken = Primaries::new(
            Chromaticity::new(0.64, 0.0),
            Chromaticity::new(0.30, 0.60),
            Chromaticity::new(0.15, 0.06),
        );
        let err = rgb_to_xyz_matrix(&broken, &D65).unwrap_err();
        assert!(err.is_singular());
    }

    #[test]
    fn test_wide_gamut_primary_sets() {
        for primaries in [DISPLAY_P3, REC2020, ADOBE_RGB] {
            let m = rgb_to_xyz_matrix(&primaries, &D65).unwrap();
            let white = m * Vec3::ONE;
            assert!((white.y - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_xyy_roundtrip() {
        let xyz = Vec3::new(0.3, 0.5, 0.2);
        let xyy = XyY::from_xyz(xyz).unwrap();
        let back = xyy.to_xyz().unwrap();
        assert!((back.x - xyz.x).abs() < 1e-3);
        assert!((back.y - xyz.y).abs() < 1e-3);
        assert!((back.z - xyz.z).abs() < 1e-3);
    }

    #[test]
    fn test_xyy_zero_sum_rejected() {
        let err = XyY::from_xyz(Vec3::ZERO).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_xyy_zero_y_rejected() {
        let err = XyY::new(0.5, 0.0, 1.0).to_xyz().unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_white_point_xyy_view() {
        let xyy = D65.xyy().unwrap();
        assert!((xyy.x - 0.3127).abs() < 1e-3);
        assert!((xyy.y - 0.3290).abs() < 1e-3);
        assert_eq!(xyy.luminance, 1.0);

        let xyy = D50.xyy().unwrap();
        assert!((xyy.x - 0.3457).abs() < 1e-3);
        assert!((xyy.y - 0.3585).abs() < 1e-3);
    }

    #[test]
    fn test_chromaticity_to_xyz() {
        let c = Chromaticity::new(0.64, 0.33);
        let xyz = c.to_xyz();
        assert!((xyz.x - 0.64 / 0.33).abs() < 1e-6);
        assert_eq!(xyz.y, 1.0);
        assert!((xyz.z - 0.03 / 0.33).abs() < 1e-5);

        assert_eq!(Chromaticity::new(0.5, 0.0).to_xyz(), Vec3::ZERO);
    }
}
