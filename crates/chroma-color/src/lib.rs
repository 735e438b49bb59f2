//! # chroma-color
//!
//! Colorimetric conversions between linear RGB, CIE XYZ, and CIE xyY.
//!
//! This crate ties the lower layers together into one conversion API:
//!
//! - **Transfer functions** - sRGB gamma decoding and encoding
//! - **Matrix derivation** - RGB/XYZ matrices from primaries and white point
//! - **Conversions** - RGB to XYZ, XYZ to RGB, XYZ to xyY and back
//!
//! # Architecture
//!
//! ```text
//!                chroma-color
//!                     |
//!        +------------+------------+
//!        |                         |
//! chroma-transfer          chroma-primaries
//!                                  |
//!                       +----------+----------+
//!                       |                     |
//!                  chroma-math           chroma-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_color::convert::{rgb_to_xyz, xyz_to_rgb, xyz_to_xyy, RgbConvert};
//! use chroma_color::primaries::{SRGB, D65, rgb_to_xyz_matrix};
//! use chroma_color::transfer::srgb;
//! use chroma_math::Vec3;
//!
//! // Derive the conversion matrix for the sRGB space
//! let matrix = rgb_to_xyz_matrix(&SRGB, &D65)?;
//!
//! // Decode a display value to linear light, then convert to XYZ
//! let linear = [0.5_f32, 0.3, 0.2].linearize(srgb::linearize);
//! let xyz = rgb_to_xyz(Vec3::from_array(linear), &matrix);
//!
//! // Project onto the chromaticity diagram
//! let xyy = xyz_to_xyy(xyz)?;
//!
//! // And back to linear RGB
//! let rgb = xyz_to_rgb(xyz, &matrix)?;
//! # Ok::<(), chroma_core::Error>(())
//! ```
//!
//! # Errors
//!
//! Conversions that require a matrix inverse fail with
//! [`Error::SingularMatrix`] when the matrix has a zero determinant; the
//! xyY conversions fail with [`Error::DegenerateChromaticity`] on a zero
//! denominator. Everything else is infallible.
//!
//! # Dependencies
//!
//! - [`chroma-core`] - error types
//! - [`chroma-math`] - Mat3 and Vec3
//! - [`chroma-transfer`] - sRGB transfer function
//! - [`chroma-primaries`] - primaries, white points, matrix derivation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;

pub use chroma_core::{Error, Result};
pub use convert::{RgbConvert, rgb_to_xyz, xyy_to_xyz, xyz_to_rgb, xyz_to_xyy};

// Re-export sub-crates for convenience
pub use chroma_math as math;
pub use chroma_primaries as primaries;
pub use chroma_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::convert::{RgbConvert, rgb_to_xyz, xyy_to_xyz, xyz_to_rgb, xyz_to_xyy};

    pub use chroma_core::{Error, Result};

    // Re-export transfer functions
    pub use chroma_transfer::srgb;

    // Re-export primaries, white points, and matrix derivation
    pub use chroma_primaries::{
        Chromaticity, D50, D65, Primaries, SRGB, WhitePoint, XyY, rgb_to_xyz_matrix,
        xyz_to_rgb_matrix,
    };

    // Re-export math
    pub use chroma_math::{Mat3, Vec3};
}
