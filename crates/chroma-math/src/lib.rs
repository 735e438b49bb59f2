//! # chroma-math
//!
//! Matrix and vector math underlying RGB/XYZ color conversions.
//!
//! This crate provides the two numeric primitives every colorimetric
//! transform is built from:
//!
//! - [`Mat3`] - 3x3 matrices for RGB to XYZ transforms
//! - [`Vec3`] - 3-component vectors carrying RGB or XYZ triples
//!
//! # Design
//!
//! Both types are plain `Copy` value types in single precision. Matrices
//! are stored **row-major** and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Inversion is the only fallible operation: [`Mat3::inverse`] returns
//! `None` for a matrix whose determinant is exactly zero.
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let xyz = rgb_to_xyz * rgb;
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with glam-based pipelines
//!
//! # Used By
//!
//! - `chroma-primaries` - RGB/XYZ matrix derivation
//! - `chroma-color` - color space conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat3 as GlamMat3, Vec3 as GlamVec3};
}
