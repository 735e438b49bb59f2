//! # chroma-core
//!
//! Core error types shared by the chroma crates.
//!
//! Colorimetric math has a narrow failure surface: a 3x3 matrix whose
//! determinant is zero cannot be inverted, and an XYZ or xyY triple whose
//! denominator is zero has no chromaticity. Both conditions are reported
//! through [`Error`] rather than letting NaN or infinity leak into results.
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::{Error, Result};
//!
//! fn checked_scale(value: f32, divisor: f32) -> Result<f32> {
//!     if divisor == 0.0 {
//!         return Err(Error::degenerate("zero divisor"));
//!     }
//!     Ok(value / divisor)
//! }
//! ```
//!
//! # Used By
//!
//! - `chroma-primaries` - matrix derivation and xyY conversions
//! - `chroma-color` - color space conversion API

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;

pub use error::*;
