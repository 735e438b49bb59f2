//! # chroma-transfer
//!
//! Transfer function encoding and decoding for color pipelines.
//!
//! Display-referred RGB values are stored gamma encoded; colorimetric math
//! (matrix transforms, chromaticity projection) must run on linear light.
//! This crate converts between the two representations.
//!
//! # Usage
//!
//! ```rust
//! use chroma_transfer::srgb;
//!
//! // Decode an sRGB encoded value to linear light
//! let linear = srgb::linearize(0.5);
//!
//! // Encode it back
//! let encoded = srgb::encode(linear);
//! assert!((encoded - 0.5).abs() < 1e-5);
//! ```
//!
//! # Used By
//!
//! - `chroma-color` - color space conversion API

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

// Re-export common functions
pub use srgb::{encode as srgb_encode, linearize as srgb_linearize};
