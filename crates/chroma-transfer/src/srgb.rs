//! sRGB transfer function.
//!
//! The sRGB curve is piecewise: a linear segment near black joined to a
//! power curve (exponent 2.4) for the rest of the range. Both directions
//! are applied independently per channel; there is no cross-channel
//! coupling.
//!
//! # Range
//!
//! - Input/Output: [0, 1]. Values outside the range pass through the
//!   piecewise formula unvalidated.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Decodes a gamma-encoded sRGB value to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use chroma_transfer::srgb;
///
/// let linear = srgb::linearize(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn linearize(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes a linear light value to gamma-encoded sRGB.
///
/// Inverse of [`linearize`].
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn encode(l: f32) -> f32 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Decodes each channel of a gamma-encoded RGB triplet.
#[inline]
pub fn linearize_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [linearize(rgb[0]), linearize(rgb[1]), linearize(rgb[2])]
}

/// Encodes each channel of a linear RGB triplet.
#[inline]
pub fn encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}
