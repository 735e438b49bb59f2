//! Error types for colorimetric operations.
//!
//! Every fallible operation in the chroma crates returns [`Result`]. There
//! are exactly two failure modes: a singular matrix encountered during
//! inversion, and a degenerate chromaticity produced by a zero denominator
//! in the XYZ/xyY conversions.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by colorimetric conversions.
///
/// Uses [`thiserror`] for the [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
///
/// # Example
///
/// ```rust
/// use chroma_core::Error;
///
/// let err = Error::singular_matrix("determinant is zero");
/// assert!(err.is_singular());
/// assert!(err.to_string().contains("not invertible"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A 3x3 matrix has a zero determinant and cannot be inverted.
    ///
    /// Raised by any operation that requires a matrix inverse: deriving an
    /// RGB to XYZ matrix from collinear primaries, or converting XYZ back
    /// to RGB through a singular forward matrix. The computation stops; no
    /// partial result is produced.
    #[error("matrix is not invertible: {0}")]
    SingularMatrix(String),

    /// An XYZ or xyY triple has a zero denominator.
    ///
    /// Raised when the component sum of an XYZ triple is zero (so no
    /// chromaticity exists) or when the y chromaticity of an xyY triple is
    /// zero (so no tristimulus values exist).
    #[error("degenerate chromaticity: {0}")]
    DegenerateChromaticity(String),
}

impl Error {
    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular_matrix(detail: impl Into<String>) -> Self {
        Self::SingularMatrix(detail.into())
    }

    /// Creates an [`Error::DegenerateChromaticity`] error.
    #[inline]
    pub fn degenerate(detail: impl Into<String>) -> Self {
        Self::DegenerateChromaticity(detail.into())
    }

    /// Returns `true` if this is a singular-matrix error.
    #[inline]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularMatrix(_))
    }

    /// Returns `true` if this is a degenerate-chromaticity error.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateChromaticity(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_matrix_display() {
        let err = Error::singular_matrix("determinant is zero");
        let msg = err.to_string();
        assert!(msg.contains("matrix is not invertible"));
        assert!(msg.contains("determinant is zero"));
        assert!(err.is_singular());
        assert!(!err.is_degenerate());
    }

    #[test]
    fn test_degenerate_display() {
        let err = Error::degenerate("XYZ components sum to zero");
        let msg = err.to_string();
        assert!(msg.contains("degenerate chromaticity"));
        assert!(msg.contains("sum to zero"));
        assert!(err.is_degenerate());
        assert!(!err.is_singular());
    }

    #[test]
    fn test_error_is_comparable() {
        let a = Error::singular_matrix("determinant is zero");
        let b = Error::singular_matrix("determinant is zero");
        assert_eq!(a, b);
    }
}
