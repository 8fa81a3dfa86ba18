//! Error types for frame conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from batch frame operations.
///
/// Zero-radius positions are deliberately not an error: they produce NaN
/// components through ordinary floating-point division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FrameError {
    /// Two point sets that must pair up row by row have different lengths.
    ShapeMismatch {
        /// Number of rows in the first argument.
        expected: usize,
        /// Number of rows in the offending argument.
        got: usize,
    },
}

impl Display for FrameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected} rows, got {got}")
            }
        }
    }
}

impl Error for FrameError {}
