//! Error types for strip construction.

use core::fmt;

/// Errors that can occur while building a strip.
#[derive(Debug, Clone, PartialEq)]
pub enum StripError {
    /// The vertex buffer was empty.
    EmptyMesh,
    /// The vertex buffer did not resolve into the expected corner grid.
    GridMismatch { groups: usize, expected: usize },
    /// `lerp_coef` must be in [0, 1] for the damped approach to converge.
    InvalidLerpCoef,
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StripError::EmptyMesh => write!(f, "vertex buffer is empty"),
            StripError::GridMismatch { groups, expected } => {
                write!(f, "vertex buffer resolved into {} groups, expected {}", groups, expected)
            }
            StripError::InvalidLerpCoef => write!(f, "lerp_coef must be in [0, 1]"),
        }
    }
}
