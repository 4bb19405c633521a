//! Error types for bitmap construction and filter calls.
//!
//! Out-of-range percentages and grayscale amounts are not errors: they
//! pass through the arithmetic and saturate at the channel limits.

use thiserror::Error;

/// Errors raised by bitmap construction and the filters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Pixel buffer length (or array shape) does not match `width * height * 4`
    #[error("shape mismatch: expected {expected} bytes, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Parameter that cannot be interpreted at all
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for filter operations
pub type Result<T> = std::result::Result<T, FilterError>;
