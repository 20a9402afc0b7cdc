//! Error types for rectify-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// rectify-core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw pixel data does not match the declared dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A coordinate is NaN or infinite
    #[error("non-finite coordinate: ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
