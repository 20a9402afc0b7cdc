//! Error types for rectify-transform

use thiserror::Error;

/// Errors that can occur during homography estimation and rectification
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rectify_core::Error),

    /// Invalid transformation parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The point correspondences do not determine a unique transform
    #[error("singular transformation: correspondences are degenerate")]
    Singular,
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
