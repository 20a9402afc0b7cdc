//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a synthetic test image
    #[error("failed to build test pattern '{name}': {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: rectify_core::Error,
    },

    /// Invalid fixture parameters
    #[error("invalid fixture parameters: {0}")]
    InvalidFixture(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
