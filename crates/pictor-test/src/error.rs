//! Error types for pictor-test

use thiserror::Error;

/// Errors raised by the regression test harness
#[derive(Debug, Error)]
pub enum TestError {
    /// Underlying I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to write a regression artifact
    #[error("artifact write failed: {path}: {message}")]
    ArtifactWrite { path: String, message: String },
}

/// Result type for test harness operations
pub type TestResult<T> = Result<T, TestError>;
