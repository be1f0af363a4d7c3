//! Core error types for octo-util crate

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    /// One or more errors were reported to a [`Handler`](crate::Handler)
    #[error("aborting due to {count} previous error{}", if *count == 1 { "" } else { "s" })]
    ErrorsEmitted {
        /// Number of error diagnostics collected
        count: usize,
    },
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
