//! octo-util - Shared Foundation Types for the OctothorP Front End
//!
//! This crate holds the pieces every OctothorP phase needs regardless of
//! what it produces: source locations and the diagnostic machinery used to
//! report problems without aborting the phase that found them.
//!
//! # Module Structure
//!
//! - [`span`] - Byte ranges into the source, tagged with their line
//! - [`diagnostic`] - Diagnostics, diagnostic codes, and the [`Handler`]
//!   that accumulates them
//! - [`error`] - Error types for the operations in this crate
//!
//! # Example
//!
//! ```
//! use octo_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character.")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 2))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "[line 2] Error: Unexpected character."
//! );
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::Span;

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
