//! Lexical error kinds.
//!
//! Lexical errors are never returned from the scanner; they are turned into
//! diagnostics and reported to the [`Handler`](octo_util::Handler), and the
//! scan continues. This type names them and fixes their wording and codes.

use octo_util::DiagnosticCode;
use thiserror::Error;

/// A recoverable lexical error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token and is not whitespace.
    #[error("Unexpected character.")]
    UnexpectedCharacter {
        /// The offending character
        ch: char,
    },

    /// A string literal still open at end of input.
    #[error("Unterminated string.")]
    UnterminatedString,
}

impl LexError {
    /// The diagnostic code reported with this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedCharacter { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
        }
    }
}
