//! Diagnostic codes for categorizing front-end errors.
//!
//! # Examples
//!
//! ```
//! use octo_util::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1002);
//! assert_eq!(code.to_string(), "E1002");
//! ```

use serde::Serialize;
use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` where `prefix` is `"E"` and
/// `number` is printed as at least four digits. Lexer codes live in the
/// 1000 range so later phases can claim their own ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DiagnosticCode {
    /// The prefix (`"E"` for errors)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    // Lexer errors (1000-1999)
    /// A character that starts no token and is not whitespace
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// A string literal with no closing quote before end of input
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_four_digits() {
        assert_eq!(DiagnosticCode::new("E", 7).to_string(), "E0007");
        assert_eq!(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR.to_string(), "E1001");
    }

    #[test]
    fn test_lexer_codes_are_distinct() {
        assert_ne!(
            DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            DiagnosticCode::E_LEXER_UNTERMINATED_STRING
        );
        assert_eq!(DiagnosticCode::E_LEXER_UNTERMINATED_STRING.prefix(), "E");
    }
}
