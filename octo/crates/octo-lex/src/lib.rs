//! octo-lex - Lexical Analyzer for the OctothorP Scripting Language
//!
//! This crate turns OctothorP source text into a flat, fully materialised
//! list of tokens for later stages to consume.
//!
//! # Example Usage
//!
//! ```
//! use octo_lex::{run, TokenKind};
//! use octo_util::Handler;
//!
//! let handler = Handler::new();
//! let tokens = run("print 1 + 2; # three", &handler);
//!
//! assert!(!handler.has_errors());
//! assert_eq!(tokens.len(), 6);
//! assert_eq!(tokens[0].kind, TokenKind::Print);
//! assert!(tokens.last().is_some_and(|t| t.is_eof()));
//! ```
//!
//! # Module Structure
//!
//! - [`classify`] - ASCII character predicates
//! - [`cursor`] - Forward-only position and line tracking over the source
//! - [`token`] - Token, token kind and literal definitions
//! - [`keywords`] - The shared reserved-word table
//! - [`scanner`] - The scanner itself
//! - [`error`] - Lexical error kinds
//!
//! # Token Categories
//!
//! **Punctuation**: `(` `)` `{` `}` `,` `.` `-` `+` `;` `*` `/`
//!
//! **Operators**: `!` `!=` `=` `==` `<` `<=` `>` `>=`
//!
//! **Literals**: identifiers (`[A-Za-z_][A-Za-z0-9_]*`), strings
//! (`"..."`, may span lines, no escapes), numbers (`123`, `123.45`)
//!
//! **Keywords**: `and` `class` `else` `false` `for` `fn` `if` `nil` `or`
//! `print` `return` `super` `this` `true` `let` `while`
//!
//! **Skipped**: spaces, tabs, carriage returns, newlines, and `#` comments
//! running to the end of the line
//!
//! # Errors
//!
//! Unexpected characters and unterminated strings are reported to the
//! caller's [`Handler`] and skipped; scanning always reaches the end of the
//! input and always produces a final `EOF` token.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod error;
pub mod keywords;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexError;
pub use keywords::Keywords;
pub use scanner::Scanner;
pub use token::{Literal, Token, TokenKind};

use octo_util::{Diagnostic, Handler};

/// Scans `source` with the shared keyword table.
///
/// Lexical errors are reported to `handler`; the caller inspects it
/// afterwards to decide whether the run failed.
pub fn run(source: &str, handler: &Handler) -> Vec<Token> {
    Scanner::new(source, Keywords::global(), handler).scan_tokens()
}

/// Tokens and diagnostics from one scan.
#[derive(Clone, Debug, PartialEq)]
pub struct Scanned {
    /// The token list, always ending in `EOF`
    pub tokens: Vec<Token>,
    /// Lexical errors, in the order they were found
    pub diagnostics: Vec<Diagnostic>,
}

impl Scanned {
    /// Returns true if any lexical error was found.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Scans `source` with a private handler and returns everything it found.
///
/// ```
/// use octo_lex::tokenize;
///
/// let scanned = tokenize("\"open");
/// assert!(scanned.has_errors());
/// assert_eq!(scanned.tokens.len(), 1);
/// assert_eq!(
///     scanned.diagnostics[0].to_string(),
///     "[line 1] Error: Unterminated string."
/// );
/// ```
pub fn tokenize(source: &str) -> Scanned {
    let handler = Handler::new();
    let tokens = run(source, &handler);
    Scanned {
        tokens,
        diagnostics: handler.take_diagnostics(),
    }
}
