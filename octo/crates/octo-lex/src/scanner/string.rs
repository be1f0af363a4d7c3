//! String literal scanning.
//!
//! Strings are delimited by `"`, may span several lines, and have no escape
//! sequences: the value is exactly the text between the quotes.

use super::Scanner;
use crate::error::LexError;
use crate::token::{Literal, TokenKind};

impl<'a> Scanner<'a> {
    /// Scans a string literal whose opening quote has been consumed.
    ///
    /// If the input ends before the closing quote, reports
    /// [`LexError::UnterminatedString`] on the last line and emits nothing.
    pub(super) fn scan_string(&mut self) {
        self.cursor.eat_while(|c| c != '"');

        if self.cursor.is_at_end() {
            self.report(LexError::UnterminatedString);
            return;
        }

        // closing quote
        self.cursor.advance();

        let lexeme = self.lexeme();
        let value = &lexeme[1..lexeme.len() - 1];
        self.add_literal_token(TokenKind::String, Literal::String(value.to_string()));
    }
}
