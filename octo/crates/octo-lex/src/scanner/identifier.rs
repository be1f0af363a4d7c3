//! Identifier and reserved-word scanning.

use super::Scanner;
use crate::classify::is_alpha_numeric;
use crate::token::TokenKind;

impl<'a> Scanner<'a> {
    /// Scans an identifier whose first character has been consumed.
    ///
    /// The complete lexeme is looked up in the keyword table; a match gives
    /// the reserved word's kind, anything else is an `IDENTIFIER`.
    pub(super) fn scan_identifier(&mut self) {
        self.cursor.eat_while(is_alpha_numeric);

        let kind = self
            .keywords
            .get(self.lexeme())
            .unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }
}
