//! One-or-two character operator scanning.

use super::Scanner;
use crate::token::TokenKind;

impl<'a> Scanner<'a> {
    /// Finishes an operator whose first character has been consumed.
    ///
    /// Emits `with_equal` if the next character is `=` (consuming it),
    /// otherwise `alone`. Handles `!`/`!=`, `=`/`==`, `<`/`<=`, `>`/`>=`.
    pub(super) fn scan_operator(&mut self, with_equal: TokenKind, alone: TokenKind) {
        let kind = if self.cursor.match_char('=') {
            with_equal
        } else {
            alone
        };
        self.add_token(kind);
    }
}
