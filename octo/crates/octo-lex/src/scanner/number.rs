//! Number literal scanning.
//!
//! Numbers are a run of decimal digits with an optional fraction. There is
//! no sign, exponent, radix prefix or digit separator, and a leading `.`
//! (as in `.5`) is not part of a number.

use super::Scanner;
use crate::classify::is_digit;
use crate::token::{Literal, TokenKind};

impl<'a> Scanner<'a> {
    /// Scans a number literal whose first digit has been consumed.
    ///
    /// A `.` is only taken as a decimal point when a digit follows it, so
    /// `123.` scans as `123` followed by a `DOT`.
    pub(super) fn scan_number(&mut self) {
        self.cursor.eat_while(is_digit);

        if self.cursor.current_char() == '.' && is_digit(self.cursor.peek_next_char()) {
            // decimal point
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
        }

        let text = self.lexeme();
        let parsed = text.parse::<f64>();
        debug_assert!(parsed.is_ok(), "number lexeme {text:?} did not parse");
        let value = parsed.unwrap_or_default();
        self.add_literal_token(TokenKind::Number, Literal::Number(value));
    }
}
