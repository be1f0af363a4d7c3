//! Comment skipping.
//!
//! OctothorP has only line comments: `#` to the end of the line.

use super::Scanner;

impl<'a> Scanner<'a> {
    /// Skips the rest of a `#` comment.
    ///
    /// The terminating newline is left unread so the main loop counts it.
    pub(super) fn skip_comment(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }
}
