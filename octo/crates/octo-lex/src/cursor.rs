//! Character cursor for traversing source code.
//!
//! The cursor owns the scanner's position state: the byte offset of the next
//! unread character and the line that character is on. It only ever moves
//! forward, and it always stops on UTF-8 character boundaries so that slices
//! taken between two positions are valid `&str`s.

/// A forward-only cursor over source text.
///
/// # Example
///
/// ```
/// use octo_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x");
/// assert_eq!(cursor.current_char(), 'l');
/// assert_eq!(cursor.advance(), 'l');
/// assert_eq!(cursor.current_char(), 'e');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the next unread character.
    position: usize,

    /// Line of the next unread character (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the next unread character without consuming it.
    ///
    /// Returns '\0' at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters past the current one.
    ///
    /// Returns '\0' when that lies past the end of the source. The sentinel
    /// is never consumed, so a literal NUL in the source is still seen by
    /// [`advance`](Self::advance).
    ///
    /// ```
    /// use octo_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("1.5");
    /// assert_eq!(cursor.peek_char(0), '1');
    /// assert_eq!(cursor.peek_char(1), '.');
    /// assert_eq!(cursor.peek_char(2), '5');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining().as_bytes();

        // Fast path: every byte up to the wanted one is ASCII
        if offset < rest.len() && rest[..=offset].is_ascii() {
            return rest[offset] as char;
        }

        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Returns the character after the current one.
    #[inline]
    pub fn peek_next_char(&self) -> char {
        self.peek_char(1)
    }

    /// Consumes and returns the next character.
    ///
    /// A newline bumps the line counter. At the end of the source this
    /// returns '\0' and does not move.
    pub fn advance(&mut self) -> char {
        let Some(c) = self.remaining().chars().next() else {
            return '\0';
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        c
    }

    /// Consumes the next character only if it equals `expected`.
    ///
    /// ```
    /// use octo_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('>'));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.current_char() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Consumes characters while `predicate` holds for the next one.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the line of the next unread character (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the byte offset of the next unread character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source between `start` and the current position.
    ///
    /// ```
    /// use octo_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("while x");
    /// cursor.eat_while(|c| c != ' ');
    /// assert_eq!(cursor.slice_from(0), "while");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the unread part of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }
}
