//! Reserved-word table.
//!
//! The table is built once, on first use, and never changes afterwards.
//! Scanners borrow it, so any number of scanners on any number of threads
//! can share the same instance.

use lazy_static::lazy_static;
use octo_util::FxHashMap;

use crate::token::TokenKind;

/// Every reserved word with the kind it scans to.
const RESERVED: [(&str, TokenKind); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fn", TokenKind::Fn),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("let", TokenKind::Let),
    ("while", TokenKind::While),
];

lazy_static! {
    static ref GLOBAL: Keywords = Keywords::new();
}

/// Exact-spelling lookup from reserved word to token kind.
///
/// # Example
///
/// ```
/// use octo_lex::{Keywords, TokenKind};
///
/// let keywords = Keywords::global();
/// assert_eq!(keywords.get("while"), Some(TokenKind::While));
/// assert_eq!(keywords.get("While"), None);
/// assert_eq!(keywords.get("whilst"), None);
/// ```
#[derive(Debug)]
pub struct Keywords {
    map: FxHashMap<&'static str, TokenKind>,
}

impl Keywords {
    fn new() -> Self {
        Self {
            map: RESERVED.iter().copied().collect(),
        }
    }

    /// Returns the process-wide table.
    pub fn global() -> &'static Keywords {
        &GLOBAL
    }

    /// Looks up `text`, which must be the complete lexeme.
    #[inline]
    pub fn get(&self, text: &str) -> Option<TokenKind> {
        self.map.get(text).copied()
    }

    /// Number of reserved words.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over `(spelling, kind)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.map.iter().map(|(text, kind)| (*text, *kind))
    }
}
