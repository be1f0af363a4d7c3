//! Token definitions.
//!
//! A [`Token`] is the scanner's unit of output: what kind of thing was
//! recognised, the exact text it was recognised from, the decoded value for
//! literals, and where it started.

use octo_util::Span;
use serde::Serialize;
use std::fmt;

/// The closed set of token kinds.
///
/// Serializes and displays as the SCREAMING_SNAKE_CASE name, e.g.
/// `LEFT_PAREN` or `BANG_EQUAL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Single-character tokens.
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    // One or two character tokens.
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals.
    /// A name that is not a reserved word
    Identifier,
    /// A double-quoted string literal
    String,
    /// A decimal number literal
    Number,

    // Keywords.
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fn`
    Fn,
    /// `for`
    For,
    /// `if`
    If,
    /// `let`
    Let,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `while`
    While,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns the kind's SCREAMING_SNAKE_CASE name.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fn => "FN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Let => "LET",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns true for the reserved words.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::Fn
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Let
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::While
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decoded value carried by a literal token.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    /// Value of a `NUMBER` token
    Number(f64),
    /// Contents of a `STRING` token, quotes excluded
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers keep their `.0`
            Literal::Number(n) => write!(f, "{n:?}"),
            Literal::String(s) => f.write_str(s),
        }
    }
}

/// A classified lexeme.
///
/// # Example
///
/// ```
/// use octo_lex::{tokenize, Literal, TokenKind};
///
/// let scanned = tokenize("12.5");
/// let number = &scanned.tokens[0];
/// assert_eq!(number.kind, TokenKind::Number);
/// assert_eq!(number.lexeme, "12.5");
/// assert_eq!(number.literal, Some(Literal::Number(12.5)));
/// assert_eq!(number.to_string(), "NUMBER 12.5 12.5");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    /// What was recognised
    pub kind: TokenKind,
    /// The exact source text of the token; empty only for `EOF`
    pub lexeme: String,
    /// Decoded value for `NUMBER` and `STRING` tokens
    pub literal: Option<Literal>,
    /// Line the token starts on (1-based)
    pub line: u32,
    /// Byte range of the lexeme in the source
    pub span: Span,
}

impl Token {
    /// Creates a token with no literal value.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line: span.line,
            span,
        }
    }

    /// Creates a literal-carrying token.
    pub fn with_literal(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Literal,
        span: Span,
    ) -> Self {
        Self {
            literal: Some(literal),
            ..Self::new(kind, lexeme, span)
        }
    }

    /// Creates the end-of-input token at byte `offset` on `line`.
    pub fn eof(offset: usize, line: u32) -> Self {
        Self::new(TokenKind::Eof, "", Span::point(offset, line))
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, "{literal}"),
            None => f.write_str("null"),
        }
    }
}
