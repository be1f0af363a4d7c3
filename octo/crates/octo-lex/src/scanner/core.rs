//! Core scanner implementation.

use octo_util::{DiagnosticBuilder, Handler, Span};
use tracing::{debug, debug_span};

use crate::classify::{is_alpha, is_digit};
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::keywords::Keywords;
use crate::token::{Literal, Token, TokenKind};

/// Scanner for OctothorP source text.
///
/// A scanner is built for one source text, run once with
/// [`scan_tokens`](Scanner::scan_tokens), and consumed by it. Lexical errors
/// go to the borrowed [`Handler`]; the scan always runs to the end of the
/// input.
///
/// # Example
///
/// ```
/// use octo_lex::{Keywords, Scanner, TokenKind};
/// use octo_util::Handler;
///
/// let handler = Handler::new();
/// let tokens = Scanner::new("let x = 1;", Keywords::global(), &handler).scan_tokens();
///
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Let,
///         TokenKind::Identifier,
///         TokenKind::Equal,
///         TokenKind::Number,
///         TokenKind::Semicolon,
///         TokenKind::Eof,
///     ]
/// );
/// assert!(!handler.has_errors());
/// ```
pub struct Scanner<'a> {
    /// Position in the source; `current` and `line`.
    pub(super) cursor: Cursor<'a>,

    /// Reserved-word table consulted for every identifier.
    pub(super) keywords: &'a Keywords,

    /// Where lexical errors are reported.
    handler: &'a Handler,

    /// Tokens produced so far.
    tokens: Vec<Token>,

    /// Byte offset of the current token's first character.
    token_start: usize,

    /// Line of the current token's first character.
    token_start_line: u32,

    /// Errors this scanner has reported.
    error_count: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `source`.
    pub fn new(source: &'a str, keywords: &'a Keywords, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            keywords,
            handler,
            tokens: Vec::new(),
            token_start: 0,
            token_start_line: 1,
            error_count: 0,
        }
    }

    /// Scans the whole source.
    ///
    /// The result always ends with exactly one `EOF` token, carrying the
    /// line the cursor finished on.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        let _span = debug_span!("scan_tokens", bytes = self.cursor.source().len()).entered();

        while !self.cursor.is_at_end() {
            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();
            self.scan_token();
        }

        self.tokens
            .push(Token::eof(self.cursor.position(), self.cursor.line()));

        debug!(
            tokens = self.tokens.len(),
            errors = self.error_count,
            lines = self.cursor.line(),
            "scan finished"
        );
        self.tokens
    }

    /// Scans at most one token starting at `token_start`.
    fn scan_token(&mut self) {
        let c = self.cursor.advance();

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '/' => self.add_token(TokenKind::Slash),

            '#' => self.skip_comment(),

            '!' => self.scan_operator(TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.scan_operator(TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.scan_operator(TokenKind::LessEqual, TokenKind::Less),
            '>' => self.scan_operator(TokenKind::GreaterEqual, TokenKind::Greater),

            // The cursor counts the line break itself.
            ' ' | '\r' | '\t' | '\n' => {}

            '"' => self.scan_string(),

            c if is_digit(c) => self.scan_number(),
            c if is_alpha(c) => self.scan_identifier(),

            ch => self.report(LexError::UnexpectedCharacter { ch }),
        }
    }

    /// The source text of the token being scanned.
    pub(super) fn lexeme(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    /// Span of the token being scanned.
    fn span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
        )
    }

    /// Emits a token for the current lexeme.
    pub(super) fn add_token(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.lexeme(), self.span());
        self.tokens.push(token);
    }

    /// Emits a literal-carrying token for the current lexeme.
    pub(super) fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        let token = Token::with_literal(kind, self.lexeme(), literal, self.span());
        self.tokens.push(token);
    }

    /// Reports a lexical error on the line the cursor is on.
    ///
    /// Nothing is emitted for the offending text.
    pub(super) fn report(&mut self, error: LexError) {
        let line = self.cursor.line();
        debug!(line, code = %error.code(), "{error}");

        let mut diagnostic = DiagnosticBuilder::error(error.to_string())
            .code(error.code())
            .span(self.span())
            .line(line);
        if let LexError::UnexpectedCharacter { ch } = error {
            diagnostic = diagnostic.note(format!("found {ch:?}"));
        }
        diagnostic.emit(self.handler);

        self.error_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> (Vec<Token>, Handler) {
        let handler = Handler::new();
        let tokens = Scanner::new(source, Keywords::global(), &handler).scan_tokens();
        (tokens, handler)
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).0.into_iter().map(|t| t.kind).collect()
    }

    // ========================================================================
    // DISPATCH TESTS
    // ========================================================================

    #[test]
    fn test_empty_source_is_just_eof() {
        let (tokens, handler) = scan("");
        assert_eq!(tokens, vec![Token::eof(0, 1)]);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_single_character_tokens() {
        assert_eq!(
            kinds("(){},.-+;*/"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Minus,
                TokenKind::Plus,
                TokenKind::Semicolon,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_single_character_lexemes() {
        let (tokens, _) = scan("(( )){}");
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["(", "(", ")", ")", "{", "}", ""]);
        assert!(tokens.iter().all(|t| t.line == 1));
    }

    #[test]
    fn test_whitespace_produces_nothing() {
        assert_eq!(kinds(" \t\r \r\n"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_newlines_advance_line() {
        let (tokens, _) = scan("+\n-\n\n*");
        let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 4, 4]);
    }

    #[test]
    fn test_spans_cover_lexemes() {
        let source = "a  == 12.5";
        let (tokens, _) = scan(source);
        for token in &tokens {
            assert_eq!(token.span.slice(source), token.lexeme);
        }
        assert_eq!(tokens.last().map(|t| t.span), Some(Span::point(10, 1)));
    }

    // ========================================================================
    // ERROR RECOVERY TESTS
    // ========================================================================

    #[test]
    fn test_unexpected_character_is_skipped() {
        let (tokens, handler) = scan("1 @ 2");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]
        );

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "Unexpected character.");
        assert_eq!(diags[0].line, 1);
        assert_eq!(diags[0].span, Span::new(2, 3, 1));
        assert_eq!(diags[0].notes, vec!["found '@'".to_string()]);
    }

    #[test]
    fn test_every_bad_character_reported() {
        let (tokens, handler) = scan("$\n%\n^");
        assert_eq!(tokens.len(), 1);
        let lines: Vec<_> = handler.diagnostics().iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_non_ascii_character_reported_once() {
        let (tokens, handler) = scan("é");
        assert_eq!(tokens.len(), 1);
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics()[0].span, Span::new(0, 2, 1));
    }

    #[test]
    fn test_other_whitespace_is_unexpected() {
        let (_, handler) = scan("\u{000C}\u{00A0}");
        assert_eq!(handler.error_count(), 2);
    }

    #[test]
    fn test_nul_character_is_unexpected() {
        let (tokens, handler) = scan("\0;");
        assert_eq!(tokens[0].kind, TokenKind::Semicolon);
        assert_eq!(handler.error_count(), 1);
    }
}
