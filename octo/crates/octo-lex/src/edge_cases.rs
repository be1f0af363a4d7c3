//! Edge case tests for octo-lex

use crate::{tokenize, Literal, Token, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).tokens.into_iter().map(|t| t.kind).collect()
}

fn lexemes(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.lexeme.as_str()).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    let scanned = tokenize("");
    assert_eq!(scanned.tokens, vec![Token::eof(0, 1)]);
    assert!(!scanned.has_errors());
}

#[test]
fn test_edge_only_newlines() {
    let scanned = tokenize("\n\n\n");
    assert_eq!(scanned.tokens, vec![Token::eof(3, 4)]);
}

#[test]
fn test_edge_windows_line_endings() {
    let scanned = tokenize("a\r\nb\r\n");
    let lines: Vec<_> = scanned.tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 3]);
    assert!(!scanned.has_errors());
}

#[test]
fn test_edge_nested_parens() {
    let source = "(( )){}";
    let scanned = tokenize(source);
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::LeftParen,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Eof,
        ]
    );
    assert!(scanned.tokens.iter().all(|t| t.line == 1));
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10_000);
    let scanned = tokenize(&format!("let {name} = 1;"));
    assert_eq!(scanned.tokens[1].lexeme, name);
}

#[test]
fn test_edge_adjacent_tokens_without_spaces() {
    let scanned = tokenize("x=1+y*2/z;");
    assert_eq!(
        lexemes(&scanned.tokens),
        vec!["x", "=", "1", "+", "y", "*", "2", "/", "z", ";", ""]
    );
}

#[test]
fn test_edge_number_then_identifier() {
    assert_eq!(
        kinds("3fn"),
        vec![TokenKind::Number, TokenKind::Fn, TokenKind::Eof]
    );
}

#[test]
fn test_edge_string_then_string() {
    let scanned = tokenize("\"a\"\"b\"");
    let literals: Vec<_> = scanned.tokens.iter().map(|t| t.literal.clone()).collect();
    assert_eq!(
        literals,
        vec![
            Some(Literal::String("a".into())),
            Some(Literal::String("b".into())),
            None,
        ]
    );
}

#[test]
fn test_edge_comment_directly_after_number() {
    let scanned = tokenize("12#34\n56");
    assert_eq!(lexemes(&scanned.tokens), vec!["12", "56", ""]);
    assert_eq!(scanned.tokens[1].line, 2);
}

#[test]
fn test_edge_unterminated_string_swallows_rest() {
    let source = "print \"abc; let x = 1;\n# still inside";
    let scanned = tokenize(source);
    assert_eq!(kinds(source), vec![TokenKind::Print, TokenKind::Eof]);
    assert_eq!(scanned.diagnostics.len(), 1);
    assert_eq!(scanned.diagnostics[0].line, 2);
    assert_eq!(scanned.tokens[1].line, 2);
}

#[test]
fn test_edge_errors_do_not_stop_scan() {
    let scanned = tokenize("@ 1 $ 2 ` 3");
    let numbers: Vec<_> = scanned
        .tokens
        .iter()
        .filter_map(|t| match t.literal {
            Some(Literal::Number(n)) => Some(n),
            _ => None,
        })
        .collect();
    assert_eq!(numbers, vec![1.0, 2.0, 3.0]);
    assert_eq!(scanned.diagnostics.len(), 3);
}

#[test]
fn test_edge_unsupported_brackets_and_colons() {
    let scanned = tokenize("[a]: b");
    assert_eq!(lexemes(&scanned.tokens), vec!["a", "b", ""]);
    assert_eq!(scanned.diagnostics.len(), 3);
}

#[test]
fn test_edge_zero_point_zero() {
    let scanned = tokenize("0.0");
    assert_eq!(scanned.tokens[0].literal, Some(Literal::Number(0.0)));
    assert_eq!(scanned.tokens[0].lexeme, "0.0");
}

#[test]
fn test_edge_eof_line_after_trailing_newline() {
    let scanned = tokenize("x\n");
    assert_eq!(scanned.tokens[0].line, 1);
    assert_eq!(scanned.tokens[1].line, 2);
}

#[test]
fn test_edge_emoji_outside_string() {
    let scanned = tokenize("a 🎉 b");
    assert_eq!(lexemes(&scanned.tokens), vec!["a", "b", ""]);
    assert_eq!(scanned.diagnostics.len(), 1);
    assert_eq!(scanned.diagnostics[0].span.len(), 4);
}
