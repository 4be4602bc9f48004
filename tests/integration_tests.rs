//! Integration tests for end-to-end tokenization.
//!
//! These tests verify the public lexer surface against whole programs:
//! span coverage, context disambiguation, category resolution through the
//! shared index, and failure behavior.

use abap_lexer::{
    category_of, kinds_in,
    lexer::scanner::tokenize,
    lexer::tokens::{Category, TokenKind},
};

const PROGRAM: &str = "\
REPORT zinventory.
* recompute the running totals
IF stock GT 0.
  total = total + stock * price.
ENDIF.
LOOP.
  count = count - 1.
ENDLOOP.
MESSAGE 'Done'. \" all good
";

#[test]
fn test_tokenize_full_program() {
    let tokens = tokenize(PROGRAM).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Header,
            TokenKind::Word,
            TokenKind::Terminator,
            TokenKind::CommentLine,
            TokenKind::IfStart,
            TokenKind::Word,
            TokenKind::GreaterThan,
            TokenKind::NumberLiteral,
            TokenKind::Terminator,
            TokenKind::Word,
            TokenKind::EqualTo,
            TokenKind::Word,
            TokenKind::ArithmeticPlus,
            TokenKind::Word,
            TokenKind::ArithmeticMult,
            TokenKind::Word,
            TokenKind::Terminator,
            TokenKind::IfEnd,
            TokenKind::Terminator,
            TokenKind::LoopStart,
            TokenKind::Terminator,
            TokenKind::Word,
            TokenKind::EqualTo,
            TokenKind::Word,
            TokenKind::ArithmeticMinus,
            TokenKind::NumberLiteral,
            TokenKind::Terminator,
            TokenKind::LoopEnd,
            TokenKind::Terminator,
            TokenKind::Message,
            TokenKind::InlineComment,
        ]
    );
}

#[test]
fn test_span_coverage_round_trip() {
    // Lexemes plus the skipped gaps reconstruct the source exactly.
    let tokens = tokenize(PROGRAM).unwrap();

    let mut rebuilt = String::new();
    let mut cursor = 0;
    for token in &tokens {
        assert!(token.span.start >= cursor, "overlapping spans");
        let gap = &PROGRAM[cursor..token.span.start];
        assert!(gap.chars().all(char::is_whitespace), "non-whitespace gap");
        rebuilt.push_str(gap);
        rebuilt.push_str(&token.lexeme);
        cursor = token.span.end;
    }
    rebuilt.push_str(&PROGRAM[cursor..]);

    assert_eq!(rebuilt, PROGRAM);
}

#[test]
fn test_retokenize_is_idempotent() {
    let first = tokenize(PROGRAM).unwrap();

    // Reconstruct the input from the emitted spans with the original
    // whitespace reinserted, then scan it again.
    let mut rebuilt = String::new();
    let mut cursor = 0;
    for token in &first {
        rebuilt.push_str(&PROGRAM[cursor..token.span.start]);
        rebuilt.push_str(&token.lexeme);
        cursor = token.span.end;
    }
    rebuilt.push_str(&PROGRAM[cursor..]);

    let second = tokenize(&rebuilt).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_equals_recognized_between_words() {
    let tokens = tokenize("A = B.").unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Word,
            TokenKind::EqualTo,
            TokenKind::Word,
            TokenKind::Terminator,
        ]
    );
}

#[test]
fn test_line_start_star_is_a_comment() {
    let tokens = tokenize("* this is a comment\n").unwrap();

    assert_eq!(tokens.len(), 1);
    assert!(category_of(&tokens[0]).contains(&Category::Comment));
    assert_eq!(tokens[0].lexeme, "* this is a comment");
}

#[test]
fn test_mid_line_star_is_multiplication() {
    let tokens = tokenize("A = B * C.").unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Word,
            TokenKind::EqualTo,
            TokenKind::Word,
            TokenKind::ArithmeticMult,
            TokenKind::Word,
            TokenKind::Terminator,
        ]
    );
}

#[test]
fn test_if_keywords_resolve_if_statement_category() {
    let tokens = tokenize("IF A > B.\n  ENDIF.").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::IfStart);
    assert!(category_of(&tokens[0]).contains(&Category::IfStatement));

    let end = tokens
        .iter()
        .find(|token| token.kind == TokenKind::IfEnd)
        .unwrap();
    assert!(category_of(end).contains(&Category::IfStatement));
}

#[test]
fn test_message_is_one_token() {
    let tokens = tokenize("MESSAGE 'Hello world'.").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Message);
    assert_eq!(tokens[0].lexeme, "MESSAGE 'Hello world'.");
    assert_eq!(tokens[0].span.start, 0);
    assert_eq!(tokens[0].span.end, 22);
}

#[test]
fn test_unrecognised_symbol_fails_at_its_offset() {
    let error = tokenize("A @ B.").unwrap_err();

    assert_eq!(error.offset, 2);
    assert!(error.context.contains('@'));
}

#[test]
fn test_kinds_in_queries() {
    assert_eq!(kinds_in(Category::ArithmeticOps).len(), 6);
    assert_eq!(kinds_in(Category::IfStatement).len(), 2);
    assert_eq!(kinds_in(Category::LoopStatement).len(), 2);
    assert_eq!(kinds_in(Category::Comment).len(), 2);

    // NOT belongs to both the comparative and the logical groups.
    assert!(kinds_in(Category::ComparitiveOps).contains(&TokenKind::LogicalNot));
    assert!(kinds_in(Category::LogicalOps).contains(&TokenKind::LogicalNot));
}

#[test]
fn test_uncategorized_tokens_resolve_to_empty() {
    let tokens = tokenize("MESSAGE 'x'. REPORT z.").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Message);
    assert!(category_of(&tokens[0]).is_empty());
    assert_eq!(tokens[1].kind, TokenKind::Header);
    assert!(category_of(&tokens[1]).is_empty());
}

#[test]
fn test_repeated_scans_agree() {
    // The shared table and index are read-only; scanning the same input
    // twice yields identical sequences.
    assert_eq!(tokenize(PROGRAM).unwrap(), tokenize(PROGRAM).unwrap());
}
