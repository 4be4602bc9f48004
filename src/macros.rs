//! Utility macros for the lexer.
//!
//! This module defines helper macros used throughout the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates a token-emitting entry for the rule table
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The exact matched source text
/// * `$span` - The source span
/// * `$categories` - The resolved category set
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumberLiteral, "42".to_string(), span, vec![]);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $span:expr, $categories:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            span: $span,
            categories: $categories,
        }
    };
}

/// Creates a token-emitting rule for the rule table.
///
/// The pattern is compiled eagerly; a pattern that fails to compile is a
/// defect in the table itself, caught by the table's tests.
///
/// # Arguments
///
/// * `$kind` - The TokenKind the rule emits
/// * `$pattern` - The recognizer pattern
/// * `$context` - The boundary check applied at the match offset
/// * `[$categories]` - Optional category memberships
///
/// # Example
///
/// ```ignore
/// MK_RULE!(TokenKind::Terminator, r"\.", Context::Anywhere)
/// MK_RULE!(TokenKind::LogicalAnd, r"(?i)AND", Context::WholeWord, [Category::LogicalOps])
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($kind:expr, $pattern:expr, $context:expr) => {
        $crate::MK_RULE!($kind, $pattern, $context, [])
    };
    ($kind:expr, $pattern:expr, $context:expr, [$($category:expr),* $(,)?]) => {
        Rule {
            action: RuleAction::Emit($kind),
            regex: Regex::new($pattern).unwrap(),
            context: $context,
            categories: vec![$($category),*],
        }
    };
}
