use regex::Regex;

use crate::MK_RULE;

use super::tokens::{Category, TokenKind};

/// Boundary requirement checked by the scanner at the match offset, standing
/// in for the lookaround the original token grammar relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// No constraint.
    Anywhere,
    /// The match starts at the first character of a line.
    LineStart,
    /// The match does not start at the first character of a line.
    MidLine,
    /// Preceded by start-of-input, whitespace, or a statement terminator.
    WordStart,
    /// `WordStart`, and not followed by a word-continuation character.
    WholeWord,
    /// Surrounded by whitespace (or input boundaries) on both sides.
    Isolated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    Emit(TokenKind),
    Skip,
}

#[derive(Clone)]
pub struct Rule {
    pub action: RuleAction,
    pub regex: Regex,
    pub context: Context,
    pub categories: Vec<Category>,
}

/// The ordered token rule table. Declaration order is the priority order:
/// at each offset the scanner takes the first rule that matches there and
/// passes its context check.
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn build() -> RuleTable {
        RuleTable {
            rules: vec![
                // Whitespace is recognized and discarded.
                Rule {
                    action: RuleAction::Skip,
                    regex: Regex::new(r"\s+").unwrap(),
                    context: Context::Anywhere,
                    categories: vec![],
                },
                // `*` in column 0 starts a full-line comment; anywhere else it
                // is multiplication or exponentiation (below).
                MK_RULE!(TokenKind::CommentLine, r"\*[^\n]*", Context::LineStart, [Category::Comment]),
                MK_RULE!(TokenKind::InlineComment, "\"[^\n]*", Context::MidLine, [Category::Comment]),
                // Free-form message statement, captured whole up to the next
                // terminator on the line.
                MK_RULE!(TokenKind::Message, r"(?i)MESSAGE\b[^.\n]*\.", Context::WordStart),
                MK_RULE!(TokenKind::StringLiteral, r"'[^'\n]*'", Context::Anywhere),
                MK_RULE!(TokenKind::NumberLiteral, r"-?(0|[1-9]\d*)(\.\d+)?([eE][+-]?\d+)?", Context::Anywhere),
                // Keywords. END* forms come before their prefixes.
                MK_RULE!(TokenKind::IfEnd, r"(?i)ENDIF", Context::WholeWord, [Category::IfStatement]),
                MK_RULE!(TokenKind::LoopEnd, r"(?i)ENDLOOP", Context::WholeWord, [Category::LoopStatement]),
                MK_RULE!(TokenKind::IfStart, r"(?i)IF", Context::WholeWord, [Category::IfStatement]),
                MK_RULE!(TokenKind::LoopStart, r"(?i)LOOP", Context::WholeWord, [Category::LoopStatement]),
                MK_RULE!(TokenKind::ArithmeticMod, r"(?i)MOD", Context::WholeWord, [Category::ArithmeticOps]),
                MK_RULE!(TokenKind::LogicalAnd, r"(?i)AND", Context::WholeWord, [Category::LogicalOps]),
                MK_RULE!(TokenKind::LogicalOr, r"(?i)OR", Context::WholeWord, [Category::LogicalOps]),
                MK_RULE!(TokenKind::LogicalNot, r"(?i)NOT", Context::WholeWord, [Category::ComparitiveOps, Category::LogicalOps]),
                MK_RULE!(TokenKind::Header, r"(?i)(PROGRAM|REPORT)", Context::WholeWord),
                // Comparatives. Two-character symbols before their prefixes.
                MK_RULE!(TokenKind::NotEqual, r"(?i)(<>|NE)", Context::Isolated, [Category::ComparitiveOps]),
                MK_RULE!(TokenKind::LessThanEqualTo, r"(?i)(<=|LE)", Context::Isolated, [Category::ComparitiveOps]),
                MK_RULE!(TokenKind::GreaterThanEqualTo, r"(?i)(>=|GE)", Context::Isolated, [Category::ComparitiveOps]),
                MK_RULE!(TokenKind::LessThan, r"(?i)(<|LT)", Context::Isolated, [Category::ComparitiveOps]),
                MK_RULE!(TokenKind::GreaterThan, r"(?i)(>|GT)", Context::Isolated, [Category::ComparitiveOps]),
                MK_RULE!(TokenKind::EqualTo, r"(?i)(=|EQ)", Context::Isolated, [Category::ComparitiveOps]),
                MK_RULE!(TokenKind::ArithmeticPow, r"\*\*", Context::MidLine, [Category::ArithmeticOps]),
                MK_RULE!(TokenKind::ArithmeticMult, r"\*", Context::MidLine, [Category::ArithmeticOps]),
                MK_RULE!(TokenKind::ArithmeticPlus, r"\+", Context::Anywhere, [Category::ArithmeticOps]),
                MK_RULE!(TokenKind::ArithmeticMinus, r"-", Context::Anywhere, [Category::ArithmeticOps]),
                MK_RULE!(TokenKind::ArithmeticDiv, r"/", Context::Anywhere, [Category::ArithmeticOps]),
                MK_RULE!(TokenKind::Terminator, r"\.", Context::Anywhere),
                MK_RULE!(TokenKind::Word, r"[A-Za-z_][A-Za-z0-9_=-]*", Context::Anywhere),
            ],
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// Characters that extend a word once started. `=` and `-` are included so
/// that forms like `A=B` and structure components like `WA-FIELD` stay one
/// word instead of splitting mid-identifier.
pub fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '=')
}
