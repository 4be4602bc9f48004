#![allow(clippy::module_inception)]

use lazy_static::lazy_static;

use std::collections::HashSet;

use crate::errors::errors::LexError;
use crate::lexer::categories::CategoryIndex;
use crate::lexer::rules::RuleTable;
use crate::lexer::tokens::{Category, Token, TokenKind};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Half-open byte range `[start, end)` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

lazy_static! {
    static ref DEFAULT_TABLE: RuleTable = RuleTable::build();
    static ref DEFAULT_INDEX: CategoryIndex = CategoryIndex::from_table(&DEFAULT_TABLE);
}

/// The shared rule table, built once per process.
pub fn rule_table() -> &'static RuleTable {
    &DEFAULT_TABLE
}

/// The shared category index over [`rule_table`].
pub fn category_index() -> &'static CategoryIndex {
    &DEFAULT_INDEX
}

/// Scan `source` into an owned token sequence using the shared rule table.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    lexer::scanner::tokenize(source)
}

pub fn category_of(token: &Token) -> &'static [Category] {
    category_index().categories_of(token.kind)
}

pub fn kinds_in(category: Category) -> &'static HashSet<TokenKind> {
    category_index().kinds_in(category)
}

/// Locate the line containing `offset`: 1-based line number, the line text
/// (trailing newline included), and the byte column within it. An offset at
/// or past the end of the buffer resolves to the position after the last
/// character.
pub fn line_at_offset(source: &str, offset: usize) -> (usize, &str, usize) {
    let offset = offset.min(source.len());
    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if offset < end || (offset == end && !line.ends_with('\n')) {
            return (line_number, line, offset - start);
        }

        start = end;
        line_number += 1;
    }

    (line_number, "", 0)
}

pub fn render_error(source: &str, error: &LexError) -> String {
    /*
        error: unrecognised token at offset 2: "A @ B."
          |
        1 | A @ B.
          | --^
    */

    let (line_number, line_text, column) = line_at_offset(source, error.offset);

    let line_string = line_number.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    format!(
        "error: {}\n{:>padding$}\n{} | {}\n{:>padding$} {:->arrows$}",
        error,
        "|",
        line_string,
        line_text_removed.trim_end(),
        "|",
        "^"
    )
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (&string[start..], start)
}
