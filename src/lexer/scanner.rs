use crate::errors::errors::LexError;
use crate::{Span, MK_TOKEN};

use super::rules::{is_word_continue, Context, Rule, RuleAction, RuleTable};
use super::tokens::Token;

/// Lazy token sequence over a source buffer. The table and the source are
/// borrowed; the scanner owns only its cursor. Once an error has been
/// yielded the iterator is exhausted.
pub struct Scanner<'a> {
    table: &'a RuleTable,
    source: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, table: &'a RuleTable) -> Scanner<'a> {
        Scanner {
            table,
            source,
            pos: 0,
            failed: false,
        }
    }

    fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn context_ok(&self, context: Context, match_len: usize) -> bool {
        let prev = self.source[..self.pos].chars().next_back();
        let next = self.source[self.pos + match_len..].chars().next();

        match context {
            Context::Anywhere => true,
            Context::LineStart => matches!(prev, None | Some('\n')),
            Context::MidLine => !matches!(prev, None | Some('\n')),
            Context::WordStart => boundary_before(prev),
            Context::WholeWord => {
                boundary_before(prev) && !next.is_some_and(is_word_continue)
            }
            Context::Isolated => open_side(prev) && open_side(next),
        }
    }

    fn match_here(&self, rule: &Rule) -> Option<usize> {
        let found = rule.regex.find(self.remainder())?;
        if found.start() != 0 || !self.context_ok(rule.context, found.end()) {
            return None;
        }
        Some(found.end())
    }
}

fn boundary_before(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(c) => c.is_whitespace() || c == '.',
    }
}

fn open_side(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => c.is_whitespace(),
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let table = self.table;

        while !self.at_eof() {
            let mut skipped = false;

            for rule in table.rules() {
                let Some(len) = self.match_here(rule) else {
                    continue;
                };

                let span = Span {
                    start: self.pos,
                    end: self.pos + len,
                };
                self.pos = span.end;

                match rule.action {
                    RuleAction::Skip => skipped = true,
                    RuleAction::Emit(kind) => {
                        return Some(Ok(MK_TOKEN!(
                            kind,
                            self.source[span.start..span.end].to_string(),
                            span,
                            rule.categories.clone()
                        )));
                    }
                }

                break;
            }

            if skipped {
                continue;
            }

            self.failed = true;
            return Some(Err(LexError::at(self.source, self.pos)));
        }

        None
    }
}

/// Sole entry point: scan the whole buffer into an owned token sequence, or
/// fail at the first offset no rule covers.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(source, crate::rule_table()).collect()
}
