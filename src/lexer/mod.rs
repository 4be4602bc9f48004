//! Lexical analysis module for the ABAP-like language.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of classified tokens for a downstream grammar. It handles:
//!
//! - Tokenization of source code using an ordered regex rule table
//! - Context disambiguation of reused symbols (`*` as comment vs. multiply)
//! - Whole-word recognition of keywords and operator word aliases
//! - Category tagging of tokens and the two-way category index
//! - Token span tracking for error reporting

pub mod categories;
pub mod rules;
pub mod scanner;
pub mod tokens;
