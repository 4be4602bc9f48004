//! Error types for the lexer.
//!
//! This module defines the single runtime error the lexer raises. It
//! includes:
//!
//! - The `LexError` structure with the failure offset
//! - Extraction of the surrounding source window for context

pub mod errors;
