use thiserror::Error;

/// The single runtime failure of the lexer: no rule matched at `offset`.
/// Always fatal to the scan; a caller wanting resynchronization has to skip
/// past the next statement terminator and start a fresh scan itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognised token at offset {offset}: {context:?}")]
pub struct LexError {
    /// Byte offset into the source where matching failed.
    pub offset: usize,
    /// Window of source text surrounding the failure offset.
    pub context: String,
}

const WINDOW: usize = 10;

impl LexError {
    pub fn at(source: &str, offset: usize) -> LexError {
        let start = source[..offset]
            .char_indices()
            .rev()
            .nth(WINDOW - 1)
            .map(|(i, _)| i)
            .unwrap_or(0);
        let end = source[offset..]
            .char_indices()
            .nth(WINDOW)
            .map(|(i, _)| offset + i)
            .unwrap_or(source.len());

        LexError {
            offset,
            context: source[start..end].to_string(),
        }
    }
}
