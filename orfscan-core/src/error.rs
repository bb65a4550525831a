use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid mode choice: {choice} (expected 1, 2, or 3)")]
    InvalidMode { choice: u8 },

    #[error("invalid character '{ch}' at position {pos}")]
    InvalidChar { ch: char, pos: usize },

    #[error("no sequence left after stripping headers and whitespace")]
    EmptySequence,

    #[error("sequence io error: {0}")]
    Io(#[from] io::Error),
}

pub type ScanResult<T> = Result<T, ScanError>;
