//! Error surface: construction-time configuration errors and runtime
//! invariant violations. Malformed Markdown itself never produces an error
//! here — per CommonMark, any input parses to *some* tree.

use thiserror::Error;

/// Fatal at [`crate::engine::Engine`] construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("inline parser '{parser}' declares first-char {byte:#04x}, which is >= 128 (non-ASCII)")]
    NonAsciiFirstChar { parser: &'static str, byte: u8 },

    #[error(
        "inline parsers '{first}' and '{second}' both claim first-char {byte:#04x} ({ch:?})"
    )]
    DuplicateFirstChar {
        first: &'static str,
        second: &'static str,
        byte: u8,
        ch: char,
    },
}

/// Fatal at runtime; indicates a buggy [`crate::block::BlockParser`] implementation
/// rather than malformed input.
#[derive(Debug, Error)]
#[error("engine invariant violated at line {line_index} by parser '{parser}': {reason}")]
pub struct EngineInvariantViolation {
    pub reason: String,
    pub line_index: usize,
    pub parser: &'static str,
}

impl EngineInvariantViolation {
    pub fn new(reason: impl Into<String>, line_index: usize, parser: &'static str) -> Self {
        Self {
            reason: reason.into(),
            line_index,
            parser,
        }
    }
}
