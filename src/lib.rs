//! A pluggable two-phase block/inline Markdown parsing engine.
//!
//! Phase one (`block`) scans lines top-to-bottom against a stack of open
//! containers and produces a tree of [`block::Block`]s; phase two (`inline`)
//! walks that tree and resolves inline structure inside each leaf's
//! accumulated text into an [`inline::Inline`] tree. [`Engine`] owns the
//! ordered plug-in lists and drives both phases; [`builtin::default_engine`]
//! assembles one pre-registered with the built-in parser set.

pub mod block;
pub mod builtin;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod inline;
pub mod line_group;
pub mod pool;
pub mod reader;
pub mod trace;

pub use block::{
    Block, BlockArena, BlockData, BlockId, BlockParser, BlockParserState, BlockTag, MatchResult, NewBlock,
};
pub use builtin::{default_builder, default_engine};
pub use cursor::LineCursor;
pub use engine::{Document, Engine, EngineBuilder};
pub use error::{ConfigError, EngineInvariantViolation};
pub use inline::{Inline, InlineArena, InlineData, InlineId, InlineParser, InlineParserState, InlineTag};
pub use line_group::LineGroup;
pub use reader::{LineReader, StrLineReader};
pub use trace::{LogTraceSink, TraceEvent, TraceSink};

/// Parse `text` with the built-in parser set (§6.1) — the common one-shot
/// entry point. Never fails: the built-in registration cannot produce a
/// [`ConfigError`], and the engine never errors on malformed Markdown
/// (only a buggy third-party `BlockParser` can trigger
/// [`EngineInvariantViolation`]).
pub fn parse(text: &str) -> Result<Document, EngineInvariantViolation> {
    let engine = default_engine();
    let mut reader = StrLineReader::new(text);
    engine.parse(&mut reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_input_yields_document_with_no_children() {
        let doc = parse("").unwrap();
        assert_eq!(doc.blocks.len(), 1);
    }
}
