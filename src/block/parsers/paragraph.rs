//! Paragraphs, grounded on `grammar/blocks/cm_paragraph.rs`.
//!
//! The paragraph parser is the catch-all: it matches any non-blank line.
//! It is only ever invoked from the new-blocks phase (§4.3.1 step 2a has
//! the continuation loop stop as soon as it reaches an open paragraph,
//! leaving the lazy-continuation special case in §4.3.2 to decide its fate).

use crate::block::{BlockParser, BlockParserState, BlockTag, MatchResult, NewBlock};

#[derive(Debug, Default)]
pub struct ParagraphParser;

impl BlockParser for ParagraphParser {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn can_interrupt_paragraph(&self) -> bool {
        true
    }

    fn is_paragraph(&self) -> bool {
        true
    }

    fn match_line(&self, state: &mut BlockParserState<'_, '_>) -> MatchResult {
        if state.line_is_blank() {
            return MatchResult::None;
        }
        state.push_new_block(NewBlock::leaf(BlockTag::Paragraph));
        MatchResult::Continue
    }
}
