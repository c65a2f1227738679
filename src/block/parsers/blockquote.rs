//! Block quotes, grounded on `grammar/blocks/cm_blockquote.rs`'s `>` marker
//! detection — simplified to a per-line marker check since nesting and lazy
//! continuation onto a trailing paragraph are both handled generically by
//! the engine's new-blocks-phase loop (§4.3.2), not by this parser.

use crate::block::{BlockParser, BlockParserState, BlockTag, MatchResult, NewBlock};

#[derive(Debug, Default)]
pub struct BlockQuoteParser;

impl BlockParser for BlockQuoteParser {
    fn name(&self) -> &'static str {
        "blockquote"
    }

    fn can_interrupt_paragraph(&self) -> bool {
        true
    }

    fn match_line(&self, state: &mut BlockParserState<'_, '_>) -> MatchResult {
        let cursor = &mut *state.cursor;
        let leading = cursor.rest().chars().take_while(|&c| c == ' ').count();
        if leading > 3 {
            return MatchResult::None;
        }
        let after_indent = &cursor.rest()[leading..];
        if !after_indent.starts_with('>') {
            return MatchResult::None;
        }
        let mut consumed = leading + 1;
        if after_indent[1..].starts_with(' ') {
            consumed += 1;
        } else if after_indent[1..].starts_with('\t') {
            consumed += 1;
        }
        cursor.advance_bytes(consumed);

        if state.pending_block.is_none() {
            state.push_new_block(NewBlock::container(BlockTag::BlockQuote));
        }
        MatchResult::Continue
    }
}
