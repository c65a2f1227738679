//! Fenced code blocks (``` / ~~~), grounded on
//! `grammar/blocks/cm_fenced_code_block.rs`. The closing fence must use the
//! same character and be at least as long as the opening one; its own text
//! is discarded rather than appended to the leaf's content.

use crate::block::{BlockParser, BlockParserState, BlockTag, MatchResult, NewBlock};

#[derive(Debug, Default)]
pub struct FencedCodeParser;

impl BlockParser for FencedCodeParser {
    fn name(&self) -> &'static str {
        "fenced_code"
    }

    fn can_interrupt_paragraph(&self) -> bool {
        true
    }

    fn match_line(&self, state: &mut BlockParserState<'_, '_>) -> MatchResult {
        let cursor = &mut *state.cursor;
        match state.pending_block {
            Some(id) => {
                let (fence_char, fence_len) = match &state.arena.get(id).tag {
                    BlockTag::FencedCode { fence_char, fence_len, .. } => (*fence_char, *fence_len),
                    _ => return MatchResult::None,
                };

                let leading = cursor.rest().chars().take_while(|&c| c == ' ').count().min(3);
                let candidate = &cursor.rest()[leading..];
                let run = candidate.chars().take_while(|&c| c == fence_char).count();
                if run >= fence_len && candidate[run..].chars().all(|c| c == ' ' || c == '\t') {
                    cursor.advance_bytes(cursor.rest().len());
                    return MatchResult::LastDiscard;
                }
                MatchResult::Continue
            }
            None => {
                let leading = cursor.rest().chars().take_while(|&c| c == ' ').count();
                if leading > 3 {
                    return MatchResult::None;
                }
                let after_indent = &cursor.rest()[leading..];
                let fence_char = match after_indent.chars().next() {
                    Some(c @ ('`' | '~')) => c,
                    _ => return MatchResult::None,
                };
                let fence_len = after_indent.chars().take_while(|&c| c == fence_char).count();
                if fence_len < 3 {
                    return MatchResult::None;
                }
                let info = after_indent[fence_len..].trim();
                if fence_char == '`' && info.contains('`') {
                    return MatchResult::None;
                }
                let info = if info.is_empty() { None } else { Some(info.to_string()) };

                cursor.advance_bytes(cursor.rest().len());
                state.push_new_block(NewBlock::leaf_no_inline(BlockTag::FencedCode {
                    info,
                    fence_char,
                    fence_len,
                }));
                // The opening fence line's text (marker + info string) is
                // already fully consumed above; discard it so the engine
                // doesn't also append an empty first line to the body.
                MatchResult::ContinueDiscard
            }
        }
    }
}
