//! Thematic breaks (`---`, `***`, `___`), grounded on
//! `grammar/blocks/cm_thematic_break.rs`: a single-line leaf that always
//! closes itself immediately after being recognized.

use crate::block::{BlockParser, BlockParserState, BlockTag, MatchResult, NewBlock};

#[derive(Debug, Default)]
pub struct ThematicBreakParser;

impl BlockParser for ThematicBreakParser {
    fn name(&self) -> &'static str {
        "thematic_break"
    }

    fn can_interrupt_paragraph(&self) -> bool {
        true
    }

    fn match_line(&self, state: &mut BlockParserState<'_, '_>) -> MatchResult {
        if state.pending_block.is_some() {
            return MatchResult::None;
        }
        let cursor = &mut *state.cursor;
        let leading = cursor.rest().chars().take_while(|&c| c == ' ').count();
        if leading > 3 {
            return MatchResult::None;
        }
        let rest = &cursor.rest()[leading..];
        let Some(marker) = rest.chars().next().filter(|c| matches!(c, '-' | '*' | '_')) else {
            return MatchResult::None;
        };

        let mut count = 0;
        for c in rest.chars() {
            if c == marker {
                count += 1;
            } else if c == ' ' || c == '\t' {
                continue;
            } else {
                return MatchResult::None;
            }
        }
        if count < 3 {
            return MatchResult::None;
        }

        cursor.advance_bytes(cursor.rest().len());
        state.push_new_block(NewBlock::leaf_no_inline(BlockTag::ThematicBreak));
        MatchResult::Last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockArena;
    use crate::cursor::LineCursor;
    use crate::pool::StringPool;

    fn recognize(line: &str) -> MatchResult {
        let mut arena = BlockArena::new();
        arena.new_document();
        let mut cursor = LineCursor::new(line);
        let mut staged = Vec::new();
        let pool = StringPool::new();
        let mut state = BlockParserState::new(&mut arena, &mut cursor, 0, None, 0, &mut staged, &pool);
        ThematicBreakParser.match_line(&mut state)
    }

    #[test]
    fn three_hyphens_match() {
        assert_eq!(recognize("---"), MatchResult::Last);
    }

    #[test]
    fn spaced_asterisks_match() {
        assert_eq!(recognize("* * *"), MatchResult::Last);
    }

    #[test]
    fn two_hyphens_do_not_match() {
        assert_eq!(recognize("--"), MatchResult::None);
    }

    #[test]
    fn mixed_characters_do_not_match() {
        assert_eq!(recognize("-*-"), MatchResult::None);
    }
}
