//! ATX headings (`#` .. `######`), grounded on `grammar/blocks/cm_heading.rs`.
//! Single-line leaf; its text is appended as-is (with the closing-hash run
//! and surrounding space already stripped) for phase two to scan.

use crate::block::{BlockParser, BlockParserState, BlockTag, MatchResult, NewBlock};

#[derive(Debug, Default)]
pub struct AtxHeadingParser;

impl BlockParser for AtxHeadingParser {
    fn name(&self) -> &'static str {
        "atx_heading"
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
        let after_indent = &cursor.rest()[leading..];
        let level = after_indent.chars().take_while(|&c| c == '#').count();
        if level == 0 || level > 6 {
            return MatchResult::None;
        }
        let after_hashes = &after_indent[level..];
        let valid_separator = matches!(after_hashes.chars().next(), None | Some(' ') | Some('\t'));
        if !valid_separator {
            return MatchResult::None;
        }
        let content = after_hashes.trim_start_matches([' ', '\t']);
        let content = strip_closing_hashes(content);

        let line_len = cursor.rest().len();
        cursor.advance_bytes(line_len);

        state.push_new_block(NewBlock::leaf_with_content(
            BlockTag::AtxHeading { level: level as u8 },
            content,
        ));
        MatchResult::Last
    }
}

/// Strip a trailing ` ###` closing run, if present (a space followed by
/// only `#`s and trailing spaces at the very end of the content).
fn strip_closing_hashes(content: &str) -> &str {
    let trimmed = content.trim_end();
    if let Some(hash_pos) = trimmed.rfind(|c: char| c != '#' && c != ' ') {
        let after = &trimmed[hash_pos + 1..];
        if after.chars().all(|c| c == ' ' || c == '#') && after.contains('#') {
            return trimmed[..=hash_pos].trim_end();
        }
        trimmed
    } else if trimmed.chars().all(|c| c == '#' || c == ' ') {
        ""
    } else {
        trimmed
    }
}
