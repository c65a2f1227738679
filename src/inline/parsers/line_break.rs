//! Hard and soft line breaks (CommonMark 6.8), grounded on
//! `grammar/inlines/cm_line_breaks.rs`: two or more trailing spaces, or a
//! trailing backslash, before a newline is a hard break; a bare newline is
//! a soft break.

use crate::inline::{InlineParser, InlineParserState, InlineTag};

#[derive(Debug, Default)]
pub struct LineBreakParser;

impl InlineParser for LineBreakParser {
    fn name(&self) -> &'static str {
        "line_break"
    }

    fn first_chars(&self) -> &'static [u8] {
        b"\n"
    }

    fn match_inline(&self, state: &mut InlineParserState<'_, '_>) -> bool {
        if !state.cursor.rest().starts_with('\n') {
            return false;
        }
        let trailing_spaces = state.cursor.consumed().chars().rev().take_while(|&c| c == ' ').count();
        state.cursor.advance_bytes(1);
        // consume leading spaces on the following line; CommonMark does not
        // treat them as part of the inline content of either side.
        while state.cursor.current_char() == Some(' ') {
            state.cursor.advance_bytes(1);
        }
        if trailing_spaces >= 2 {
            state.emit_leaf(InlineTag::HardBreak);
        } else {
            state.emit_leaf(InlineTag::SoftBreak);
        }
        true
    }
}
