//! Backslash escapes (CommonMark 6.1), grounded on
//! `grammar/inlines/cm_backslash_escape.rs`'s ASCII-punctuation set.

use crate::inline::{InlineParser, InlineParserState, InlineTag};

const ESCAPABLE: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Default)]
pub struct BackslashEscapeParser;

impl InlineParser for BackslashEscapeParser {
    fn name(&self) -> &'static str {
        "backslash_escape"
    }

    fn first_chars(&self) -> &'static [u8] {
        b"\\"
    }

    fn match_inline(&self, state: &mut InlineParserState<'_, '_>) -> bool {
        let rest = state.cursor.rest();
        let mut chars = rest.chars();
        if chars.next() != Some('\\') {
            return false;
        }
        match chars.next() {
            Some('\n') => {
                state.cursor.advance_bytes(2);
                state.emit_leaf(InlineTag::HardBreak);
                true
            }
            Some(c) if ESCAPABLE.contains(c) => {
                state.cursor.advance_bytes(1 + c.len_utf8());
                state.emit_leaf(InlineTag::Text(c.to_string()));
                true
            }
            _ => false,
        }
    }
}
