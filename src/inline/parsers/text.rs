//! The fallback literal-text run. Always last in priority order; consumes
//! up to the next byte any other parser might care about.

use crate::inline::{InlineParser, InlineParserState, InlineTag};

const SPECIAL: &[u8] = b"\\`*_<\n";

#[derive(Debug, Default)]
pub struct TextParser;

impl InlineParser for TextParser {
    fn name(&self) -> &'static str {
        "text"
    }

    fn first_chars(&self) -> &'static [u8] {
        &[]
    }

    fn match_inline(&self, state: &mut InlineParserState<'_, '_>) -> bool {
        let rest = state.cursor.rest();
        if rest.is_empty() {
            return false;
        }
        let end = rest.bytes().position(|b| SPECIAL.contains(&b)).unwrap_or(rest.len());
        let end = if end == 0 { rest.char_indices().nth(1).map(|(i, _)| i).unwrap_or(rest.len()) } else { end };
        let text = rest[..end].to_string();
        state.cursor.advance_bytes(end);
        state.emit_leaf(InlineTag::Text(text));
        true
    }
}
