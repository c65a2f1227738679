//! Autolinks (`<url>` / `<email>`), grounded on
//! `grammar/inlines/cm_autolink.rs`.

use crate::inline::{InlineParser, InlineParserState, InlineTag};

#[derive(Debug, Default)]
pub struct AutolinkParser;

impl InlineParser for AutolinkParser {
    fn name(&self) -> &'static str {
        "autolink"
    }

    fn first_chars(&self) -> &'static [u8] {
        b"<"
    }

    fn match_inline(&self, state: &mut InlineParserState<'_, '_>) -> bool {
        let rest = state.cursor.rest();
        if !rest.starts_with('<') {
            return false;
        }
        let body = &rest[1..];
        let Some(end) = body.find('>') else { return false };
        let url = &body[..end];
        if url.is_empty() || url.chars().any(|c| c.is_whitespace() || c == '<') {
            return false;
        }
        let is_email = url.contains('@') && !url.contains("://");
        state.cursor.advance_bytes(1 + end + 1);
        state.emit_leaf(InlineTag::Autolink { url: url.to_string(), is_email });
        true
    }
}
