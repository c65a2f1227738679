//! Code spans (CommonMark 6.3), grounded on `grammar/inlines/cm_code_span.rs`:
//! opening and closing backtick runs must have the same length; the first
//! run of that exact length found in the rest of the leaf's text closes it.

use crate::inline::{InlineParser, InlineParserState, InlineTag};

#[derive(Debug, Default)]
pub struct CodeSpanParser;

impl InlineParser for CodeSpanParser {
    fn name(&self) -> &'static str {
        "code_span"
    }

    fn first_chars(&self) -> &'static [u8] {
        b"`"
    }

    fn match_inline(&self, state: &mut InlineParserState<'_, '_>) -> bool {
        let rest = state.cursor.rest();
        let opening = rest.bytes().take_while(|&b| b == b'`').count();
        if opening == 0 {
            return false;
        }
        let content_str = &rest[opening..];
        let bytes = content_str.as_bytes();
        let mut pos = 0;
        while pos < bytes.len() {
            if bytes[pos] == b'`' {
                let run_start = pos;
                let mut run_len = 0;
                while pos < bytes.len() && bytes[pos] == b'`' {
                    run_len += 1;
                    pos += 1;
                }
                if run_len == opening {
                    let content = normalize(&content_str[..run_start]);
                    state.cursor.advance_bytes(opening + run_start + run_len);
                    state.emit_leaf(InlineTag::CodeSpan(content));
                    return true;
                }
            } else {
                pos += 1;
            }
        }
        false
    }
}

/// Per CommonMark 6.3: strip one leading and one trailing space if the
/// content isn't all whitespace, and collapse line endings to spaces.
fn normalize(content: &str) -> String {
    let collapsed: String = content.chars().map(|c| if c == '\n' { ' ' } else { c }).collect();
    if collapsed.chars().all(|c| c == ' ') {
        return collapsed;
    }
    let trimmed = collapsed.strip_prefix(' ').unwrap_or(&collapsed);
    let trimmed = trimmed.strip_suffix(' ').unwrap_or(trimmed);
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_space_of_padding() {
        assert_eq!(normalize(" code "), "code");
    }

    #[test]
    fn all_space_content_is_untouched() {
        assert_eq!(normalize("   "), "   ");
    }
}
