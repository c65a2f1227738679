//! Indented code blocks (4+ space indent), grounded on
//! `grammar/blocks/cm_indented_code_block.rs`. Cannot interrupt a paragraph
//! (CommonMark 4.4): an indented line under an open paragraph is lazy
//! continuation text, not a new code block.

use crate::block::{BlockParser, BlockParserState, BlockTag, MatchResult, NewBlock};

#[derive(Debug, Default)]
pub struct IndentedCodeParser;

impl BlockParser for IndentedCodeParser {
    fn name(&self) -> &'static str {
        "indented_code"
    }

    fn can_interrupt_paragraph(&self) -> bool {
        false
    }

    fn match_line(&self, state: &mut BlockParserState<'_, '_>) -> MatchResult {
        let cursor = &mut *state.cursor;
        match state.pending_block {
            Some(_) => {
                // Continuation: need 4+ columns of indent, or the line is blank
                // (blank lines are allowed inside an indented code block).
                if cursor.is_blank_rest() {
                    return MatchResult::Continue;
                }
                if indent_columns(cursor.rest()) >= 4 {
                    cursor.advance_bytes(strip_indent_bytes(cursor.rest(), 4));
                    MatchResult::Continue
                } else {
                    MatchResult::None
                }
            }
            None => {
                if indent_columns(cursor.rest()) < 4 {
                    return MatchResult::None;
                }
                cursor.advance_bytes(strip_indent_bytes(cursor.rest(), 4));
                state.push_new_block(NewBlock::leaf(BlockTag::IndentedCode));
                MatchResult::Continue
            }
        }
    }
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

/// Byte length of the prefix that expands to exactly `target` columns (or
/// less, if the prefix runs out of indentation characters first).
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
