//! `ParserState` (inline): the mutable context threaded through every
//! `InlineParser::match_inline` call (§4.2).

use super::arena::{InlineArena, InlineId};
use crate::line_group::GroupCursor;

/// `'a` bounds this call's borrows; `'b` is the lifetime of the `LineGroup`
/// the cursor reads from. Kept distinct for the same reason as
/// `BlockParserState`: `scan_leaf`'s loop takes a fresh `&'a mut` reborrow of
/// the same `GroupCursor` on every dispatch attempt, which a self-referential
/// `&'a mut GroupCursor<'a>` would make impossible after the first one.
pub struct InlineParserState<'a, 'b> {
    pub arena: &'a mut InlineArena,
    pub cursor: &'a mut GroupCursor<'b>,
    /// The container new leaves are appended to. Always the leaf's root for
    /// the syntax this engine supports (§1 Non-goals: no link/image nesting).
    pub insertion_point: InlineId,
}

impl<'a, 'b> InlineParserState<'a, 'b> {
    pub fn new(arena: &'a mut InlineArena, cursor: &'a mut GroupCursor<'b>, insertion_point: InlineId) -> Self {
        Self { arena, cursor, insertion_point }
    }

    /// Append a finished leaf node as the next child of the current
    /// insertion point.
    pub fn emit_leaf(&mut self, tag: super::arena::InlineTag) -> InlineId {
        self.arena.push_leaf(tag, self.insertion_point)
    }
}
