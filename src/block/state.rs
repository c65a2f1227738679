//! `ParserState` (block): the mutable context threaded through every
//! `BlockParser::match_line` call for one line (§2 item 3).

use super::arena::BlockArena;
use super::parser::NewBlock;
use crate::cursor::LineCursor;
use crate::pool::StringPool;

/// `'a` bounds this call's borrows (arena, staging area, cursor reference);
/// `'b` is the lifetime of the line text the cursor itself points into.
/// Keeping them distinct matters because the driver takes a fresh `&'a mut`
/// reborrow of the same long-lived cursor on every loop iteration — tying
/// the cursor reference to its own pointee's lifetime (`&'a mut LineCursor<'a>`)
/// would make that reborrow impossible after the first one.
pub struct BlockParserState<'a, 'b> {
    pub arena: &'a mut BlockArena,
    pub cursor: &'a mut LineCursor<'b>,
    pub line_index: usize,
    /// The block currently being probed for continuation, if any (continuation
    /// phase only; `None` while scanning for new blocks).
    pub pending_block: Option<super::arena::BlockId>,
    /// The container a newly staged block would attach under if this call
    /// succeeds (new-blocks phase only; meaningless during continuation).
    pub current_container: super::arena::BlockId,
    new_blocks: &'a mut Vec<NewBlock>,
    pub pool: &'a StringPool,
}

impl<'a, 'b> BlockParserState<'a, 'b> {
    pub fn new(
        arena: &'a mut BlockArena,
        cursor: &'a mut LineCursor<'b>,
        line_index: usize,
        pending_block: Option<super::arena::BlockId>,
        current_container: super::arena::BlockId,
        new_blocks: &'a mut Vec<NewBlock>,
        pool: &'a StringPool,
    ) -> Self {
        Self { arena, cursor, line_index, pending_block, current_container, new_blocks, pool }
    }

    /// Stage a newly recognized block for attachment after this call returns.
    ///
    /// Constraint (§4.1): if this call stages a leaf, it must be the last
    /// block staged — a leaf-producing parser is terminal. The engine
    /// enforces this as an `EngineInvariantViolation`.
    pub fn push_new_block(&mut self, block: NewBlock) {
        self.new_blocks.push(block);
    }

    pub fn staged(&self) -> &[NewBlock] {
        self.new_blocks
    }

    pub fn line_is_blank(&self) -> bool {
        self.cursor.is_blank_rest()
    }
}
