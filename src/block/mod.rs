//! Block tree: the document as an arena of [`Block`] nodes reached only
//! through integer [`BlockId`]s. Parent links are a relation, not ownership,
//! which keeps the tree acyclic by construction and makes the "mark all
//! ancestors open on lazy continuation" walk (§4.3.2) a plain index climb.

mod arena;
mod parser;
pub mod parsers;
mod state;

pub use arena::{Block, BlockArena, BlockData, BlockId, BlockTag};
pub use parser::{BlockParser, MatchResult, NewBlock};
pub use state::BlockParserState;

use crate::line_group::LineGroup;

impl BlockArena {
    /// Append a raw line to a leaf's [`LineGroup`], stamping it with `line_index`.
    pub fn append_line(&mut self, id: BlockId, line_index: usize, text: &str) {
        match &mut self.get_mut(id).data {
            BlockData::Leaf { lines, .. } => lines.push(line_index, text),
            BlockData::Container { .. } => {
                debug_assert!(false, "append_line called on a container block");
            }
        }
    }

    pub fn line_group(&self, id: BlockId) -> Option<&LineGroup> {
        match &self.get(id).data {
            BlockData::Leaf { lines, .. } => Some(lines),
            BlockData::Container { .. } => None,
        }
    }
}
