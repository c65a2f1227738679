//! The block arena and node representation (§3 Data model).

use crate::inline::InlineId;
use crate::line_group::LineGroup;

pub type BlockId = usize;

/// The concrete syntactic kind of a block. Structural shape (container vs.
/// leaf) lives in [`BlockData`]; `BlockTag` only carries the per-syntax
/// payload a renderer or test would want to inspect.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockTag {
    Document,
    Paragraph,
    AtxHeading { level: u8 },
    ThematicBreak,
    FencedCode { info: Option<String>, fence_char: char, fence_len: usize },
    IndentedCode,
    BlockQuote,
    List { ordered: bool, start: Option<u64>, tight: bool },
    /// `marker_width` is the column width of the marker plus its trailing
    /// whitespace (e.g. `"- "` = 2, `"10. "` = 4) — continuation lines must
    /// be indented at least that far.
    ListItem { marker_width: usize },
}

impl BlockTag {
    pub fn name(&self) -> &'static str {
        match self {
            BlockTag::Document => "Document",
            BlockTag::Paragraph => "Paragraph",
            BlockTag::AtxHeading { .. } => "AtxHeading",
            BlockTag::ThematicBreak => "ThematicBreak",
            BlockTag::FencedCode { .. } => "FencedCode",
            BlockTag::IndentedCode => "IndentedCode",
            BlockTag::BlockQuote => "BlockQuote",
            BlockTag::List { .. } => "List",
            BlockTag::ListItem { .. } => "ListItem",
        }
    }
}

/// Structural payload: containers hold children, leaves own a [`LineGroup`]
/// and (after phase two) an inline tree root.
#[derive(Debug)]
pub enum BlockData {
    Container { children: Vec<BlockId> },
    Leaf {
        lines: LineGroup,
        no_inline: bool,
        inline_root: Option<InlineId>,
    },
}

impl BlockData {
    pub fn is_leaf(&self) -> bool {
        matches!(self, BlockData::Leaf { .. })
    }

    pub fn container_children(&self) -> Option<&[BlockId]> {
        match self {
            BlockData::Container { children } => Some(children),
            BlockData::Leaf { .. } => None,
        }
    }
}

#[derive(Debug)]
pub struct Block {
    pub tag: BlockTag,
    /// The index into the engine's block-parser list that owns this block.
    /// `None` only for the implicit Document root.
    pub parser_index: Option<usize>,
    pub parent: Option<BlockId>,
    pub is_open: bool,
    pub start_line: usize,
    pub data: BlockData,
}

impl Block {
    pub fn is_leaf(&self) -> bool {
        self.data.is_leaf()
    }
}

/// Owns every block ever created for one parse. Blocks are never removed,
/// only closed (`is_open = false`); the arena itself is destroyed with the
/// document.
#[derive(Debug, Default)]
pub struct BlockArena {
    blocks: Vec<Block>,
}

impl BlockArena {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Create the implicit Document root. Must be called exactly once, first.
    pub fn new_document(&mut self) -> BlockId {
        debug_assert!(self.blocks.is_empty(), "Document must be the first block");
        self.blocks.push(Block {
            tag: BlockTag::Document,
            parser_index: None,
            parent: None,
            is_open: true,
            start_line: 0,
            data: BlockData::Container { children: Vec::new() },
        });
        0
    }

    pub fn insert(&mut self, block: Block) -> BlockId {
        self.blocks.push(block);
        self.blocks.len() - 1
    }

    pub fn get(&self, id: BlockId) -> &Block {
        &self.blocks[id]
    }

    pub fn get_mut(&mut self, id: BlockId) -> &mut Block {
        &mut self.blocks[id]
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Attach `child` as the last child of `parent`. `child.parent` must
    /// already be set by the caller.
    pub fn attach_child(&mut self, parent: BlockId, child: BlockId) {
        match &mut self.get_mut(parent).data {
            BlockData::Container { children } => children.push(child),
            BlockData::Leaf { .. } => {
                debug_assert!(false, "attempted to attach a child to a leaf block");
            }
        }
    }

    /// Depth-first walk of every leaf block in document order (pre-order),
    /// the traversal phase two uses to find inline-parsing work.
    pub fn leaves_in_order(&self) -> Vec<BlockId> {
        let mut out = Vec::new();
        self.collect_leaves(0, &mut out);
        out
    }

    fn collect_leaves(&self, id: BlockId, out: &mut Vec<BlockId>) {
        match &self.get(id).data {
            BlockData::Leaf { .. } => out.push(id),
            BlockData::Container { children } => {
                for &child in children {
                    self.collect_leaves(child, out);
                }
            }
        }
    }

    /// True if `ancestor` precedes `id` on the path from the Document to `id`.
    pub fn is_ancestor(&self, ancestor: BlockId, id: BlockId) -> bool {
        let mut cur = self.get(id).parent;
        while let Some(p) = cur {
            if p == ancestor {
                return true;
            }
            cur = self.get(p).parent;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_root_is_open_container_at_index_zero() {
        let mut arena = BlockArena::new();
        let doc = arena.new_document();
        assert_eq!(doc, 0);
        assert!(arena.get(doc).is_open);
        assert!(!arena.get(doc).is_leaf());
    }

    #[test]
    fn leaves_in_order_is_document_pre_order() {
        let mut arena = BlockArena::new();
        let doc = arena.new_document();
        let p1 = arena.insert(Block {
            tag: BlockTag::Paragraph,
            parser_index: Some(0),
            parent: Some(doc),
            is_open: true,
            start_line: 0,
            data: BlockData::Leaf { lines: LineGroup::new(), no_inline: false, inline_root: None },
        });
        arena.attach_child(doc, p1);
        let bq = arena.insert(Block {
            tag: BlockTag::BlockQuote,
            parser_index: Some(1),
            parent: Some(doc),
            is_open: true,
            start_line: 1,
            data: BlockData::Container { children: Vec::new() },
        });
        arena.attach_child(doc, bq);
        let p2 = arena.insert(Block {
            tag: BlockTag::Paragraph,
            parser_index: Some(0),
            parent: Some(bq),
            is_open: true,
            start_line: 1,
            data: BlockData::Leaf { lines: LineGroup::new(), no_inline: false, inline_root: None },
        });
        arena.attach_child(bq, p2);

        assert_eq!(arena.leaves_in_order(), vec![p1, p2]);
    }
}
