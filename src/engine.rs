//! The two-phase driver (§4.3, §4.4): `Engine` owns the ordered block- and
//! inline-parser lists, the inline dispatch table, and runs both phases.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::block::{Block, BlockArena, BlockData, BlockId, BlockParser, BlockTag, MatchResult, NewBlock};
use crate::cursor::LineCursor;
use crate::error::{ConfigError, EngineInvariantViolation};
use crate::inline::{Dispatch, InlineArena, InlineParser, InlineParserState};
use crate::line_group::LineGroup;
use crate::pool::StringPool;
use crate::reader::LineReader;
use crate::trace::{TraceEvent, TraceSink};

/// The parsed output: the block tree plus one inline tree per leaf that
/// opted into phase two.
pub struct Document {
    pub blocks: BlockArena,
    inlines: HashMap<BlockId, InlineArena>,
}

impl Document {
    pub fn inline_tree(&self, leaf: BlockId) -> Option<&InlineArena> {
        self.inlines.get(&leaf)
    }
}

pub struct Engine {
    block_parsers: Vec<Box<dyn BlockParser>>,
    inline_parsers: Vec<Box<dyn InlineParser>>,
    dispatch: Dispatch,
    pool: StringPool,
    trace: Option<Box<dyn TraceSink>>,
}

#[derive(Default)]
pub struct EngineBuilder {
    block_parsers: Vec<Box<dyn BlockParser>>,
    inline_parsers: Vec<Box<dyn InlineParser>>,
    trace: Option<Box<dyn TraceSink>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block_parser(mut self, parser: Box<dyn BlockParser>) -> Self {
        self.block_parsers.push(parser);
        self
    }

    pub fn with_inline_parser(mut self, parser: Box<dyn InlineParser>) -> Self {
        self.inline_parsers.push(parser);
        self
    }

    pub fn with_trace_sink(mut self, sink: Box<dyn TraceSink>) -> Self {
        self.trace = Some(sink);
        self
    }

    pub fn build(self) -> Result<Engine, ConfigError> {
        let dispatch = Dispatch::build(&self.inline_parsers)?;
        Ok(Engine {
            block_parsers: self.block_parsers,
            inline_parsers: self.inline_parsers,
            dispatch,
            pool: StringPool::new(),
            trace: self.trace,
        })
    }
}

enum Stop {
    NoneAt(usize),
    ReachedParagraph,
    LeafConsumed,
    DiscardConsumed,
    Exhausted,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn parse(&self, reader: &mut dyn LineReader) -> Result<Document, EngineInvariantViolation> {
        let mut arena = BlockArena::new();
        arena.new_document();
        let mut stack: Vec<BlockId> = vec![0];
        let mut line_index = 0usize;

        while let Some(raw_line) = reader.next_line() {
            self.process_line(&mut arena, &mut stack, line_index, &raw_line)?;
            line_index += 1;
        }
        self.close_remaining(&mut arena, &mut stack, line_index);

        let inlines = self.run_inline_phase(&arena);
        Ok(Document { blocks: arena, inlines })
    }

    fn process_line(
        &self,
        arena: &mut BlockArena,
        stack: &mut Vec<BlockId>,
        line_index: usize,
        raw_line: &str,
    ) -> Result<(), EngineInvariantViolation> {
        for &id in &stack[1..] {
            arena.get_mut(id).is_open = false;
        }

        let mut cursor = LineCursor::new(raw_line);
        let stop = self.run_continuation_phase(arena, stack, &mut cursor, line_index)?;

        match stop {
            Stop::NoneAt(i) => {
                let mut from = i;
                if from > 0 {
                    if let BlockTag::ListItem { .. } = arena.get(stack[from]).tag {
                        if let BlockTag::List { .. } = arena.get(stack[from - 1]).tag {
                            from -= 1;
                        }
                    }
                }
                for &id in &stack[from..] {
                    arena.get_mut(id).is_open = false;
                }
            }
            Stop::ReachedParagraph | Stop::Exhausted | Stop::LeafConsumed | Stop::DiscardConsumed => {}
        }

        let mut continue_line = matches!(
            stop,
            Stop::NoneAt(_) | Stop::ReachedParagraph | Stop::Exhausted
        );

        if continue_line {
            self.run_new_blocks_phase(arena, stack, &mut cursor, line_index, &mut continue_line)?;
        }

        self.close_stale_from_top(arena, stack, line_index);
        Ok(())
    }

    fn run_continuation_phase(
        &self,
        arena: &mut BlockArena,
        stack: &mut Vec<BlockId>,
        cursor: &mut LineCursor<'_>,
        line_index: usize,
    ) -> Result<Stop, EngineInvariantViolation> {
        let mut i = 1;
        loop {
            if i >= stack.len() {
                return Ok(Stop::Exhausted);
            }
            let block_id = stack[i];
            if matches!(arena.get(block_id).tag, BlockTag::Paragraph) {
                return Ok(Stop::ReachedParagraph);
            }
            let parser_idx = arena
                .get(block_id)
                .parser_index
                .expect("non-Document block must have a creating parser");
            let parser = &self.block_parsers[parser_idx];

            cursor.save();
            let mut staged = Vec::new();
            let result = {
                let mut state =
                    BlockParserStateBuilder::continuation(arena, cursor, line_index, block_id, &mut staged, &self.pool);
                parser.match_line(&mut state)
            };
            self.emit(TraceEvent::Continuation { line_index, parser: parser.name(), result: result_name(result) });

            match result {
                MatchResult::Skip => {
                    cursor.commit();
                    i += 1;
                    continue;
                }
                MatchResult::None => {
                    cursor.restore();
                    return Ok(Stop::NoneAt(i));
                }
                other => {
                    cursor.commit();
                    let is_leaf = arena.get(block_id).is_leaf();
                    if is_leaf {
                        if !staged.is_empty() {
                            return Err(EngineInvariantViolation::new(
                                "a leaf block's continuation match staged further blocks",
                                line_index,
                                parser.name(),
                            ));
                        }
                        if !other.discards_rest() {
                            let rest = cursor.rest().to_string();
                            arena.append_line(block_id, line_index, &rest);
                        }
                        cursor.advance_bytes(cursor.rest().len());
                        arena.get_mut(block_id).is_open = other.keeps_open();
                        return Ok(Stop::LeafConsumed);
                    }

                    arena.get_mut(block_id).is_open = other.keeps_open();
                    if !staged.is_empty() {
                        if i + 1 != stack.len() {
                            return Err(EngineInvariantViolation::new(
                                "a pending parser produced a new block while not the deepest on the open-block stack",
                                line_index,
                                parser.name(),
                            ));
                        }
                        let remaining = cursor.rest().to_string();
                        self.attach_staged(arena, stack, line_index, staged, parser_idx, other.keeps_open(), false, &remaining);
                    }
                    if other.discards_rest() {
                        cursor.advance_bytes(cursor.rest().len());
                        return Ok(Stop::DiscardConsumed);
                    }
                    i += 1;
                }
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn run_new_blocks_phase(
        &self,
        arena: &mut BlockArena,
        stack: &mut Vec<BlockId>,
        cursor: &mut LineCursor<'_>,
        line_index: usize,
        continue_line: &mut bool,
    ) -> Result<(), EngineInvariantViolation> {
        loop {
            if cursor.is_eol() {
                return Ok(());
            }
            let top_is_paragraph = matches!(arena.get(*stack.last().unwrap()).tag, BlockTag::Paragraph);
            let mut matched = false;

            for (idx, parser) in self.block_parsers.iter().enumerate() {
                if top_is_paragraph && !parser.can_interrupt_paragraph() && !parser.is_paragraph() {
                    continue;
                }

                cursor.save();
                let mut staged = Vec::new();
                let current_container = self.deepest_open_container(arena, stack);
                let result = {
                    let mut state = BlockParserStateBuilder::new_blocks(
                        arena,
                        cursor,
                        line_index,
                        current_container,
                        &mut staged,
                        &self.pool,
                    );
                    parser.match_line(&mut state)
                };
                self.emit(TraceEvent::NewBlock { line_index, parser: parser.name(), result: result_name(result) });

                match result {
                    MatchResult::None => {
                        cursor.restore();
                        if parser.is_paragraph() && cursor.is_blank_rest() {
                            *continue_line = false;
                            matched = true;
                            break;
                        }
                        continue;
                    }
                    MatchResult::LastDiscard if staged.is_empty() => {
                        cursor.commit();
                        cursor.advance_bytes(cursor.rest().len());
                        *continue_line = false;
                        matched = true;
                        break;
                    }
                    other => {
                        cursor.commit();
                        if parser.is_paragraph() && top_is_paragraph {
                            let top = *stack.last().unwrap();
                            // Whatever the cursor has left at this point: the whole
                            // line for true lazy continuation (no ancestor matched),
                            // or the remainder after an ancestor (e.g. a blockquote
                            // marker) already consumed its prefix during the
                            // continuation phase — never the raw, unconsumed line.
                            let remaining = cursor.rest().to_string();
                            arena.append_line(top, line_index, &remaining);
                            cursor.advance_bytes(cursor.rest().len());
                            for &id in stack.iter() {
                                arena.get_mut(id).is_open = true;
                            }
                            self.emit(TraceEvent::LazyContinuation { line_index });
                            *continue_line = false;
                            matched = true;
                            break;
                        }

                        if !staged.is_empty() && !matches!(staged.last(), Some(nb) if nb.is_leaf) && staged.iter().rev().skip(1).any(|nb| nb.is_leaf) {
                            return Err(EngineInvariantViolation::new(
                                "a leaf-producing parser staged further blocks after the leaf",
                                line_index,
                                parser.name(),
                            ));
                        }

                        let discard = other.discards_rest();
                        let remaining = cursor.rest().to_string();
                        let leaf_at_top = self.attach_staged(
                            arena,
                            stack,
                            line_index,
                            staged,
                            idx,
                            other.keeps_open(),
                            discard,
                            &remaining,
                        );
                        if discard {
                            cursor.advance_bytes(cursor.rest().len());
                        }
                        if leaf_at_top {
                            *continue_line = false;
                        }
                        matched = true;
                        break;
                    }
                }
            }

            if !matched || !*continue_line {
                return Ok(());
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn attach_staged(
        &self,
        arena: &mut BlockArena,
        stack: &mut Vec<BlockId>,
        line_index: usize,
        staged: Vec<NewBlock>,
        creator_idx: usize,
        keeps_open: bool,
        discard_rest: bool,
        remaining: &str,
    ) -> bool {
        let mut leaf_at_top = false;
        for nb in staged {
            let parent = self.deepest_open_container(arena, stack);
            let data = if nb.is_leaf {
                BlockData::Leaf { lines: LineGroup::new(), no_inline: nb.no_inline, inline_root: None }
            } else {
                BlockData::Container { children: Vec::new() }
            };
            let id = arena.insert(Block {
                tag: nb.tag,
                parser_index: Some(creator_idx),
                parent: Some(parent),
                is_open: keeps_open,
                start_line: line_index,
                data,
            });
            arena.attach_child(parent, id);
            if nb.is_leaf {
                if let Some(content) = nb.initial_content {
                    arena.append_line(id, line_index, &content);
                } else if !discard_rest {
                    arena.append_line(id, line_index, remaining);
                }
            }
            stack.push(id);
            if nb.is_leaf {
                leaf_at_top = true;
                break;
            }
        }
        leaf_at_top
    }

    /// The nearest stack entry (from the top down) that is both a container
    /// and currently open — skipping leaves (which never hold children) and
    /// any stale entries a `None` continuation result has already marked
    /// closed but not yet popped.
    fn deepest_open_container(&self, arena: &BlockArena, stack: &[BlockId]) -> BlockId {
        for &id in stack.iter().rev() {
            let b = arena.get(id);
            if !b.is_leaf() && b.is_open {
                return id;
            }
        }
        0
    }

    fn close_stale_from_top(&self, arena: &mut BlockArena, stack: &mut Vec<BlockId>, line_index: usize) {
        while stack.len() > 1 {
            let top = *stack.last().unwrap();
            if arena.get(top).is_open {
                break;
            }
            stack.pop();
            self.emit(TraceEvent::BlockClosed { line_index, kind: arena.get(top).tag.name() });
        }
    }

    fn close_remaining(&self, arena: &mut BlockArena, stack: &mut Vec<BlockId>, line_index: usize) {
        while stack.len() > 1 {
            let top = stack.pop().unwrap();
            arena.get_mut(top).is_open = false;
            self.emit(TraceEvent::BlockClosed { line_index, kind: arena.get(top).tag.name() });
        }
    }

    fn emit(&self, event: TraceEvent<'_>) {
        if let Some(sink) = &self.trace {
            sink.on_event(event);
        }
    }

    fn run_inline_phase(&self, arena: &BlockArena) -> HashMap<BlockId, InlineArena> {
        let leaves = arena.leaves_in_order();
        let results: Vec<(BlockId, InlineArena)> = leaves
            .into_par_iter()
            .filter_map(|id| {
                let group = arena.line_group(id)?;
                if let BlockData::Leaf { no_inline: true, .. } = arena.get(id).data {
                    return None;
                }
                if group.is_empty() {
                    return None;
                }
                Some((id, self.scan_leaf(group)))
            })
            .collect();
        results.into_iter().collect()
    }

    fn scan_leaf(&self, group: &LineGroup) -> InlineArena {
        let mut arena = InlineArena::new();
        let root = arena.root();
        let mut cursor = group.cursor();

        'scan: while !cursor.is_eof() {
            let byte = cursor.rest().as_bytes()[0];
            for &idx in self.dispatch.candidates(byte).iter() {
                cursor.save();
                let matched = {
                    let mut state = InlineParserState::new(&mut arena, &mut cursor, root);
                    self.inline_parsers[idx].match_inline(&mut state)
                };
                if matched {
                    cursor.commit();
                    continue 'scan;
                }
                cursor.restore();
            }
            // No registered parser matched; advance one character as a
            // literal so the scan always makes progress.
            if let Some(c) = cursor.current_char() {
                let start = cursor.byte_offset();
                cursor.advance_char();
                let text = group.joined()[start..cursor.byte_offset()].to_string();
                arena.push_leaf(crate::inline::InlineTag::Text(text), root);
            }
        }

        crate::inline::emphasis::resolve_leaf(&mut arena, root);
        arena
    }
}

fn result_name(result: MatchResult) -> &'static str {
    match result {
        MatchResult::None => "None",
        MatchResult::Continue => "Continue",
        MatchResult::ContinueDiscard => "ContinueDiscard",
        MatchResult::Last => "Last",
        MatchResult::LastDiscard => "LastDiscard",
        MatchResult::Skip => "Skip",
    }
}

/// Thin constructors kept separate from `BlockParserState` itself so the
/// continuation-phase and new-blocks-phase call sites read clearly at
/// their use.
struct BlockParserStateBuilder;

impl BlockParserStateBuilder {
    fn continuation<'a, 'b>(
        arena: &'a mut BlockArena,
        cursor: &'a mut LineCursor<'b>,
        line_index: usize,
        pending_block: BlockId,
        staged: &'a mut Vec<NewBlock>,
        pool: &'a StringPool,
    ) -> crate::block::BlockParserState<'a, 'b> {
        crate::block::BlockParserState::new(arena, cursor, line_index, Some(pending_block), pending_block, staged, pool)
    }

    fn new_blocks<'a, 'b>(
        arena: &'a mut BlockArena,
        cursor: &'a mut LineCursor<'b>,
        line_index: usize,
        current_container: BlockId,
        staged: &'a mut Vec<NewBlock>,
        pool: &'a StringPool,
    ) -> crate::block::BlockParserState<'a, 'b> {
        crate::block::BlockParserState::new(arena, cursor, line_index, None, current_container, staged, pool)
    }
}
