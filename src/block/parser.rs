//! The `BlockParser` plug-in interface (§4.1).

use super::arena::BlockTag;
use super::state::BlockParserState;

/// The outcome of a single [`BlockParser::match_line`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// Not recognized; the cursor must be restorable to its entry position.
    None,
    /// Recognized, wishes to remain open; the line may still be passed on.
    Continue,
    /// Like `Continue`, but the remaining line is consumed.
    ContinueDiscard,
    /// Recognized, but closes itself after this line; the line may still be appended.
    Last,
    /// `Last` plus discard the remaining line.
    LastDiscard,
    /// Pending-continuation phase only: this block makes no claim on the
    /// line and yields to the next stack level without closing.
    Skip,
}

impl MatchResult {
    pub fn keeps_open(self) -> bool {
        matches!(self, MatchResult::Continue | MatchResult::ContinueDiscard)
    }

    pub fn discards_rest(self) -> bool {
        matches!(self, MatchResult::ContinueDiscard | MatchResult::LastDiscard)
    }

    pub fn is_recognized(self) -> bool {
        !matches!(self, MatchResult::None)
    }
}

/// A block the parser wants staged for attachment (§4.3.3). Staged blocks
/// are materialized into the arena by the engine, not by the parser itself.
#[derive(Debug, Clone)]
pub struct NewBlock {
    pub tag: BlockTag,
    pub is_leaf: bool,
    /// Leaf-only: suppress phase two for this block.
    pub no_inline: bool,
    /// Leaf-only: text to seed the leaf's `LineGroup` with instead of the
    /// cursor's remaining text — for syntaxes (ATX headings, fenced-code
    /// info strings) whose recognized content isn't simply "whatever was
    /// left after the marker".
    pub initial_content: Option<String>,
}

impl NewBlock {
    pub fn container(tag: BlockTag) -> Self {
        Self { tag, is_leaf: false, no_inline: false, initial_content: None }
    }

    pub fn leaf(tag: BlockTag) -> Self {
        Self { tag, is_leaf: true, no_inline: false, initial_content: None }
    }

    pub fn leaf_no_inline(tag: BlockTag) -> Self {
        Self { tag, is_leaf: true, no_inline: true, initial_content: None }
    }

    pub fn leaf_with_content(tag: BlockTag, content: impl Into<String>) -> Self {
        Self { tag, is_leaf: true, no_inline: false, initial_content: Some(content.into()) }
    }

    pub fn leaf_no_inline_with_content(tag: BlockTag, content: impl Into<String>) -> Self {
        Self { tag, is_leaf: true, no_inline: true, initial_content: Some(content.into()) }
    }
}

/// A pluggable recognizer for one block-level syntax.
///
/// Implementations must be able to run `match_line` against the cursor's
/// entry position and, on `None`, leave the cursor exactly where it found
/// it — the driver relies on this to try the next candidate.
pub trait BlockParser: Send + Sync + std::fmt::Debug {
    /// Stable identifier used in traces and invariant-violation reports.
    fn name(&self) -> &'static str;

    /// Whether this parser may interrupt an open paragraph in the new-blocks
    /// phase (§4.3.2). Ignored during the continuation phase.
    fn can_interrupt_paragraph(&self) -> bool;

    /// True only for the paragraph parser itself. The new-blocks phase never
    /// skips it under the `can_interrupt_paragraph` rule — it is what
    /// performs the lazy-continuation merge onto an already-open paragraph.
    fn is_paragraph(&self) -> bool {
        false
    }

    fn match_line(&self, state: &mut BlockParserState<'_, '_>) -> MatchResult;
}
