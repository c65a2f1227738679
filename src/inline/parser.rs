//! The `InlineParser` plug-in interface (§4.2).

use super::state::InlineParserState;

/// A pluggable recognizer for one inline-level syntax.
///
/// An implementation is tried only when the dispatch table (built once at
/// engine construction, §4.4.1) routes the cursor's current byte to it via
/// [`first_chars`](InlineParser::first_chars), or when it's in the small
/// fallback list tried for every byte that has no dedicated owner.
pub trait InlineParser: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &'static str;

    /// ASCII bytes this parser claims exclusively. Construction fails with
    /// [`crate::error::ConfigError`] if two parsers claim the same byte, or
    /// if a byte is >= 128 (multi-byte UTF-8 continuation bytes can't be
    /// dispatched on without decoding first).
    fn first_chars(&self) -> &'static [u8];

    /// Attempt a match at the cursor's current position. On success the
    /// parser has advanced `state.cursor` past what it consumed and set
    /// `state.pending` to the node it produced (or left it `None` if it
    /// mutated the tree directly, e.g. closing a pending emphasis scope).
    /// On failure the cursor must be left untouched.
    fn match_inline(&self, state: &mut InlineParserState<'_, '_>) -> bool;
}
