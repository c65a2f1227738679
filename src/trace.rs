//! Optional line-oriented trace sink. Absent by default; zero overhead when
//! no sink is installed (the engine checks an `Option` rather than calling
//! through a boxed trait object unconditionally).

/// A single trace event emitted by the driver while processing one line.
#[derive(Debug, Clone)]
pub enum TraceEvent<'a> {
    /// A block parser's `Match` result during the continuation phase.
    Continuation {
        line_index: usize,
        parser: &'a str,
        result: &'a str,
    },
    /// A block parser's `Match` result during the new-blocks phase.
    NewBlock {
        line_index: usize,
        parser: &'a str,
        result: &'a str,
    },
    /// Lazy paragraph continuation reopened the stack.
    LazyContinuation { line_index: usize },
    /// A block was closed (popped off the open-block stack).
    BlockClosed { line_index: usize, kind: &'a str },
}

/// Implemented by callers that want a trace of the block-phase driver.
pub trait TraceSink {
    fn on_event(&self, event: TraceEvent<'_>);
}

/// A sink that forwards events to the `log` crate at `trace` level.
pub struct LogTraceSink;

impl TraceSink for LogTraceSink {
    fn on_event(&self, event: TraceEvent<'_>) {
        log::trace!("{event:?}");
    }
}
