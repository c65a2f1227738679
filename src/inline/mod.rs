//! Inline tree: produced by phase two, one arena per leaf (kept disjoint so
//! leaves can be processed in parallel, §5).

mod arena;
mod dispatch;
pub mod emphasis;
mod parser;
pub mod parsers;
mod state;

pub use arena::{DelimiterInfo, Inline, InlineArena, InlineData, InlineId, InlineTag};
pub use dispatch::Dispatch;
pub use parser::InlineParser;
pub use state::InlineParserState;
