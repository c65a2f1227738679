//! Concrete `BlockParser` implementations, one file per block syntax, each
//! grounded on the equivalent whole-document grammar in `grammar/blocks/`
//! but restructured into the per-line `match_line` contract (§4.1).

mod atx_heading;
mod blockquote;
mod fenced_code;
mod indented_code;
mod list;
mod paragraph;
mod thematic_break;

pub use atx_heading::AtxHeadingParser;
pub use blockquote::BlockQuoteParser;
pub use fenced_code::FencedCodeParser;
pub use indented_code::IndentedCodeParser;
pub use list::ListParser;
pub use paragraph::ParagraphParser;
pub use thematic_break::ThematicBreakParser;
