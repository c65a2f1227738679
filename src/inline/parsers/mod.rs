//! Concrete `InlineParser` implementations, one file per inline syntax,
//! each grounded on the equivalent grammar in `grammar/inlines/`.

mod autolink;
mod code_span;
mod delimiter_run;
mod escape;
mod line_break;
mod text;

pub use autolink::AutolinkParser;
pub use code_span::CodeSpanParser;
pub use delimiter_run::DelimiterRunParser;
pub use escape::BackslashEscapeParser;
pub use line_break::LineBreakParser;
pub use text::TextParser;
