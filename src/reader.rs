//! The input line source (§6 External interfaces). Concrete readers are
//! out of scope for this engine; this module supplies the trait and the
//! one trivial implementation the engine needs to be usable and testable.

/// Yields one logical line per call, with line endings already stripped.
pub trait LineReader {
    /// `None` signals EOF.
    fn next_line(&mut self) -> Option<String>;
}

/// Splits a complete in-memory string into lines on `\n`, stripping a
/// trailing `\r` from each (CRLF input) and not emitting a trailing empty
/// line for a final newline.
pub struct StrLineReader<'a> {
    lines: std::str::Split<'a, char>,
}

impl<'a> StrLineReader<'a> {
    pub fn new(text: &'a str) -> Self {
        let trimmed = text.strip_suffix('\n').unwrap_or(text);
        Self { lines: trimmed.split('\n') }
    }
}

impl LineReader for StrLineReader<'_> {
    fn next_line(&mut self) -> Option<String> {
        self.lines.next().map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_newline_without_trailing_empty_line() {
        let mut reader = StrLineReader::new("a\nb\n");
        assert_eq!(reader.next_line().as_deref(), Some("a"));
        assert_eq!(reader.next_line().as_deref(), Some("b"));
        assert_eq!(reader.next_line(), None);
    }

    #[test]
    fn strips_carriage_return() {
        let mut reader = StrLineReader::new("a\r\nb\r\n");
        assert_eq!(reader.next_line().as_deref(), Some("a"));
        assert_eq!(reader.next_line().as_deref(), Some("b"));
    }

    #[test]
    fn no_trailing_newline_still_yields_last_line() {
        let mut reader = StrLineReader::new("a\nb");
        assert_eq!(reader.next_line().as_deref(), Some("a"));
        assert_eq!(reader.next_line().as_deref(), Some("b"));
        assert_eq!(reader.next_line(), None);
    }
}
