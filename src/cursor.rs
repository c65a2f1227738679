//! Rewindable position over a single logical line.
//!
//! Per CommonMark, tabs expand to the next 4-column stop; `column()` reports
//! that expanded column while `byte_offset()` always tracks raw UTF-8 bytes.

/// A snapshot of a [`LineCursor`]'s position, cheap to copy and restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorMark {
    byte_offset: usize,
    column: usize,
}

/// An in-memory, rewindable position over the current logical line.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    line: &'a str,
    byte_offset: usize,
    column: usize,
    saved: Vec<CursorMark>,
}

impl<'a> LineCursor<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            byte_offset: 0,
            column: 0,
            saved: Vec::new(),
        }
    }

    pub fn line(&self) -> &'a str {
        self.line
    }

    /// The remainder of the line from the current position onward.
    pub fn rest(&self) -> &'a str {
        &self.line[self.byte_offset..]
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_eol(&self) -> bool {
        self.byte_offset >= self.line.len()
    }

    pub fn is_blank_rest(&self) -> bool {
        self.rest().chars().all(|c| c == ' ' || c == '\t')
    }

    pub fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance past `n` bytes of the current line, expanding tab stops as we go.
    pub fn advance_bytes(&mut self, n: usize) {
        let end = self.byte_offset + n;
        debug_assert!(end <= self.line.len());
        for ch in self.line[self.byte_offset..end].chars() {
            match ch {
                '\t' => self.column += 4 - (self.column % 4),
                _ => self.column += 1,
            }
        }
        self.byte_offset = end;
    }

    /// Advance past a single character, returning it.
    pub fn advance_char(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.advance_bytes(c.len_utf8());
        Some(c)
    }

    /// Push the current position onto the save stack.
    pub fn save(&mut self) {
        self.saved.push(CursorMark {
            byte_offset: self.byte_offset,
            column: self.column,
        });
    }

    /// Pop the most recently saved position and restore it.
    pub fn restore(&mut self) {
        let mark = self
            .saved
            .pop()
            .expect("LineCursor::restore called with no matching save");
        self.byte_offset = mark.byte_offset;
        self.column = mark.column;
    }

    /// Pop the most recently saved position without restoring it (commit the advance).
    pub fn commit(&mut self) {
        self.saved.pop();
    }

    pub fn mark(&self) -> CursorMark {
        CursorMark {
            byte_offset: self.byte_offset,
            column: self.column,
        }
    }

    pub fn seek(&mut self, mark: CursorMark) {
        self.byte_offset = mark.byte_offset;
        self.column = mark.column;
    }
}
