//! [`LineGroup`]: the append-only sequence of source lines owned by a leaf block.

/// One raw source line captured for a leaf, with the 0-based document line index
/// it came from (used for source-mapping, not for continuation decisions).
#[derive(Debug, Clone)]
pub struct GroupLine {
    pub line_index: usize,
    pub text: String,
}

/// An append-only sequence of lines owned by a leaf block.
///
/// During phase two the inline scanner walks this group with its own
/// rewindable cursor, advancing across line boundaries as a single logical
/// stream of characters (soft/hard breaks are recognized at the join points).
#[derive(Debug, Clone, Default)]
pub struct LineGroup {
    lines: Vec<GroupLine>,
}

impl LineGroup {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn push(&mut self, line_index: usize, text: impl Into<String>) {
        self.lines.push(GroupLine {
            line_index,
            text: text.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[GroupLine] {
        &self.lines
    }

    /// The group's lines joined with `\n`, the text inline parsers scan over.
    pub fn joined(&self) -> String {
        let mut buf = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                buf.push('\n');
            }
            buf.push_str(&line.text);
        }
        buf
    }

    /// A fresh cursor over this group's joined text, for inline parsing.
    pub fn cursor(&self) -> GroupCursor<'_> {
        GroupCursor::new(self)
    }
}

/// A rewindable cursor over a [`LineGroup`]'s joined text.
///
/// Kept separate from [`LineCursor`] because it owns the joined buffer (a
/// `LineCursor` only ever borrows a single line), but exposes the same
/// save/restore/advance contract inline parsers rely on.
pub struct GroupCursor<'a> {
    group: &'a LineGroup,
    joined: String,
    inner: usize,
    saved: Vec<usize>,
}

impl<'a> GroupCursor<'a> {
    fn new(group: &'a LineGroup) -> Self {
        let joined = group.joined();
        Self {
            group,
            joined,
            inner: 0,
            saved: Vec::new(),
        }
    }

    pub fn group(&self) -> &'a LineGroup {
        self.group
    }

    pub fn rest(&self) -> &str {
        &self.joined[self.inner..]
    }

    /// Everything already consumed, for look-behind checks (flanking rules).
    pub fn consumed(&self) -> &str {
        &self.joined[..self.inner]
    }

    pub fn prev_char(&self) -> Option<char> {
        self.consumed().chars().next_back()
    }

    pub fn is_eof(&self) -> bool {
        self.inner >= self.joined.len()
    }

    pub fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn byte_offset(&self) -> usize {
        self.inner
    }

    pub fn advance_bytes(&mut self, n: usize) {
        self.inner += n;
    }

    pub fn advance_char(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.inner += c.len_utf8();
        Some(c)
    }

    pub fn save(&mut self) {
        self.saved.push(self.inner);
    }

    pub fn restore(&mut self) {
        self.inner = self
            .saved
            .pop()
            .expect("GroupCursor::restore called with no matching save");
    }

    pub fn commit(&mut self) {
        self.saved.pop();
    }

    /// As used by `LineCursor`: cheap position to seek back to later.
    pub fn mark(&self) -> usize {
        self.inner
    }

    pub fn seek(&mut self, mark: usize) {
        self.inner = mark;
    }
}
