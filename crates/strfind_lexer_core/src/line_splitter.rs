//! Lazy splitting of a buffer into non-empty lines.
//!
//! `\n` is the only recognized terminator. A buffer using `\r\n` is split on
//! the `\n` and the `\r` stays at the end of each line's text.

/// A non-empty line of the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineRecord<'src> {
    /// 0-based logical line number, counting blank lines.
    pub index: usize,
    /// Byte offset of the first character of the line in the buffer.
    pub offset: usize,
    /// Line content without the terminator. Never empty.
    pub text: &'src str,
}

/// Walks a buffer line by line, skipping blank lines.
///
/// Blank lines are consumed silently but still advance the logical line
/// counter, so the `index` of every returned [`LineRecord`] is its real
/// 0-based line number in the buffer.
#[derive(Clone, Debug)]
pub struct LineSplitter<'src> {
    text: &'src str,
    /// Byte offset just past the previous line's terminator.
    pos: usize,
    /// Number of lines consumed so far, blank or not.
    lines_seen: usize,
}

impl<'src> LineSplitter<'src> {
    pub fn new(text: &'src str) -> Self {
        Self {
            text,
            pos: 0,
            lines_seen: 0,
        }
    }

    /// Returns the next non-empty line, or `None` once the buffer is exhausted.
    ///
    /// `None` is terminal: every later call also returns `None`.
    pub fn advance(&mut self) -> Option<LineRecord<'src>> {
        let bytes = self.text.as_bytes();
        loop {
            let start = self.pos;
            if start >= bytes.len() {
                return None;
            }
            let end = memchr::memchr(b'\n', &bytes[start..]).map_or(bytes.len(), |i| start + i);
            self.pos = end + 1;

            let index = self.lines_seen;
            self.lines_seen += 1;

            if end > start {
                return Some(LineRecord {
                    index,
                    offset: start,
                    text: &self.text[start..end],
                });
            }
        }
    }

    /// Number of lines consumed so far, including skipped blank lines.
    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }
}

impl<'src> Iterator for LineSplitter<'src> {
    type Item = LineRecord<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}

impl std::iter::FusedIterator for LineSplitter<'_> {}
