use crate::Tag;

/// One lexical unit of a buffer, positioned within its line.
///
/// `start` and `end` are 0-based byte offsets into the owning line's text,
/// end exclusive, so `end - start == text.len()`. `line` is the 0-based
/// logical line index in the buffer; blank lines consume an index but never
/// own a token.
///
/// Byte offsets are what a mode works in, not editor columns: on a line with
/// multi-byte characters they differ from character counts. Consumers that
/// need 0-based character columns should convert at the line, as the scan
/// layer does for its hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub line: usize,
    pub start: usize,
    pub end: usize,
    pub text: &'src str,
    pub tag: Option<Tag>,
}

impl Token<'_> {
    /// Byte length of the token.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always `false` for tokens produced by a [`TokenStream`](crate::TokenStream).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the mode tagged this token as a plain string literal.
    #[inline]
    pub fn is_string_literal(&self) -> bool {
        self.tag.is_some_and(Tag::is_string_literal)
    }
}
