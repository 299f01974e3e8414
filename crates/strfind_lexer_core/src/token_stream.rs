//! Drives a [`LexMode`] over a whole buffer, one line at a time.
//!
//! # State Machine
//!
//! ```text
//!            new()
//!              │ first non-empty line?
//!       yes ┌──┴──┐ no
//!           ▼     ▼
//!        InLine ─► Exhausted
//!          ▲ │
//!          └─┘ next(): token from current line,
//!              or pull the next line at end-of-line
//! ```
//!
//! End-of-line is detected by the call *after* the one that returned the
//! last token of a line: a token may end exactly at `line.len()`, and only
//! the following `next()` pulls a new line. The mode's carry state is left
//! untouched at the line switch.

use std::iter::FusedIterator;

use crate::{LexMode, LineRecord, LineSplitter, Tag, Token};

/// Position where a [`LexMode`] failed to advance.
///
/// Recorded when the mode returns an offset that is not past the cursor,
/// lies beyond the end of the line, or splits a UTF-8 sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stall {
    /// Logical line index of the offending line.
    pub line: usize,
    /// Byte offset the mode was asked to tokenize from.
    pub pos: usize,
}

#[derive(Clone, Copy, Debug)]
enum Phase<'src> {
    /// A line is loaded; `pos` is the end of the previous token on it.
    InLine { line: LineRecord<'src>, pos: usize },
    /// No more tokens, ever.
    Exhausted,
}

/// Token stream over one immutable buffer.
///
/// Owns the mode's carry state for the whole buffer. Two streams over the
/// same text share nothing and produce identical tokens.
pub struct TokenStream<'src, M: LexMode> {
    mode: M,
    lines: LineSplitter<'src>,
    state: M::State,
    phase: Phase<'src>,
    stall: Option<Stall>,
}

impl<'src, M: LexMode> TokenStream<'src, M> {
    /// Create a stream and eagerly load the first non-empty line.
    ///
    /// A buffer that is empty or only blank lines yields an exhausted stream.
    pub fn new(mode: M, text: &'src str) -> Self {
        let mut lines = LineSplitter::new(text);
        let phase = match lines.advance() {
            Some(line) => Phase::InLine { line, pos: 0 },
            None => Phase::Exhausted,
        };
        let state = mode.start_state();
        Self {
            mode,
            lines,
            state,
            phase,
            stall: None,
        }
    }

    /// Produce the next token, or `None` once the buffer is exhausted.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        let Phase::InLine { mut line, mut pos } = self.phase else {
            return None;
        };

        if pos >= line.text.len() {
            let Some(next) = self.lines.advance() else {
                self.phase = Phase::Exhausted;
                return None;
            };
            line = next;
            pos = 0;
        }

        let (end, tag) = self.mode.token(line.text, pos, &mut self.state);
        if !advances(line.text, pos, end) {
            tracing::warn!(
                line = line.index,
                pos,
                end,
                "lexical mode did not advance; ending token stream"
            );
            self.stall = Some(Stall {
                line: line.index,
                pos,
            });
            self.phase = Phase::Exhausted;
            return None;
        }

        self.phase = Phase::InLine { line, pos: end };
        Some(make_token(line, pos, end, tag))
    }

    /// Text of the line that owns the most recently returned token.
    ///
    /// `None` before any line was loaded (empty or blank-only buffer) and
    /// after the stream is exhausted.
    pub fn current_line_text(&self) -> Option<&'src str> {
        match self.phase {
            Phase::InLine { line, .. } => Some(line.text),
            Phase::Exhausted => None,
        }
    }

    /// Whether the stream has produced its last token.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.phase, Phase::Exhausted)
    }

    /// Where the mode failed to advance, if the stream ended because of it.
    pub fn stall(&self) -> Option<Stall> {
        self.stall
    }

    /// The mode's current carry state.
    pub fn state(&self) -> &M::State {
        &self.state
    }
}

impl<'src, M: LexMode> Iterator for TokenStream<'src, M> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl<M: LexMode> FusedIterator for TokenStream<'_, M> {}

/// A mode step is valid when it moves forward and stays on a char boundary.
#[inline]
fn advances(line: &str, pos: usize, end: usize) -> bool {
    end > pos && end <= line.len() && line.is_char_boundary(end)
}

#[inline]
fn make_token<'src>(line: LineRecord<'src>, start: usize, end: usize, tag: Option<Tag>) -> Token<'src> {
    Token {
        line: line.index,
        start,
        end,
        text: &line.text[start..end],
        tag,
    }
}

#[cfg(test)]
mod tests;
