//! The pluggable lexical mode driven by [`TokenStream`](crate::TokenStream).

use crate::Tag;

/// A stateful, line-oriented tokenizer.
///
/// The mode is asked for one token at a time. It receives the full text of
/// the current line (without terminator), the byte offset where the next
/// token starts, and its carry state. It returns the byte offset just past
/// the token plus the token's category, if any.
///
/// # Contract
///
/// - The returned offset must be greater than `pos`, at most `line.len()`,
///   and on a `char` boundary. A mode that violates this is treated as
///   stalled and the stream stops.
/// - `state` is the only place to remember anything between calls. It is
///   created once per buffer by [`start_state`](Self::start_state) and
///   carried unchanged across line boundaries, so a construct left open at
///   the end of one line (a block comment, a template literal) is still
///   open at the start of the next.
pub trait LexMode {
    /// Carry state threaded through every call for one buffer.
    type State;

    /// Fresh state for the start of a buffer.
    fn start_state(&self) -> Self::State;

    /// Scan one token of `line` starting at byte offset `pos`.
    fn token(&self, line: &str, pos: usize, state: &mut Self::State) -> (usize, Option<Tag>);
}

impl<M: LexMode + ?Sized> LexMode for &M {
    type State = M::State;

    fn start_state(&self) -> Self::State {
        (**self).start_state()
    }

    fn token(&self, line: &str, pos: usize, state: &mut Self::State) -> (usize, Option<Tag>) {
        (**self).token(line, pos, state)
    }
}
