//! Line-oriented token stream over a pluggable lexical mode.
//!
//! A lexical mode only ever sees one line of text at a time. This crate
//! owns everything around it: splitting the buffer into lines, threading
//! the mode's carry state across line boundaries, and turning each
//! tokenizing step into a positioned [`Token`].
//!
//! # Architecture
//!
//! ```text
//! &str buffer
//!     │
//!     ▼
//! LineSplitter ──► LineRecord (non-empty lines, blank lines counted)
//!     │
//!     ▼
//! TokenStream<M: LexMode> ──► Token { line, start, end, text, tag }
//! ```
//!
//! The stream never allocates per token: token text borrows the buffer.

mod line_splitter;
mod mode;
mod tag;
mod token;
mod token_stream;

pub use line_splitter::{LineRecord, LineSplitter};
pub use mode::LexMode;
pub use tag::Tag;
pub use token::Token;
pub use token_stream::{Stall, TokenStream};
