//! JavaScript lexical mode.
//!
//! [`JsMode`] tokenizes one line of JavaScript at a time and implements
//! [`LexMode`](strfind_lexer_core::LexMode), so it can be driven by a
//! [`TokenStream`](strfind_lexer_core::TokenStream). Constructs that span
//! lines (block comments, template literals, backslash-continued strings)
//! live in [`JsState`].
//!
//! Plain words, numbers, operators and punctuation are recognized by a
//! logos-derived `RawToken`; quoted literals, comments and regex literals
//! are scanned by hand because they need the carry state.

mod js_mode;
mod literals;
mod raw_token;

pub use js_mode::{JsMode, JsState};
