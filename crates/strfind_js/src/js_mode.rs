//! JavaScript lexical mode.
//!
//! Tags follow the editor style-class convention: quoted strings are
//! [`Tag::String`], template literal fragments [`Tag::TemplateString`],
//! regex literals [`Tag::Regexp`]. Whitespace and punctuation have no tag.
//!
//! # Regex vs. division
//!
//! A `/` starts a regex literal only where an expression may start (after
//! an operator, an opening bracket, a separator, or keywords such as
//! `return`). The last significant token decides; comments and whitespace
//! do not change it. Two cases need more than the last token:
//!
//! - Postfix `++`/`--` follow a value, so a `/` after them is division.
//! - A `)` closing an `if`, `while`, `for` or `with` head ends a condition,
//!   not a value, so a `/` after it starts a regex.

use strfind_lexer_core::{LexMode, Tag};

use crate::literals::{
    scan_block_comment, scan_regex, scan_string, scan_template, StringEnd, TemplateEnd,
};
use crate::raw_token::RawToken;

/// Which construct the next line (or next token) starts inside.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Context {
    #[default]
    Code,
    BlockComment,
    Template,
    /// Inside a backslash-continued string opened with this quote byte.
    String(u8),
}

/// Carry state of [`JsMode`] for one buffer.
///
/// Not `Clone`: the stream owns the only copy for the whole scan.
#[derive(Debug, PartialEq, Eq)]
pub struct JsState {
    context: Context,
    /// Brace depth inside each open `${ ... }`, innermost last.
    interpolations: Vec<u32>,
    /// One entry per open `(` or `[`: whether it opened a statement head.
    brackets: Vec<bool>,
    regex_allowed: bool,
    after_dot: bool,
    declaring: bool,
    /// The last significant token was `if`, `while`, `for` or `with`.
    before_head: bool,
}

impl Default for JsState {
    fn default() -> Self {
        Self {
            context: Context::Code,
            interpolations: Vec::new(),
            brackets: Vec::new(),
            regex_allowed: true,
            after_dot: false,
            declaring: false,
            before_head: false,
        }
    }
}

impl JsState {
    /// Inside a `/* ... */` comment that has not been closed yet.
    pub fn in_block_comment(&self) -> bool {
        self.context == Context::BlockComment
    }

    /// Inside the literal text of a template (not inside `${ }`).
    pub fn in_template(&self) -> bool {
        self.context == Context::Template
    }

    /// Inside a string whose previous line ended with `\`.
    pub fn in_continued_string(&self) -> bool {
        matches!(self.context, Context::String(_))
    }

    /// Number of `${ ... }` interpolations currently open.
    pub fn interpolation_depth(&self) -> usize {
        self.interpolations.len()
    }
}

/// Line-oriented JavaScript tokenizer.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsMode;

impl LexMode for JsMode {
    type State = JsState;

    fn start_state(&self) -> JsState {
        JsState::default()
    }

    fn token(&self, line: &str, pos: usize, state: &mut JsState) -> (usize, Option<Tag>) {
        match state.context {
            Context::BlockComment => block_comment(line, pos, state),
            Context::Template => template(line, pos, state),
            Context::String(quote) => string(line, pos, quote, state),
            Context::Code => code(line, pos, state),
        }
    }
}

fn block_comment(line: &str, from: usize, state: &mut JsState) -> (usize, Option<Tag>) {
    let (end, closed) = scan_block_comment(line, from);
    state.context = if closed {
        Context::Code
    } else {
        Context::BlockComment
    };
    (end, Some(Tag::Comment))
}

fn string(line: &str, from: usize, quote: u8, state: &mut JsState) -> (usize, Option<Tag>) {
    let (end, how) = scan_string(line, from, quote);
    state.context = match how {
        StringEnd::Continued => Context::String(quote),
        StringEnd::Closed | StringEnd::Unterminated => Context::Code,
    };
    state.regex_allowed = false;
    (end, Some(Tag::String))
}

fn template(line: &str, from: usize, state: &mut JsState) -> (usize, Option<Tag>) {
    let (end, how) = scan_template(line, from);
    match how {
        TemplateEnd::Closed => {
            state.context = Context::Code;
            state.regex_allowed = false;
        }
        TemplateEnd::Interpolation => {
            state.context = Context::Code;
            state.interpolations.push(0);
            state.regex_allowed = true;
        }
        TemplateEnd::Open => state.context = Context::Template,
    }
    (end, Some(Tag::TemplateString))
}

/// One token of ordinary code.
fn code(line: &str, pos: usize, state: &mut JsState) -> (usize, Option<Tag>) {
    let rest = &line[pos..];
    let Some(&first) = rest.as_bytes().first() else {
        return (pos, None);
    };

    match first {
        b'"' | b'\'' => {
            take_word_context(state);
            return string(line, pos + 1, first, state);
        }
        b'`' => {
            take_word_context(state);
            return template(line, pos + 1, state);
        }
        b'/' => match rest.as_bytes().get(1) {
            Some(b'/') => return (line.len(), Some(Tag::Comment)),
            Some(b'*') => return block_comment(line, pos + 2, state),
            _ if state.regex_allowed => {
                if let Some(end) = scan_regex(line, pos + 1) {
                    take_word_context(state);
                    state.regex_allowed = false;
                    return (end, Some(Tag::Regexp));
                }
            }
            _ => {}
        },
        b'#' if pos == 0 && rest.starts_with("#!") => return (line.len(), Some(Tag::Meta)),
        _ => {}
    }

    let Some((raw, len)) = RawToken::first(rest) else {
        return unknown(rest, pos, state);
    };
    if raw == RawToken::Whitespace {
        return (pos + len, None);
    }

    let (after_dot, declaring) = take_word_context(state);
    let opens_head = std::mem::take(&mut state.before_head);
    let word = &rest[..len];
    let tag = match raw {
        RawToken::Declare | RawToken::KeywordBeforeExpr | RawToken::Keyword | RawToken::Atom
            if after_dot =>
        {
            state.regex_allowed = false;
            Some(Tag::Property)
        }
        RawToken::Declare => {
            state.declaring = true;
            state.regex_allowed = true;
            Some(Tag::Keyword)
        }
        RawToken::KeywordBeforeExpr => {
            state.regex_allowed = true;
            Some(Tag::Keyword)
        }
        RawToken::Keyword => {
            state.regex_allowed = false;
            state.before_head = matches!(word, "if" | "while" | "for" | "with");
            Some(Tag::Keyword)
        }
        RawToken::Atom => {
            state.regex_allowed = false;
            Some(Tag::Atom)
        }
        RawToken::Ident => {
            state.regex_allowed = false;
            Some(word_tag(after_dot, declaring))
        }
        RawToken::PrivateName => {
            state.regex_allowed = false;
            Some(Tag::Property)
        }
        RawToken::Number => {
            state.regex_allowed = false;
            Some(Tag::Number)
        }
        RawToken::Operator if matches!(word, "++" | "--") && !state.regex_allowed => {
            // Postfix: the operand before it is still a value.
            Some(Tag::Operator)
        }
        RawToken::Operator | RawToken::Slash => {
            state.regex_allowed = true;
            Some(Tag::Operator)
        }
        RawToken::Open => {
            state.brackets.push(opens_head && word == "(");
            state.regex_allowed = true;
            None
        }
        RawToken::Spread | RawToken::Separator => {
            state.regex_allowed = true;
            None
        }
        RawToken::Close => {
            state.regex_allowed = state.brackets.pop().unwrap_or(false);
            None
        }
        RawToken::OpenBrace => {
            if let Some(depth) = state.interpolations.last_mut() {
                *depth += 1;
            }
            state.regex_allowed = true;
            None
        }
        RawToken::CloseBrace => match state.interpolations.last_mut() {
            Some(0) => {
                state.interpolations.pop();
                return template(line, pos + 1, state);
            }
            Some(depth) => {
                *depth -= 1;
                state.regex_allowed = true;
                None
            }
            None => {
                state.regex_allowed = true;
                None
            }
        },
        RawToken::Dot => {
            state.after_dot = true;
            state.regex_allowed = false;
            None
        }
        RawToken::At => {
            state.regex_allowed = false;
            Some(Tag::Meta)
        }
        RawToken::Whitespace => None,
    };
    (pos + len, tag)
}

/// A character no raw pattern knows: a non-ASCII identifier or a stray byte.
fn unknown(rest: &str, pos: usize, state: &mut JsState) -> (usize, Option<Tag>) {
    let Some(first) = rest.chars().next() else {
        return (pos, None);
    };
    let (after_dot, declaring) = take_word_context(state);
    if first.is_alphabetic() {
        let len = rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
            .unwrap_or(rest.len());
        state.regex_allowed = false;
        return (pos + len, Some(word_tag(after_dot, declaring)));
    }
    (pos + first.len_utf8(), None)
}

/// Clear the per-word flags, returning `(after_dot, declaring)`.
fn take_word_context(state: &mut JsState) -> (bool, bool) {
    (
        std::mem::take(&mut state.after_dot),
        std::mem::take(&mut state.declaring),
    )
}

fn word_tag(after_dot: bool, declaring: bool) -> Tag {
    if after_dot {
        Tag::Property
    } else if declaring {
        Tag::Def
    } else {
        Tag::Variable
    }
}
