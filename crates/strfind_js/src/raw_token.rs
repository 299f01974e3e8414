//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived recognizer for the context-free
//! part of JavaScript: words, numbers, operators and punctuation. Strings,
//! comments, templates and regex literals never reach it.

use logos::Logos;

/// Raw token from logos, matched at the start of the remaining line.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\x0B\x0C]+")]
    Whitespace,

    // === Declaring keywords: the next identifier is a definition ===
    #[token("var")]
    #[token("let")]
    #[token("const")]
    #[token("function")]
    #[token("class")]
    Declare,

    // === Keywords after which an expression (and so a regex) may start ===
    #[token("return")]
    #[token("typeof")]
    #[token("instanceof")]
    #[token("in")]
    #[token("of")]
    #[token("new")]
    #[token("delete")]
    #[token("void")]
    #[token("throw")]
    #[token("case")]
    #[token("do")]
    #[token("else")]
    #[token("yield")]
    #[token("await")]
    KeywordBeforeExpr,

    #[token("break")]
    #[token("catch")]
    #[token("continue")]
    #[token("debugger")]
    #[token("default")]
    #[token("export")]
    #[token("extends")]
    #[token("finally")]
    #[token("for")]
    #[token("if")]
    #[token("import")]
    #[token("super")]
    #[token("switch")]
    #[token("this")]
    #[token("try")]
    #[token("while")]
    #[token("with")]
    Keyword,

    #[token("true")]
    #[token("false")]
    #[token("null")]
    #[token("undefined")]
    #[token("NaN")]
    #[token("Infinity")]
    Atom,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    #[regex(r"#[A-Za-z_$][A-Za-z0-9_$]*")]
    PrivateName,

    #[regex(r"[0-9][0-9_]*(\.[0-9_]*)?([eE][+-]?[0-9]+)?n?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"0[xX][0-9a-fA-F_]+n?")]
    #[regex(r"0[bB][01_]+n?")]
    #[regex(r"0[oO][0-7_]+n?")]
    Number,

    #[regex(r"[+\-*%&|^!~<>=?]+")]
    Operator,

    /// Division; only produced where a regex literal cannot start.
    #[token("/")]
    #[token("/=")]
    Slash,

    #[token("(")]
    #[token("[")]
    Open,

    #[token(")")]
    #[token("]")]
    Close,

    #[token("{")]
    OpenBrace,

    #[token("}")]
    CloseBrace,

    #[token(".")]
    Dot,

    #[token("...")]
    Spread,

    #[token(";")]
    #[token(",")]
    #[token(":")]
    Separator,

    #[token("@")]
    At,
}

impl RawToken {
    /// Match one raw token at the start of `rest`.
    ///
    /// Returns the token and its byte length, or `None` when no pattern
    /// matches the first character.
    pub(crate) fn first(rest: &str) -> Option<(RawToken, usize)> {
        let mut lexer = RawToken::lexer(rest);
        match lexer.next()? {
            Ok(token) => Some((token, lexer.span().end)),
            Err(()) => None,
        }
    }
}
