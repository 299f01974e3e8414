//! Lexical category assigned to a token by a [`LexMode`](crate::LexMode).
//!
//! The set mirrors the style classes editor grammars emit. A token with no
//! category is represented by `Option::<Tag>::None`, never by a variant, so
//! "unclassified" cannot be confused with any named category.

use std::fmt;

/// Lexical category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Reserved word (`var`, `function`, `return`).
    Keyword,
    /// Literal constant word (`true`, `null`, `undefined`).
    Atom,
    /// Numeric literal.
    Number,
    /// Identifier being declared.
    Def,
    /// Identifier reference.
    Variable,
    /// Property name after `.`.
    Property,
    /// Operator (`+`, `===`, `=>`).
    Operator,
    /// Line or block comment, or a fragment of one.
    Comment,
    /// Quoted string literal (`"..."` or `'...'`).
    String,
    /// Template literal fragment (`` `...` ``).
    TemplateString,
    /// Regular expression literal.
    Regexp,
    /// Preprocessor-like marker (shebang line, decorators).
    Meta,
}

impl Tag {
    /// Every tag, in discriminant order.
    pub const ALL: [Tag; 12] = [
        Tag::Keyword,
        Tag::Atom,
        Tag::Number,
        Tag::Def,
        Tag::Variable,
        Tag::Property,
        Tag::Operator,
        Tag::Comment,
        Tag::String,
        Tag::TemplateString,
        Tag::Regexp,
        Tag::Meta,
    ];

    /// Style-class name of the tag.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Keyword => "keyword",
            Tag::Atom => "atom",
            Tag::Number => "number",
            Tag::Def => "def",
            Tag::Variable => "variable",
            Tag::Property => "property",
            Tag::Operator => "operator",
            Tag::Comment => "comment",
            Tag::String => "string",
            Tag::TemplateString | Tag::Regexp => "string-2",
            Tag::Meta => "meta",
        }
    }

    /// Whether tokens with this tag are plain string literals.
    ///
    /// Template literals and regex literals share the `string-2` class and
    /// are deliberately not string literals here.
    pub const fn is_string_literal(self) -> bool {
        matches!(self, Tag::String)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
