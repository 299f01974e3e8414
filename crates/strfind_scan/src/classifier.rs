//! Context heuristics for boilerplate string literals.
//!
//! Rules are tried in [`IgnoreRule::ALL`] order and the first match wins.
//! Apart from the first two, which look at the literal itself, every rule
//! matches a pattern against the raw text of the line and then checks
//! whether the literal starts inside the matched region.
//!
//! These are textual heuristics. They do not re-lex the line, so layouts
//! such as a `)` inside a string argument of `console.log(...)` can make
//! a pattern end early or late.

use std::sync::LazyLock;

use regex::Regex;
use strfind_lexer_core::Token;

macro_rules! line_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Directive prologue ─────────────────────────────────────────────────────
line_pattern!(RE_USE_STRICT_LINE, r#"^\s*["']use strict["']\s*;?\s*$"#);

// ── Module import path ─────────────────────────────────────────────────────
line_pattern!(
    RE_REQUIRE,
    r#"^\s*((?:(?:var|let|const)\s+)?[A-Za-z0-9_$]+\s*=\s*)?require\(["'][^"']+["']\)"#
);

// ── Property name ──────────────────────────────────────────────────────────
line_pattern!(
    RE_DEFINE_PROPERTY,
    r#"^\s*Object\.defineProperty\(\s*[^,"']+\s*,\s*["'][^"']+["']"#
);

// ── Error message (not anchored to line start) ─────────────────────────────
line_pattern!(RE_NEW_ERROR, r"new Error\([^)]+\)");

// ── Log message ────────────────────────────────────────────────────────────
line_pattern!(
    RE_CONSOLE,
    r"^\s*console\.(?:log|warn|error|assert)\([^)]+\)"
);

/// A reason to suppress a string literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreRule {
    /// `""` or `''`.
    EmptyString,
    /// `"use strict"` alone on its line.
    UseStrict,
    /// The path in `x = require("path")`.
    RequirePath,
    /// The property name in `Object.defineProperty(obj, "name", ...)`.
    DefinePropertyName,
    /// The message in `new Error("...")`.
    ErrorMessage,
    /// An argument of `console.log/warn/error/assert(...)`.
    ConsoleMessage,
}

impl IgnoreRule {
    /// Every rule, in precedence order.
    pub const ALL: [IgnoreRule; 6] = [
        IgnoreRule::EmptyString,
        IgnoreRule::UseStrict,
        IgnoreRule::RequirePath,
        IgnoreRule::DefinePropertyName,
        IgnoreRule::ErrorMessage,
        IgnoreRule::ConsoleMessage,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            IgnoreRule::EmptyString => "empty-string",
            IgnoreRule::UseStrict => "use-strict",
            IgnoreRule::RequirePath => "require-path",
            IgnoreRule::DefinePropertyName => "define-property-name",
            IgnoreRule::ErrorMessage => "error-message",
            IgnoreRule::ConsoleMessage => "console-message",
        }
    }

    /// Whether this rule alone suppresses `token` found on `line`.
    pub fn matches(self, token: &Token<'_>, line: &str) -> bool {
        match self {
            IgnoreRule::EmptyString => matches!(token.text, "\"\"" | "''"),
            IgnoreRule::UseStrict => {
                matches!(token.text, "\"use strict\"" | "'use strict'")
                    && is_match(&RE_USE_STRICT_LINE, line)
            }
            IgnoreRule::RequirePath => starts_in_prefix(&RE_REQUIRE, line, token.start),
            IgnoreRule::DefinePropertyName => {
                starts_in_prefix(&RE_DEFINE_PROPERTY, line, token.start)
            }
            IgnoreRule::ErrorMessage => starts_inside(&RE_NEW_ERROR, line, token.start),
            IgnoreRule::ConsoleMessage => starts_in_prefix(&RE_CONSOLE, line, token.start),
        }
    }
}

/// First rule that suppresses `token`, or `None` if it should be kept.
///
/// `line` is the full text of the line the token belongs to.
pub fn classify(token: &Token<'_>, line: &str) -> Option<IgnoreRule> {
    IgnoreRule::ALL
        .into_iter()
        .find(|rule| rule.matches(token, line))
}

/// Whether `token` is a boilerplate literal that should not be reported.
pub fn is_ignorable(token: &Token<'_>, line: &str) -> bool {
    classify(token, line).is_some()
}

fn is_match(pattern: &LazyLock<Option<Regex>>, line: &str) -> bool {
    LazyLock::force(pattern)
        .as_ref()
        .is_some_and(|re| re.is_match(line))
}

/// The pattern matches from the start of the line and `start` is before
/// the end of the match.
fn starts_in_prefix(pattern: &LazyLock<Option<Regex>>, line: &str, start: usize) -> bool {
    LazyLock::force(pattern)
        .as_ref()
        .and_then(|re| re.find(line))
        .is_some_and(|m| start < m.end())
}

/// The first match anywhere in the line strictly contains `start`.
fn starts_inside(pattern: &LazyLock<Option<Regex>>, line: &str, start: usize) -> bool {
    LazyLock::force(pattern)
        .as_ref()
        .and_then(|re| re.find(line))
        .is_some_and(|m| m.start() < start && start < m.end())
}

#[cfg(test)]
mod tests;
