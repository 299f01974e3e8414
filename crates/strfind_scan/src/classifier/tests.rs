use super::*;
use pretty_assertions::assert_eq;
use strfind_lexer_core::Tag;

/// Token for the first occurrence of `lit` in `line`.
fn literal<'a>(line: &'a str, lit: &str) -> Token<'a> {
    let start = line.find(lit).unwrap_or(line.len());
    let end = (start + lit.len()).min(line.len());
    Token {
        line: 0,
        start,
        end,
        text: &line[start..end],
        tag: Some(Tag::String),
    }
}

fn rule_for(line: &str, lit: &str) -> Option<IgnoreRule> {
    classify(&literal(line, lit), line)
}

// === Empty String ===

#[test]
fn empty_strings_are_ignored() {
    assert_eq!(rule_for(r#"var x = "";"#, r#""""#), Some(IgnoreRule::EmptyString));
    assert_eq!(rule_for("var x = '';", "''"), Some(IgnoreRule::EmptyString));
}

#[test]
fn single_space_is_not_empty() {
    assert_eq!(rule_for(r#"var x = " ";"#, r#"" ""#), None);
}

// === Directive ===

#[test]
fn use_strict_alone_on_line() {
    assert_eq!(rule_for(r#""use strict";"#, r#""use strict""#), Some(IgnoreRule::UseStrict));
    assert_eq!(rule_for("    'use strict'  ", "'use strict'"), Some(IgnoreRule::UseStrict));
}

#[test]
fn use_strict_as_data_is_kept() {
    assert_eq!(rule_for(r#"var mode = "use strict";"#, r#""use strict""#), None);
    assert_eq!(rule_for(r#"f("use strict");"#, r#""use strict""#), None);
}

#[test]
fn other_literal_on_use_strict_shaped_line_is_kept() {
    assert_eq!(rule_for(r#""use strictly";"#, r#""use strictly""#), None);
}

// === Require ===

#[test]
fn require_paths_are_ignored() {
    for line in [
        r#"var fs = require("fs");"#,
        r#"const path = require('path');"#,
        r#"  let util = require("./util");"#,
        r#"helpers = require("helpers")"#,
        r#"require("side-effect");"#,
    ] {
        let start = line.find(['"', '\'']).unwrap_or(0);
        let end = line[start + 1..]
            .find(['"', '\''])
            .map_or(line.len(), |i| start + i + 2);
        let token = Token {
            line: 0,
            start,
            end,
            text: &line[start..end],
            tag: Some(Tag::String),
        };
        assert_eq!(classify(&token, line), Some(IgnoreRule::RequirePath), "{line}");
    }
}

#[test]
fn require_must_start_the_line() {
    assert_eq!(rule_for(r#"load(require("x"));"#, r#""x""#), None);
}

#[test]
fn literal_after_require_is_kept() {
    let line = r#"var a = require("a"); var b = "b";"#;
    assert_eq!(rule_for(line, r#""a""#), Some(IgnoreRule::RequirePath));
    assert_eq!(rule_for(line, r#""b""#), None);
}

// === Define Property ===

#[test]
fn define_property_name_is_ignored() {
    let line = r#"Object.defineProperty(exports, "name", { value: "v" });"#;
    assert_eq!(rule_for(line, r#""name""#), Some(IgnoreRule::DefinePropertyName));
    assert_eq!(rule_for(line, r#""v""#), None);
}

#[test]
fn define_property_with_literal_target_does_not_match() {
    let line = r#"Object.defineProperty("t", "name", {});"#;
    assert_eq!(rule_for(line, r#""name""#), None);
}

// === Error Message ===

#[test]
fn error_message_is_ignored() {
    let line = r#"    throw new Error("bad input");"#;
    assert_eq!(rule_for(line, r#""bad input""#), Some(IgnoreRule::ErrorMessage));
}

#[test]
fn error_rule_is_not_anchored() {
    // Unlike the other call rules, this one matches anywhere on the line,
    // including after an earlier statement.
    let line = r#"check(); if (bad) { throw new Error("late"); }"#;
    assert_eq!(rule_for(line, r#""late""#), Some(IgnoreRule::ErrorMessage));
}

#[test]
fn literal_before_error_call_is_kept() {
    let line = r#"log("a"); throw new Error("b");"#;
    assert_eq!(rule_for(line, r#""a""#), None);
    assert_eq!(rule_for(line, r#""b""#), Some(IgnoreRule::ErrorMessage));
}

// === Console ===

#[test]
fn console_messages_are_ignored() {
    assert_eq!(
        rule_for(r#"console.log("debug msg");"#, r#""debug msg""#),
        Some(IgnoreRule::ConsoleMessage)
    );
    assert_eq!(
        rule_for(r#"  console.warn("a", x);"#, r#""a""#),
        Some(IgnoreRule::ConsoleMessage)
    );
    assert_eq!(
        rule_for(r#"console.assert(ok, "msg");"#, r#""msg""#),
        Some(IgnoreRule::ConsoleMessage)
    );
}

#[test]
fn other_console_methods_are_kept() {
    assert_eq!(rule_for(r#"console.info("x");"#, r#""x""#), None);
}

#[test]
fn console_must_start_the_line() {
    assert_eq!(rule_for(r#"x = 1; console.log("y");"#, r#""y""#), None);
}

#[test]
fn close_paren_inside_argument_ends_match_early() {
    // Textual matching stops at the first `)`, even inside a string.
    let line = r#"console.log("a)b", "c");"#;
    assert_eq!(rule_for(line, r#""a)b""#), Some(IgnoreRule::ConsoleMessage));
    assert_eq!(rule_for(line, r#""c""#), None);
}

// === Precedence ===

#[test]
fn first_matching_rule_wins() {
    assert_eq!(rule_for(r#"console.log("");"#, r#""""#), Some(IgnoreRule::EmptyString));
}

#[test]
fn is_ignorable_agrees_with_classify() {
    let line = r#"var s = "hello world";"#;
    let token = literal(line, r#""hello world""#);
    assert!(!is_ignorable(&token, line));
    let line = r#"console.error("oops");"#;
    let token = literal(line, r#""oops""#);
    assert!(is_ignorable(&token, line));
}

#[test]
fn rule_names_are_unique() {
    let mut names: Vec<&str> = IgnoreRule::ALL.iter().map(|r| r.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), IgnoreRule::ALL.len());
}
