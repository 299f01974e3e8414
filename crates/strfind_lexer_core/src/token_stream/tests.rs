use super::*;
use pretty_assertions::assert_eq;

/// Small mode with one piece of carry state: "inside a `/* */` comment".
struct WordMode;

#[derive(Debug, Default, PartialEq, Eq)]
struct WordState {
    in_comment: bool,
}

impl WordMode {
    fn comment(line: &str, from: usize, state: &mut WordState) -> usize {
        if let Some(i) = line[from..].find("*/") {
            state.in_comment = false;
            from + i + 2
        } else {
            state.in_comment = true;
            line.len()
        }
    }
}

impl LexMode for WordMode {
    type State = WordState;

    fn start_state(&self) -> WordState {
        WordState::default()
    }

    fn token(&self, line: &str, pos: usize, state: &mut WordState) -> (usize, Option<Tag>) {
        let rest = &line[pos..];
        if state.in_comment {
            return (Self::comment(line, pos, state), Some(Tag::Comment));
        }
        if rest.starts_with("/*") {
            return (Self::comment(line, pos + 2, state), Some(Tag::Comment));
        }
        let first = rest.chars().next().unwrap_or(' ');
        if first == ' ' {
            let n = rest.len() - rest.trim_start_matches(' ').len();
            return (pos + n, None);
        }
        if first == '"' {
            let end = rest[1..].find('"').map_or(line.len(), |i| pos + i + 2);
            return (end, Some(Tag::String));
        }
        if first.is_alphanumeric() {
            let n = rest
                .find(|c: char| !c.is_alphanumeric())
                .unwrap_or(rest.len());
            return (pos + n, Some(Tag::Variable));
        }
        (pos + first.len_utf8(), Some(Tag::Operator))
    }
}

/// Never advances.
struct StuckMode;

impl LexMode for StuckMode {
    type State = ();

    fn start_state(&self) -> Self::State {}

    fn token(&self, _line: &str, pos: usize, _state: &mut ()) -> (usize, Option<Tag>) {
        (pos, None)
    }
}

/// Claims tokens past the end of the line.
struct OvershootMode;

impl LexMode for OvershootMode {
    type State = ();

    fn start_state(&self) -> Self::State {}

    fn token(&self, line: &str, _pos: usize, _state: &mut ()) -> (usize, Option<Tag>) {
        (line.len() + 5, None)
    }
}

fn triples(text: &str) -> Vec<(usize, usize, usize, &str)> {
    TokenStream::new(WordMode, text)
        .map(|t| (t.line, t.start, t.end, t.text))
        .collect()
}

// === Degenerate Input ===

#[test]
fn empty_buffer_is_exhausted() {
    let mut stream = TokenStream::new(WordMode, "");
    assert!(stream.is_exhausted());
    assert_eq!(stream.current_line_text(), None);
    assert_eq!(stream.next_token(), None);
    assert_eq!(stream.stall(), None);
}

#[test]
fn blank_only_buffer_yields_nothing() {
    let mut stream = TokenStream::new(WordMode, "\n\n\n");
    assert_eq!(stream.next_token(), None);
    assert_eq!(stream.current_line_text(), None);
}

// === Positions ===

#[test]
fn single_line_positions() {
    assert_eq!(
        triples("var x = \"hi\";"),
        vec![
            (0, 0, 3, "var"),
            (0, 3, 4, " "),
            (0, 4, 5, "x"),
            (0, 5, 6, " "),
            (0, 6, 7, "="),
            (0, 7, 8, " "),
            (0, 8, 12, "\"hi\""),
            (0, 12, 13, ";"),
        ]
    );
}

#[test]
fn blank_lines_never_own_tokens() {
    assert_eq!(
        triples("a\n\n\nb c"),
        vec![(0, 0, 1, "a"), (3, 0, 1, "b"), (3, 1, 2, " "), (3, 2, 3, "c")]
    );
}

#[test]
fn token_may_end_exactly_at_end_of_line() {
    let mut stream = TokenStream::new(WordMode, "ab\ncd");
    let first = stream.next_token();
    assert_eq!(first.map(|t| (t.line, t.end)), Some((0, 2)));
    // The line switch happens on the following call.
    assert_eq!(stream.current_line_text(), Some("ab"));
    let second = stream.next_token();
    assert_eq!(second.map(|t| (t.line, t.start, t.text)), Some((1, 0, "cd")));
    assert_eq!(stream.current_line_text(), Some("cd"));
    assert_eq!(stream.next_token(), None);
    assert!(stream.is_exhausted());
}

#[test]
fn current_line_text_follows_tokens() {
    let text = "x = 1\n\ny = \"s\"";
    let mut stream = TokenStream::new(WordMode, text);
    while let Some(token) = stream.next_token() {
        let line_text = stream.current_line_text().unwrap_or_default();
        assert_eq!(&line_text[token.start..token.end], token.text);
        let expected = if token.line == 0 { "x = 1" } else { "y = \"s\"" };
        assert_eq!(line_text, expected);
    }
}

#[test]
fn multibyte_tokens_use_byte_offsets() {
    let toks = triples("\u{e9}t\u{e9} \"\u{1F600}\"");
    assert_eq!(
        toks,
        vec![
            (0, 0, 5, "\u{e9}t\u{e9}"),
            (0, 5, 6, " "),
            (0, 6, 12, "\"\u{1F600}\""),
        ]
    );
}

// === Carry State ===

#[test]
fn comment_state_survives_line_boundaries() {
    let text = "a /* start\n\"not a string\"\nend */ \"real\"";
    let tokens: Vec<Token<'_>> = TokenStream::new(WordMode, text).collect();

    let strings: Vec<(usize, &str)> = tokens
        .iter()
        .filter(|t| t.is_string_literal())
        .map(|t| (t.line, t.text))
        .collect();
    assert_eq!(strings, vec![(2, "\"real\"")]);

    let middle: Vec<Option<Tag>> = tokens
        .iter()
        .filter(|t| t.line == 1)
        .map(|t| t.tag)
        .collect();
    assert_eq!(middle, vec![Some(Tag::Comment)]);
}

#[test]
fn carry_state_is_visible_between_lines() {
    let mut stream = TokenStream::new(WordMode, "/* open\nclose */");
    assert!(stream.next_token().is_some());
    assert!(stream.state().in_comment);
    assert!(stream.next_token().is_some());
    assert!(!stream.state().in_comment);
}

// === Stalls ===

#[test]
fn zero_length_token_ends_stream() {
    let mut stream = TokenStream::new(StuckMode, "\nabc");
    assert_eq!(stream.next_token(), None);
    assert_eq!(stream.stall(), Some(Stall { line: 1, pos: 0 }));
    assert!(stream.is_exhausted());
    assert_eq!(stream.next_token(), None);
}

#[test]
fn overshooting_token_ends_stream() {
    let mut stream = TokenStream::new(OvershootMode, "abc");
    assert_eq!(stream.next_token(), None);
    assert_eq!(stream.stall(), Some(Stall { line: 0, pos: 0 }));
}

// === Determinism ===

#[test]
fn independent_streams_agree() {
    let text = "a /* b\n c */ \"d\"\n\ne 'f'";
    let first: Vec<Token<'_>> = TokenStream::new(WordMode, text).collect();
    let second: Vec<Token<'_>> = TokenStream::new(&WordMode, text).collect();
    assert_eq!(first, second);
}

mod proptest_stream {
    use super::{TokenStream, WordMode};
    use crate::LineSplitter;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn tokens_tile_a_single_line(line in "[a-z \"/*;=]{1,40}") {
            let rebuilt: String = TokenStream::new(WordMode, &line).map(|t| t.text).collect();
            prop_assert_eq!(rebuilt, line);
        }

        #[test]
        fn tokens_tile_every_line(text in "[a-z \"/*\n]{0,80}") {
            let mut rebuilt: Vec<String> = Vec::new();
            let mut last_line = None;
            for token in TokenStream::new(WordMode, &text) {
                prop_assert_eq!(token.len(), token.text.len());
                if last_line != Some(token.line) {
                    prop_assert!(last_line.map_or(true, |l| l < token.line));
                    rebuilt.push(String::new());
                    last_line = Some(token.line);
                }
                if let Some(current) = rebuilt.last_mut() {
                    current.push_str(token.text);
                }
            }
            let lines: Vec<String> = LineSplitter::new(&text).map(|l| l.text.to_owned()).collect();
            prop_assert_eq!(rebuilt, lines);
        }

        #[test]
        fn token_lines_are_never_blank(text in "[a \n]{0,60}") {
            let blank: Vec<usize> = text
                .split('\n')
                .enumerate()
                .filter(|(_, l)| l.is_empty())
                .map(|(i, _)| i)
                .collect();
            for token in TokenStream::new(WordMode, &text) {
                prop_assert!(!blank.contains(&token.line));
            }
        }
    }
}
