//! Scan driver: token stream in, positioned hits out.

use strfind_lexer_core::{LexMode, Stall, Token, TokenStream};

use crate::{classify, Hit, Position};

/// Counters for one scanned buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Tokens produced by the stream, whitespace and comments included.
    pub tokens: usize,
    /// Tokens tagged as plain string literals.
    pub literals: usize,
    /// Literals suppressed by an ignore rule.
    pub ignored: usize,
    /// Set when the lexical mode stopped advancing before the end.
    pub stall: Option<Stall>,
}

impl ScanSummary {
    /// Literals that were reported.
    pub fn hits(&self) -> usize {
        self.literals - self.ignored
    }
}

/// Finds reportable string literals using one lexical mode.
///
/// The scanner holds no per-buffer state: each call to [`scan`](Self::scan)
/// builds its own token stream, so one scanner can serve many threads.
#[derive(Clone, Debug, Default)]
pub struct Scanner<M> {
    mode: M,
}

impl<M: LexMode> Scanner<M> {
    pub fn new(mode: M) -> Self {
        Scanner { mode }
    }

    pub fn mode(&self) -> &M {
        &self.mode
    }

    /// Reportable string literals of `text`, in document order.
    pub fn scan(&self, text: &str) -> Vec<Hit> {
        self.scan_with_summary(text).0
    }

    /// Like [`scan`](Self::scan), also returning counters for the buffer.
    pub fn scan_with_summary(&self, text: &str) -> (Vec<Hit>, ScanSummary) {
        let mut stream = TokenStream::new(&self.mode, text);
        let mut summary = ScanSummary::default();
        let mut hits = Vec::new();

        while let Some(token) = stream.next_token() {
            summary.tokens += 1;
            if !token.is_string_literal() {
                continue;
            }
            summary.literals += 1;

            let Some(line) = stream.current_line_text() else {
                continue;
            };
            if let Some(rule) = classify(&token, line) {
                tracing::trace!(
                    line = token.line,
                    start = token.start,
                    rule = rule.name(),
                    text = token.text,
                    "ignoring string literal"
                );
                summary.ignored += 1;
                continue;
            }
            hits.push(make_hit(&token, line));
        }

        summary.stall = stream.stall();
        tracing::debug!(
            tokens = summary.tokens,
            literals = summary.literals,
            ignored = summary.ignored,
            stalled = summary.stall.is_some(),
            "scanned buffer"
        );
        (hits, summary)
    }
}

/// Reportable string literals of `text` under `mode`.
pub fn scan<M: LexMode>(mode: M, text: &str) -> Vec<Hit> {
    Scanner::new(mode).scan(text)
}

fn make_hit(token: &Token<'_>, line: &str) -> Hit {
    Hit {
        start: Position::new(token.line, char_column(line, token.start)),
        end: Position::new(token.line, char_column(line, token.end)),
        text: token.text.to_owned(),
    }
}

/// Character column of byte offset `byte` in `line`.
fn char_column(line: &str, byte: usize) -> usize {
    line[..byte].chars().count()
}
