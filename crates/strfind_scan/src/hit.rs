use serde::Serialize;

/// A location in a buffer, in editor coordinates.
///
/// Both fields are 0-based. `ch` counts characters (Unicode scalar values),
/// not bytes, from the start of the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub fn new(line: usize, ch: usize) -> Self {
        Position { line, ch }
    }

    /// 1-based line number, as shown to people.
    pub fn display_line(self) -> usize {
        self.line + 1
    }

    /// 1-based column, as shown to people.
    pub fn display_ch(self) -> usize {
        self.ch + 1
    }
}

/// A string literal that survived classification.
///
/// `end` is exclusive and always on the same line as `start`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Hit {
    pub start: Position,
    pub end: Position,
    /// Source text of the literal, quotes included.
    pub text: String,
}
