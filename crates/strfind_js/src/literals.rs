//! Hand scanners for the constructs that depend on carry state.
//!
//! Every scanner works on the bytes of a single line. The delimiters it
//! looks for are ASCII, and UTF-8 continuation bytes are never ASCII, so
//! every offset returned is either just past an ASCII byte or the line
//! length, and therefore always a `char` boundary.

/// How a quoted string token ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StringEnd {
    /// Closing quote found.
    Closed,
    /// Line ended with a `\`; the string continues on the next line.
    Continued,
    /// Line ended without a closing quote.
    Unterminated,
}

/// How a template literal fragment ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TemplateEnd {
    /// Closing backtick found.
    Closed,
    /// `${` found; code follows until the matching `}`.
    Interpolation,
    /// Line ended inside the template.
    Open,
}

/// Scan a string body from `from` up to and including the `quote` byte.
pub(crate) fn scan_string(line: &str, from: usize, quote: u8) -> (usize, StringEnd) {
    let bytes = line.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if i + 1 == bytes.len() => return (bytes.len(), StringEnd::Continued),
            b'\\' => i += 2,
            b if b == quote => return (i + 1, StringEnd::Closed),
            _ => i += 1,
        }
    }
    (bytes.len(), StringEnd::Unterminated)
}

/// Scan a template literal fragment from `from`.
pub(crate) fn scan_template(line: &str, from: usize) -> (usize, TemplateEnd) {
    let bytes = line.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'`' => return (i + 1, TemplateEnd::Closed),
            b'$' if bytes.get(i + 1) == Some(&b'{') => return (i + 2, TemplateEnd::Interpolation),
            _ => i += 1,
        }
    }
    (bytes.len(), TemplateEnd::Open)
}

/// Scan a block comment body from `from` through `*/`.
///
/// Returns the end offset and whether the comment was closed on this line.
pub(crate) fn scan_block_comment(line: &str, from: usize) -> (usize, bool) {
    match line[from..].find("*/") {
        Some(i) => (from + i + 2, true),
        None => (line.len(), false),
    }
}

/// Scan a regex literal whose opening `/` is just before `from`.
///
/// Returns the offset after the closing `/` and any flags, or `None` when
/// the line ends first (the `/` was not a regex after all).
pub(crate) fn scan_regex(line: &str, from: usize) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut i = from;
    let mut in_class = false;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'[' => in_class = true,
            b']' => in_class = false,
            b'/' if !in_class => {
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                    i += 1;
                }
                return Some(i);
            }
            _ => {}
        }
        i += 1;
    }
    None
}
