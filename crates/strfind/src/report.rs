//! Text and JSON rendering of scan results.

use std::fmt::Write as _;

use serde::Serialize;
use strfind_scan::Hit;

use crate::config::OutputFormat;
use crate::runner::FileResult;
use crate::CliError;

#[derive(Serialize)]
struct JsonReport<'a> {
    files: Vec<JsonFile<'a>>,
    total: usize,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: String,
    hits: &'a [Hit],
}

/// Total number of hits across all results.
pub fn total_hits(results: &[FileResult]) -> usize {
    results.iter().map(|r| r.hits().len()).sum()
}

/// Render results in the requested format.
pub fn render(results: &[FileResult], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(results)),
        OutputFormat::Json => render_json(results),
    }
}

/// Human-readable report. Files without hits are left out.
///
/// ```text
/// src/app.js
///   12:9  "Saved!"
///
/// 1 string literals in 1 files
/// ```
pub fn render_text(results: &[FileResult]) -> String {
    let mut out = String::new();
    let mut files = 0;

    for result in results.iter().filter(|r| !r.hits().is_empty()) {
        files += 1;
        let _ = writeln!(out, "{}", result.path.display());
        for hit in result.hits() {
            let _ = writeln!(
                out,
                "  {}:{}  {}",
                hit.start.display_line(),
                hit.start.display_ch(),
                hit.text
            );
        }
        out.push('\n');
    }

    let total = total_hits(results);
    if total == 0 {
        out.push_str("No string literals found.\n");
    } else {
        let _ = writeln!(out, "{total} string literals in {files} files");
    }
    out
}

/// JSON report. Files without hits and unreadable files are left out.
pub fn render_json(results: &[FileResult]) -> Result<String, CliError> {
    let files = results
        .iter()
        .filter(|r| !r.hits().is_empty())
        .map(|r| JsonFile {
            path: r.path.display().to_string(),
            hits: r.hits(),
        })
        .collect();
    let report = JsonReport {
        files,
        total: total_hits(results),
    };
    let mut json = serde_json::to_string(&report)?;
    json.push('\n');
    Ok(json)
}

/// Per-file counters for `--verbose`, one line per readable file.
pub fn render_stats(results: &[FileResult]) -> String {
    let mut out = String::new();
    for result in results {
        let Ok(scan) = &result.outcome else {
            continue;
        };
        let summary = &scan.summary;
        let _ = write!(
            out,
            "{}: {} tokens, {} literals, {} ignored",
            result.path.display(),
            summary.tokens,
            summary.literals,
            summary.ignored
        );
        if let Some(stall) = summary.stall {
            let _ = write!(out, " (lexer stalled at line {})", stall.line + 1);
        }
        out.push('\n');
    }
    out
}
