//! Scan execution over a list of files.
//!
//! Files are independent, so they are scanned on the rayon pool by default.
//! One [`Scanner`] is shared by every worker; all per-file state lives in the
//! token stream each scan builds for itself.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use strfind_js::JsMode;
use strfind_scan::{Hit, ScanSummary, Scanner};

use crate::CliError;

/// Hits and counters for one successfully read file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileScan {
    pub hits: Vec<Hit>,
    pub summary: ScanSummary,
}

/// Outcome of scanning a single file.
#[derive(Debug)]
pub struct FileResult {
    pub path: PathBuf,
    pub outcome: Result<FileScan, CliError>,
}

impl FileResult {
    /// Hits of the file, empty when it could not be read.
    pub fn hits(&self) -> &[Hit] {
        match &self.outcome {
            Ok(scan) => &scan.hits,
            Err(_) => &[],
        }
    }
}

/// Read a source file, mapping failures to a [`CliError::Read`].
pub fn read_source(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::read(path, e))
}

/// Scan one file from disk.
pub fn scan_file(scanner: &Scanner<JsMode>, path: &Path) -> FileResult {
    let outcome = read_source(path).map(|text| {
        let (hits, summary) = scanner.scan_with_summary(&text);
        if let Some(stall) = summary.stall {
            tracing::warn!(
                path = %path.display(),
                line = stall.line,
                pos = stall.pos,
                "scan ended early"
            );
        }
        FileScan { hits, summary }
    });
    FileResult {
        path: path.to_path_buf(),
        outcome,
    }
}

/// Scan every file, returning results sorted by path.
///
/// A file that cannot be read gets an error outcome; the other files are
/// still scanned.
pub fn scan_files(files: &[PathBuf], parallel: bool) -> Vec<FileResult> {
    tracing::debug!(files = files.len(), parallel, "scanning files");
    let scanner = Scanner::new(JsMode);

    let mut results: Vec<FileResult> = if parallel {
        files
            .par_iter()
            .map(|path| scan_file(&scanner, path))
            .collect()
    } else {
        files.iter().map(|path| scan_file(&scanner, path)).collect()
    };

    results.sort_by(|a, b| a.path.cmp(&b.path));
    results
}
