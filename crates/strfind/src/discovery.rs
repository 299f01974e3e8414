//! Source file discovery.
//!
//! Finds the JavaScript files under the paths given on the command line,
//! dropping any whose path contains an exclusion substring.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{load_ignore_file, Config};
use crate::CliError;

/// Extension of files that are scanned.
const SOURCE_EXTENSION: &str = "js";

/// Whether `path` contains any of the `exclusions` substrings.
pub fn is_excluded(path: &Path, exclusions: &[String]) -> bool {
    let path = path.to_string_lossy();
    exclusions.iter().any(|ex| path.contains(ex.as_str()))
}

/// Discover source files in a file or directory, sorted by path.
///
/// A file is kept when it has a `.js` extension. A directory is walked
/// recursively, skipping hidden entries and `node_modules`, `.git` and
/// `target`. Symlinks to files are followed; symlinks to directories are
/// not, so link cycles cannot make the walk loop. Anything else yields
/// nothing.
pub fn discover(path: &Path, exclusions: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if path.is_file() {
        if is_source(path) && !is_excluded(path, exclusions) {
            files.push(path.to_path_buf());
        }
    } else if path.is_dir() {
        discover_recursive(path, exclusions, &mut files);
        files.sort();
    }
    files
}

fn discover_recursive(dir: &Path, exclusions: &[String], files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        tracing::debug!(dir = %dir.display(), "cannot read directory");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                continue;
            }
        }
        if is_excluded(&path, exclusions) {
            tracing::trace!(path = %path.display(), "excluded");
            continue;
        }

        if file_type.is_symlink() {
            if path.is_file() && is_source(&path) {
                files.push(path);
            } else {
                tracing::trace!(path = %path.display(), "skipping symlink");
            }
        } else if file_type.is_dir() {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if matches!(name, "target" | "node_modules" | ".git") {
                    continue;
                }
            }
            discover_recursive(&path, exclusions, files);
        } else if is_source(&path) {
            files.push(path);
        }
    }
}

fn is_source(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == SOURCE_EXTENSION)
}

/// All files selected by `config`, sorted and deduplicated.
///
/// Each directory argument contributes the entries of its own
/// `.strfindignore` on top of the `--exclude` substrings. A path argument
/// that does not exist is an error.
pub fn collect_files(config: &Config) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();

    for path in &config.paths {
        let metadata = fs::metadata(path).map_err(|e| CliError::read(path, e))?;

        if metadata.is_dir() && config.use_ignore_file {
            let mut exclusions = config.exclusions.clone();
            exclusions.extend(load_ignore_file(path));
            files.extend(discover(path, &exclusions));
        } else {
            files.extend(discover(path, &config.exclusions));
        }
    }

    files.sort();
    files.dedup();
    tracing::debug!(files = files.len(), "collected source files");
    Ok(files)
}
