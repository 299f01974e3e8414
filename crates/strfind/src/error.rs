use std::io;
use std::path::{Path, PathBuf};

/// Errors surfaced by the `strfind` command line.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad command line.
    #[error("{0}")]
    Usage(String),

    /// A path argument or source file could not be read.
    #[error("{}", read_message(.path, .source))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot encode JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn read(path: &Path, source: io::Error) -> Self {
        CliError::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn read_message(path: &Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}
