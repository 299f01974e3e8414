//! Command-line configuration and the `.strfindignore` file.

use std::path::{Path, PathBuf};

use crate::CliError;

/// Name of the per-root exclusion file.
pub const IGNORE_FILE: &str = ".strfindignore";

/// How results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for one scan run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Files and directories to scan. Never empty after parsing.
    pub paths: Vec<PathBuf>,
    /// Path substrings; a file whose path contains any of them is skipped.
    pub exclusions: Vec<String>,
    /// Read `.strfindignore` from each directory argument.
    pub use_ignore_file: bool,
    pub format: OutputFormat,
    /// Scan files on the rayon thread pool.
    pub parallel: bool,
    /// Print per-file statistics to stderr.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            paths: Vec::new(),
            exclusions: Vec::new(),
            use_ignore_file: true,
            format: OutputFormat::Text,
            parallel: true,
            verbose: false,
        }
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Scan(Config),
    Help,
    Version,
}

/// Parse arguments (without the program name).
///
/// Options and paths may be mixed in any order. `--help` and `--version`
/// win over everything else on the line.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut config = Config::default();

    for arg in args {
        if let Some(substr) = arg.strip_prefix("--exclude=") {
            if substr.is_empty() {
                return Err(CliError::Usage("--exclude needs a value".to_owned()));
            }
            config.exclusions.push(substr.to_owned());
            continue;
        }

        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--no-ignore-file" => config.use_ignore_file = false,
            "--json" => config.format = OutputFormat::Json,
            "--no-parallel" => config.parallel = false,
            "-v" | "--verbose" => config.verbose = true,
            other if other.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option '{other}'")));
            }
            path => config.paths.push(PathBuf::from(path)),
        }
    }

    if config.paths.is_empty() {
        config.paths.push(PathBuf::from("."));
    }
    Ok(Command::Scan(config))
}

/// Exclusion substrings listed in `<root>/.strfindignore`.
///
/// A missing or unreadable file yields no entries.
pub fn load_ignore_file(root: &Path) -> Vec<String> {
    let ignore_file = root.join(IGNORE_FILE);
    match std::fs::read_to_string(&ignore_file) {
        Ok(content) => parse_ignore_file(&content),
        Err(_) => Vec::new(),
    }
}

/// Trimmed entries of an ignore file, skipping blank lines and `#` comments.
pub fn parse_ignore_file(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
