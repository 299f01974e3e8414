//! `strfind`: list the string literals in JavaScript sources that may need
//! translating.
//!
//! The binary is a thin wrapper over [`run`]: parse arguments into a
//! [`Config`], collect files, scan them, print a report.

mod config;
mod discovery;
mod error;
mod report;
mod runner;

use std::sync::Once;

pub use config::{
    load_ignore_file, parse_args, parse_ignore_file, Command, Config, OutputFormat, IGNORE_FILE,
};
pub use discovery::{collect_files, discover, is_excluded};
pub use error::CliError;
pub use report::{render, render_json, render_stats, render_text, total_hits};
pub use runner::{read_source, scan_file, scan_files, FileResult, FileScan};

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber that writes to stderr.
///
/// Does nothing unless `RUST_LOG` is set. `STRFIND_LOG_TREE=1` switches to
/// an indented span tree. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();

        if std::env::var("STRFIND_LOG_TREE").is_ok_and(|v| v == "1") {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Scan everything `config` selects and print the report to stdout.
///
/// Unreadable files are reported on stderr as they are found and do not
/// stop the run. Returns `true` when every file was read.
pub fn run(config: &Config) -> Result<bool, CliError> {
    let files = collect_files(config)?;
    let results = scan_files(&files, config.parallel);

    let mut all_read = true;
    for result in &results {
        if let Err(e) = &result.outcome {
            eprintln!("error: {e}");
            all_read = false;
        }
    }
    if config.verbose {
        eprint!("{}", render_stats(&results));
    }

    print!("{}", render(&results, config.format)?);
    Ok(all_read)
}
