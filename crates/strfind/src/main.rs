//! strfind CLI

use strfind::{init_tracing, parse_args, run, Command};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match parse_args(&args) {
        Ok(Command::Scan(config)) => config,
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Ok(Command::Version) => {
            println!("strfind {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Run 'strfind --help' for usage.");
            std::process::exit(1);
        }
    };

    match run(&config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("strfind - find string literals in JavaScript sources");
    println!();
    println!("Usage: strfind [options] [paths...]");
    println!();
    println!("Scans .js files under each path (default: current directory) and");
    println!("lists string literals that are not module paths, property names,");
    println!("\"use strict\" directives, error messages or console messages.");
    println!();
    println!("Options:");
    println!("  --exclude=<substr>   Skip files whose path contains <substr> (repeatable)");
    println!("  --no-ignore-file     Do not read .strfindignore from directory arguments");
    println!("  --json               Print hits as JSON");
    println!("  --no-parallel        Scan files one at a time");
    println!("  -v, --verbose        Print per-file statistics to stderr");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version");
    println!();
    println!("Ignore files:");
    println!("  A .strfindignore file in a scanned directory lists one path substring");
    println!("  per line. Blank lines and lines starting with # are skipped.");
    println!("  Hidden entries, node_modules/ and target/ are always skipped.");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=strfind_scan=debug   Per-file scan summaries");
    println!("  STRFIND_LOG_TREE=1            Hierarchical log output");
}
