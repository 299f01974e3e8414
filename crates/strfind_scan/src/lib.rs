//! String literal scanning.
//!
//! Finds the string literals in a buffer that are worth a second look,
//! skipping boilerplate such as module paths, property names, directive
//! prologues, and error or log messages.
//!
//! # Pipeline
//!
//! ```text
//! &str ──► TokenStream<M> ──► string literal? ──► classify() ──► Vec<Hit>
//!                                  │ no                │ ignorable
//!                                  ▼                   ▼
//!                               dropped             dropped
//! ```
//!
//! Scanning is a pure function of the text and the lexical mode, so
//! independent buffers can be scanned on any number of threads.

mod classifier;
mod hit;
mod scanner;

pub use classifier::{classify, is_ignorable, IgnoreRule};
pub use hit::{Hit, Position};
pub use scanner::{scan, ScanSummary, Scanner};
