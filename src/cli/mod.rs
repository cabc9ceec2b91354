//! CLI support for fql-builder
//!
//! Provides programmatic access to the `fql` CLI functionality for embedding
//! in other tools.

mod check;
mod docs;

pub use check::{CheckOptions, CheckReport, Issue, check_document, execute_check};
pub use docs::{get_doc_category, get_docs_overview};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// JSON parsing error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No input provided
    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,

    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'fql docs' to see available categories.")]
    UnknownCategory(String),

    /// The checked document has structural issues
    #[error("{0} issue(s) found")]
    Issues(usize),
}
