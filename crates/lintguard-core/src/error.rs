//! Error types for the core crate.

use std::io;

use thiserror::Error;

/// Failure to read one input file as UTF-8 text. Reported on stderr; the run
/// continues with the remaining files and exits 2 at the end.
#[derive(Debug, Error)]
#[error("error reading {path}: {source}")]
pub struct ReadError {
    pub path: String,
    #[source]
    pub source: io::Error,
}

/// Invalid `--linters` value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinterListError {
    #[error("unknown linter: {0} (expected yamllint, pylint, mypy)")]
    Unknown(String),
    #[error("no linters specified")]
    Empty,
}
