//! Core library for detecting inline lint-disable directives.
//!
//! Design points:
//! - Fixed pattern table (yamllint, pylint, mypy suppressions only), compiled
//!   once into statics. Bare `disable` forms use precise trailing rules rather
//!   than lookahead, so `enable` variants can never match.
//! - Anchor prefilter (Aho-Corasick, ASCII case-insensitive) rejects lines
//!   before any regex runs.
//! - The scanner is pure (text in, findings out); all I/O and the exit-code
//!   policy (`2` error, `1` findings, `0` clean) live in the runner, which
//!   threads an explicit `RunOutcome` instead of global state.

mod error;
mod findings;
mod options;
mod patterns;
mod prefilter;
mod runner;
mod scanner;

pub use error::{LinterListError, ReadError};
pub use findings::Finding;
pub use options::{OutputMode, RunOptions, RunStats};
pub use patterns::{DirectivePattern, Tool, PATTERNS};
pub use runner::{run, RunOutcome, EXIT_ERROR, EXIT_FINDINGS, EXIT_SUCCESS};
pub use scanner::{scan_line, scan_text};
