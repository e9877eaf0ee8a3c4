//! Run options and statistics.

use glob::Pattern;

use crate::patterns::Tool;

/// Output mode for findings. Modes are mutually exclusive at the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One `path:line:tool:directive` line per finding.
    #[default]
    Plain,
    /// No output, exit code only.
    Quiet,
    /// Total finding count only.
    Count,
    /// JSON array of findings.
    Json,
}

/// Options for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Tools whose directives are reported.
    pub linters: Vec<Tool>,
    /// Paths matching any of these globs are skipped without being read.
    pub exclude: Vec<Pattern>,
    /// Findings whose canonical directive matches any of these globs are
    /// dropped.
    pub allow: Vec<Pattern>,
    pub output: OutputMode,
    /// Stop after emitting the first finding.
    pub fail_fast: bool,
    /// Report findings but always exit 0.
    pub warn_only: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            linters: Tool::ALL.to_vec(),
            exclude: Vec::new(),
            allow: Vec::new(),
            output: OutputMode::Plain,
            fail_fast: false,
            warn_only: false,
        }
    }
}

/// Per-run statistics (for the CLI's finish log line).
#[derive(Debug, Default, Clone)]
pub struct RunStats {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub findings_total: usize,
}
