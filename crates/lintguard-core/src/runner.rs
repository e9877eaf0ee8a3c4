//! File iteration, output, and the exit-code contract.

use std::fs;
use std::io::Write;

use anyhow::Result;

use crate::error::ReadError;
use crate::findings::Finding;
use crate::options::{OutputMode, RunOptions, RunStats};
use crate::scanner::scan_text;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Aggregate result of one run. Owned by the runner and returned to the
/// caller; never module-level state.
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub found_any: bool,
    pub had_error: bool,
    warn_only: bool,
    pub stats: RunStats,
}

impl RunOutcome {
    /// Errors dominate findings: `2` if any file failed, else `1` if any
    /// directive was found, else `0`. `--warn-only` forces `0`.
    pub fn exit_code(&self) -> i32 {
        if self.warn_only {
            return EXIT_SUCCESS;
        }
        if self.had_error {
            return EXIT_ERROR;
        }
        if self.found_any {
            return EXIT_FINDINGS;
        }
        EXIT_SUCCESS
    }
}

/// Process `paths` in input order, writing findings to `out` and per-file
/// read failures to `err`.
///
/// Plain-mode findings are emitted as soon as each file is scanned; the
/// aggregated modes (count, JSON) print once after the last file. A failing
/// file is reported and skipped, never aborting the run.
pub fn run(
    paths: &[String],
    opts: &RunOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<RunOutcome> {
    let mut outcome = RunOutcome {
        warn_only: opts.warn_only,
        ..Default::default()
    };
    let mut collected: Vec<Finding> = Vec::new();

    for path in paths {
        if opts.exclude.iter().any(|p| p.matches(path)) {
            outcome.stats.files_skipped += 1;
            continue;
        }

        // read_to_string also surfaces invalid UTF-8 as an io::Error, which
        // covers the binary-content case. The handle is dropped here, before
        // the next file is opened.
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(source) => {
                let read_err = ReadError {
                    path: path.clone(),
                    source,
                };
                writeln!(err, "{read_err}")?;
                outcome.had_error = true;
                outcome.stats.files_failed += 1;
                continue;
            }
        };
        outcome.stats.files_scanned += 1;

        let mut findings = scan_text(path, &text, &opts.linters);
        findings.retain(|f| !opts.allow.iter().any(|p| p.matches(f.directive)));
        if findings.is_empty() {
            continue;
        }
        outcome.found_any = true;

        if opts.fail_fast {
            outcome.stats.findings_total += 1;
            emit(&findings[..1], opts.output, out)?;
            return Ok(outcome);
        }
        outcome.stats.findings_total += findings.len();

        match opts.output {
            OutputMode::Plain => emit(&findings, OutputMode::Plain, out)?,
            OutputMode::Quiet => {}
            OutputMode::Count | OutputMode::Json => collected.extend(findings),
        }
    }

    match opts.output {
        OutputMode::Count => writeln!(out, "{}", collected.len())?,
        OutputMode::Json => emit(&collected, OutputMode::Json, out)?,
        OutputMode::Plain | OutputMode::Quiet => {}
    }

    Ok(outcome)
}

fn emit(findings: &[Finding], mode: OutputMode, out: &mut dyn Write) -> Result<()> {
    match mode {
        OutputMode::Plain => {
            for finding in findings {
                writeln!(out, "{finding}")?;
            }
        }
        OutputMode::Count => writeln!(out, "{}", findings.len())?,
        OutputMode::Json => {
            serde_json::to_writer(&mut *out, findings)?;
            writeln!(out)?;
        }
        OutputMode::Quiet => {}
    }
    Ok(())
}
