use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use glob::Pattern;
use lintguard_core::{run, OutputMode, RunOptions, Tool, EXIT_ERROR};
use tracing::{error, info};

/// Command-line entry (clap-based).
#[derive(Parser, Debug)]
#[command(
    name = "assert-no-inline-lint-disables",
    version,
    about = "Assert that files contain no inline lint-disable directives."
)]
struct Cli {
    /// One or more file paths to scan.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<String>,

    /// Comma-separated linters to check (default: yamllint,pylint,mypy).
    #[arg(long, value_name = "LINTERS")]
    linters: Option<String>,

    /// Glob pattern to exclude files (repeatable).
    #[arg(long, value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Allow directive pattern (repeatable).
    #[arg(long, value_name = "PATTERN")]
    allow: Vec<String>,

    /// Suppress output, exit code only.
    #[arg(long, group = "output")]
    quiet: bool,

    /// Print finding count only.
    #[arg(long, group = "output")]
    count: bool,

    /// Output findings as JSON.
    #[arg(long, group = "output")]
    json: bool,

    /// Exit on first finding.
    #[arg(long, group = "behavior")]
    fail_fast: bool,

    /// Always exit 0, report only.
    #[arg(long, group = "behavior")]
    warn_only: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let opts = match build_options(&cli) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(EXIT_ERROR as u8);
        }
    };

    info!(files = cli.files.len(), "starting scan");

    let stdout = io::stdout();
    let stderr = io::stderr();
    let outcome = match run(&cli.files, &opts, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = %e, "run failed");
            return ExitCode::from(EXIT_ERROR as u8);
        }
    };

    info!(
        files_scanned = outcome.stats.files_scanned,
        files_failed = outcome.stats.files_failed,
        findings = outcome.stats.findings_total,
        "scan finished"
    );

    ExitCode::from(outcome.exit_code() as u8)
}

/// Logging goes to stderr so stdout stays reserved for findings. Level is
/// `RUST_LOG`-controlled and defaults to warn.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn build_options(cli: &Cli) -> Result<RunOptions> {
    let mut opts = RunOptions::default();
    if let Some(list) = &cli.linters {
        opts.linters = Tool::parse_list(list)?;
    }
    opts.exclude = compile_globs(&cli.exclude)?;
    opts.allow = compile_globs(&cli.allow)?;
    opts.output = if cli.quiet {
        OutputMode::Quiet
    } else if cli.count {
        OutputMode::Count
    } else if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Plain
    };
    opts.fail_fast = cli.fail_fast;
    opts.warn_only = cli.warn_only;
    Ok(opts)
}

fn compile_globs(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("invalid glob pattern: {p}")))
        .collect()
}
