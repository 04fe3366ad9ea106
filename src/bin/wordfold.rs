//! Wordfold CLI - reduce word expressions from the command line
//!
//! Reduces the expression given as arguments, or each line of stdin when
//! no arguments are given.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use wordfold::{Reducer, ReducerConfig};

#[derive(Parser)]
#[command(name = "wordfold")]
#[command(version, about = "Reduce word expressions using + (append) and - (strike)", long_about = None)]
struct Cli {
    /// Expression words, e.g. `hello + world - llowo`
    expression: Vec<String>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every applied step before the result
    #[arg(long, conflicts_with = "json")]
    explain: bool,

    /// Print the traced reduction as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => ReducerConfig::load(path)?,
        None => ReducerConfig::default(),
    };
    let reducer = Reducer::new(config);
    init_tracing(reducer.config().debug);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    execute(
        &cli,
        &reducer,
        stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}

/// Reduce the positional expression, or every non-blank line of `input`
/// when there is none. Returns `Ok(false)` when any expression failed.
fn execute(
    cli: &Cli,
    reducer: &Reducer,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    if !cli.expression.is_empty() {
        let expression = cli.expression.join(" ");
        return emit(reducer, &expression, cli, out, err);
    }

    let mut all_ok = true;
    for line in input.lines() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        all_ok &= emit(reducer, &line, cli, &mut *out, &mut *err)?;
    }
    Ok(all_ok)
}

fn emit(
    reducer: &Reducer,
    expression: &str,
    cli: &Cli,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    let reduction = match reducer.trace(expression) {
        Ok(reduction) => reduction,
        Err(e) => {
            tracing::debug!(expression, error = %e, "reduction failed");
            writeln!(err, "error: {e}")?;
            return Ok(false);
        }
    };

    if cli.json {
        serde_json::to_writer(&mut *out, &reduction).context("Failed to encode JSON")?;
        writeln!(out)?;
        return Ok(true);
    }

    if cli.explain {
        for step in &reduction.steps {
            writeln!(
                out,
                "  {} {} {} => {}",
                step.left, step.operator, step.right, step.result
            )?;
        }
    }
    writeln!(out, "{}", reduction.value)?;
    Ok(true)
}

fn init_tracing(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}
