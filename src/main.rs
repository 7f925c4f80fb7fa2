use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use minicalc::repl::{DEFAULT_PROMPT, SessionOptions, run_session};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// minicalc evaluates integer assignment statements such as `x = 3 + 4 * 2;`,
/// printing every variable after each line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads statements from a file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// The prompt shown before each line of interactive input.
    #[arg(short, long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Suppresses the prompt.
    #[arg(short, long)]
    quiet: bool,
}

/// Installs the log subscriber. Filtering follows `RUST_LOG` and defaults to
/// warnings, which include the cause of every failed line.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                    .with_target(false))
                                  .with(filter)
                                  .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut stdout = io::stdout().lock();
    let summary = if let Some(path) = &args.file {
        let file = File::open(path).with_context(|| {
                                       format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                               path.display())
                                   })?;
        run_session(BufReader::new(file), &mut stdout, &SessionOptions { prompt: None })?
    } else {
        let prompt = (!args.quiet).then_some(args.prompt);
        run_session(io::stdin().lock(), &mut stdout, &SessionOptions { prompt })?
    };

    tracing::info!(lines = summary.lines_run,
                   failed = summary.lines_failed,
                   "session finished");
    Ok(())
}
