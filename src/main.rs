use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use amaze::app::{App, MAX_SIZE, MIN_SIZE};

/// A keyboard-driven maze game for the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze side length; skips the level menu
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(MIN_SIZE as i64..=MAX_SIZE as i64))]
    size: Option<u8>,

    /// Seed for maze generation and path hints; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// File the win results are appended to
    #[arg(long, default_value = "maze_results.txt")]
    results: PathBuf,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Route tracing to a file: the terminal itself is in raw mode on the
/// alternate screen for the whole run, so nothing may log to stdout.
fn init_logging(path: &Path) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(guard)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _log_guard = match args.log_file.as_deref() {
        Some(path) => Some(init_logging(path)?),
        None => None,
    };

    let mut stdout = io::stdout();
    App::setup_terminal(&mut stdout)?;
    let outcome = App::new(args.size, args.seed, args.results).run(&mut stdout);
    App::restore_terminal(&mut stdout)?;
    outcome
}
