//! # CLI Layer
//!
//! This module is **one possible UI client** for roster. It is the only place that:
//! - Parses command-line flags
//! - Reads stdin and writes stdout
//! - Installs the tracing subscriber
//!
//! `run()` resolves the data file, opens the API over a `CsvFileStore` and hands
//! both standard streams to [`shell::Shell`]. The shell itself is generic over
//! `BufRead`/`Write` so its tests drive it with in-memory buffers.

mod print;
mod setup;
mod shell;

use clap::Parser;
use roster::api::RosterApi;
use roster::config::RosterConfig;
use roster::error::Result;
use roster::store::fs::CsvFileStore;
use setup::Cli;
use shell::Shell;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let data_file = resolve_data_file(&cli)?;
    info!(path = %data_file.display(), "opening roster");

    let api = RosterApi::open(CsvFileStore::new(data_file))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(api, stdin.lock(), stdout.lock()).run()
}

/// `--file` wins over `roster.json`, which wins over the built-in default.
fn resolve_data_file(cli: &Cli) -> Result<PathBuf> {
    if let Some(file) = &cli.file {
        return Ok(file.clone());
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    Ok(RosterConfig::load(cwd)?.data_file)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}
