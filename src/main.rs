//! fibgold - Fibonacci sequence explorer
//!
//! Prints the Fibonacci sequence and writes two HTML charts: growth against
//! φⁿ/√5 on a log scale, and convergence of consecutive ratios to φ.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use fibgold::commands::Commands;
use fibgold::common::{config::Config, logging};
use fibgold::{cli, Result};

#[derive(Parser)]
#[command(name = "fibgold", about = "Fibonacci sequence and golden ratio explorer")]
#[command(version, long_about = None)]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::dispatch(
        cli.command.unwrap_or_default(),
        &config,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}
