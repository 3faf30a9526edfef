//! Tic-tac-toe runner (default binary).
//!
//! `tui-tictactoe M N K` plays on a text prompt; `--fancy` switches to the
//! mouse-driven terminal board.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_tictactoe::basic::BasicGame;
use tui_tictactoe::cli::Cli;
use tui_tictactoe::core::Simulation;
use tui_tictactoe::fancy;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let sim = Simulation::new(cli.m, cli.n, cli.k).with_context(|| {
        format!(
            "invalid board parameters M={} N={} K={} (see --help)",
            cli.m, cli.n, cli.k
        )
    })?;
    info!(m = cli.m, n = cli.n, k = cli.k, fancy = cli.fancy, "starting");

    if cli.fancy {
        fancy::run(sim)
    } else {
        let mut game = BasicGame::new(
            sim,
            std::io::stdin().lock(),
            std::io::stdout(),
            std::io::stderr(),
        );
        game.run()
    }
}

/// Logs are filtered by `RUST_LOG` (default `warn`).
///
/// The text prompt logs to stderr unless a log file is given. The terminal
/// board owns the screen, so it only logs to a file.
fn init_tracing(cli: &Cli) -> Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None if !cli.fancy => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}
