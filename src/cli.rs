//! Command-line interface for tui-tictactoe.

use std::path::PathBuf;

use clap::Parser;

/// m,n,k tic-tac-toe with undo/redo
///
/// Two players take turns marking cells of an M x N board; the first to line
/// up K marks horizontally, vertically or diagonally wins.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tui-tictactoe")]
#[command(version)]
pub struct Cli {
    /// Number of columns
    #[arg(value_name = "M")]
    pub m: u32,

    /// Number of rows
    #[arg(value_name = "N")]
    pub n: u32,

    /// Marks in a row needed to win
    #[arg(value_name = "K")]
    pub k: u32,

    /// Play on a mouse-driven terminal board instead of the text prompt
    #[arg(long)]
    pub fancy: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
