//! TUI tic-tac-toe (workspace facade crate).
//!
//! Re-exports the workspace crates under `tui_tictactoe::{core,input,term,types}`
//! and hosts the two front ends plus the command line.

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;

pub mod basic;
pub mod cli;
pub mod fancy;
