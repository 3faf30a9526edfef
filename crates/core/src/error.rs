//! Error types returned by the game engine.
//!
//! Every recoverable condition is a value; only history/board desync panics.

use derive_more::{Display, Error};

use crate::types::MAX_BOARD_DIMENSION;

/// Why a mark was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum MarkError {
    #[display("position is out of bounds")]
    PositionOutOfBounds,
    #[display("position is already marked")]
    PositionAlreadyMarked,
    #[display("game is already over")]
    GameAlreadyOver,
}

/// Why an unmark was rejected.
///
/// Only history replay unmarks cells, so seeing one of these outside tests
/// means the history and the board disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum UnmarkError {
    #[display("position is out of bounds")]
    PositionOutOfBounds,
    #[display("position is not marked by that player")]
    PositionNotMarkedByPlayer,
}

/// Invalid (m, n, k) parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("board needs at least one column and one row (got {columns}x{rows})")]
    EmptyBoard { columns: u32, rows: u32 },
    #[display("board dimensions {columns}x{rows} exceed the limit of {}", MAX_BOARD_DIMENSION)]
    BoardTooLarge { columns: u32, rows: u32 },
    #[display("win condition must be at least 2 (got {_0})")]
    WinConditionTooSmall(#[error(not(source))] u32),
}
