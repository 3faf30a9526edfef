//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, text front end).
//!
//! # Players
//!
//! An m,n,k-game is played by exactly two players:
//!
//! | Id | Name | Glyph |
//! |----|------|-------|
//! | 0 | Player 1 | `X` |
//! | 1 | Player 2 | `O` |
//!
//! The "no player" sentinel of an unowned cell is expressed as `None`.
//!
//! # Fancy Board Layout
//!
//! Cell geometry of the mouse-driven board, in board pixels (a pixel is one
//! terminal row tall and two terminal columns wide):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MARK_SIZE` | 5 | Width/height of a drawn marker |
//! | `PAD_SIZE` | 1 | Gap between marker and grid line |
//! | `BORDER_SIZE` | 1 | Grid line thickness |
//! | `CELL_SIZE` | 8 | Full cell pitch (mark + 2 pads + border) |
//! | `INFO_AREA_SIZE` | 2 | Status rows above the board |
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{BoardPosition, GameCommand, PlayerId};
//!
//! let first = PlayerId::FIRST;
//! assert_eq!(first.next(), PlayerId::SECOND);
//! assert_eq!(first.next().next(), first);
//! assert_eq!(first.glyph(), 'X');
//!
//! let pos = BoardPosition::new(2, 1);
//! assert_eq!(pos.to_string(), "(2, 1)");
//!
//! assert_eq!(GameCommand::from_str("undo"), Some(GameCommand::Undo));
//! ```

use std::fmt;

/// Number of players taking turns.
pub const PLAYER_COUNT: u8 = 2;

/// Upper bound on either board dimension.
///
/// Keeps `columns * rows` comfortably inside `usize` and the fancy view's
/// `u16` pixel space addressable after scrolling.
pub const MAX_BOARD_DIMENSION: u32 = 4096;

/// Width/height of a drawn player marker.
pub const MARK_SIZE: u16 = 5;

/// Padding between a marker and the cell border.
pub const PAD_SIZE: u16 = 1;

/// Thickness of the grid lines between cells.
pub const BORDER_SIZE: u16 = 1;

/// Cell pitch of the fancy board.
pub const CELL_SIZE: u16 = MARK_SIZE + 2 * PAD_SIZE + BORDER_SIZE;

/// Rows reserved above the board for the status banner and hover info.
pub const INFO_AREA_SIZE: u16 = 2;

/// Identifier of one of the two players.
///
/// Valid identifiers are `0` and `1`; turn order rotates between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first (`X`).
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who moves second (`O`).
    pub const SECOND: PlayerId = PlayerId(1);

    /// Build a player id from its index.
    ///
    /// Returns `None` for indices outside `0..PLAYER_COUNT`.
    pub fn new(index: u8) -> Option<Self> {
        (index < PLAYER_COUNT).then_some(PlayerId(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// The player whose turn follows this one.
    pub fn next(self) -> Self {
        PlayerId((self.0 + 1) % PLAYER_COUNT)
    }

    /// The player whose turn preceded this one.
    pub fn prev(self) -> Self {
        PlayerId((self.0 + PLAYER_COUNT - 1) % PLAYER_COUNT)
    }

    /// Display name ("Player 1", "Player 2").
    pub fn name(self) -> &'static str {
        match self.0 {
            0 => "Player 1",
            _ => "Player 2",
        }
    }

    /// Board glyph ('X' or 'O').
    pub fn glyph(self) -> char {
        match self.0 {
            0 => 'X',
            _ => 'O',
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.glyph())
    }
}

/// Name of a cell owner, "Nobody" for an unowned cell.
pub fn player_name(owner: Option<PlayerId>) -> &'static str {
    owner.map(PlayerId::name).unwrap_or("Nobody")
}

/// Glyph for a cell owner, a blank for an unowned cell.
pub fn player_glyph(owner: Option<PlayerId>) -> char {
    owner.map(PlayerId::glyph).unwrap_or(' ')
}

/// A cell on the game board
///
/// - `None`: unowned
/// - `Some(PlayerId)`: marked by that player
pub type Cell = Option<PlayerId>;

/// A cell coordinate: `x` is the column (left to right), `y` the row (top to bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoardPosition {
    pub x: u32,
    pub y: u32,
}

impl BoardPosition {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for BoardPosition {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// Derived game status
///
/// - **Active**: marks can still be placed
/// - **Won**: a player completed a winning run
/// - **Draw**: every cell is marked and nobody won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Active,
    Won,
    Draw,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Active => "active",
            GameStatus::Won => "won",
            GameStatus::Draw => "draw",
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

/// Commands produced by keyboard input in the terminal front end.
///
/// Marking is driven by the mouse and carries a position, so it is not a
/// key command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Revert the most recent mark
    Undo,
    /// Re-apply the most recently reverted mark
    Redo,
    /// Clear the board and restart with the first player
    Reset,
    /// Leave the game
    Quit,
    /// Scroll the board view by whole cells
    Pan { dx: i8, dy: i8 },
}

impl GameCommand {
    /// Parse a non-positional command name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("Redo"), Some(GameCommand::Redo));
    /// assert_eq!(GameCommand::from_str("exit"), Some(GameCommand::Quit));
    /// assert_eq!(GameCommand::from_str("panLeft"), Some(GameCommand::Pan { dx: -1, dy: 0 }));
    /// assert_eq!(GameCommand::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "undo" => Some(GameCommand::Undo),
            "redo" => Some(GameCommand::Redo),
            "reset" => Some(GameCommand::Reset),
            "quit" | "exit" => Some(GameCommand::Quit),
            "panleft" => Some(GameCommand::Pan { dx: -1, dy: 0 }),
            "panright" => Some(GameCommand::Pan { dx: 1, dy: 0 }),
            "panup" => Some(GameCommand::Pan { dx: 0, dy: -1 }),
            "pandown" => Some(GameCommand::Pan { dx: 0, dy: 1 }),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::Undo => "undo",
            GameCommand::Redo => "redo",
            GameCommand::Reset => "reset",
            GameCommand::Quit => "quit",
            GameCommand::Pan { dx, .. } if *dx < 0 => "panLeft",
            GameCommand::Pan { dx, .. } if *dx > 0 => "panRight",
            GameCommand::Pan { dy, .. } if *dy < 0 => "panUp",
            GameCommand::Pan { .. } => "panDown",
        }
    }
}
