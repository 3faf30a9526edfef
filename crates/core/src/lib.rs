//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the m,n,k-game rules, win detection, and the undo/redo
//! history. It has **no dependencies** on terminals, input devices, or I/O, making it:
//!
//! - **Deterministic**: the same calls always produce the same board
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: drives the text prompt and the mouse-driven terminal board alike
//!
//! # Module Structure
//!
//! - [`board`]: m×n grid, marking/unmarking, and directional win detection
//! - [`history`]: generic linear undo/redo ledger driven through [`Reversible`]
//! - [`simulation`]: turn order, derived [`GameStatus`](types::GameStatus), and the public gameplay surface
//! - [`error`]: rejected marks/unmarks and invalid board parameters
//!
//! # Game Rules
//!
//! - Two players alternate, the first player (`X`) moves first
//! - A player wins with `k` consecutive marks horizontally, vertically, or diagonally
//! - A full board with no winner is a draw
//! - Undo reverts the latest mark and hands the turn back; redo re-applies it
//! - Marking after an undo discards whatever could have been redone
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::Simulation;
//! use tui_tictactoe_types::{BoardPosition, GameStatus, PlayerId};
//!
//! // Classic 3x3 tic-tac-toe
//! let mut game = Simulation::new(3, 3, 3).unwrap();
//!
//! for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
//!     game.mark(BoardPosition::new(x, y)).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won);
//! assert_eq!(game.winning_player(), Some(PlayerId::FIRST));
//!
//! // Take back the winning mark
//! assert!(game.undo());
//! assert_eq!(game.status(), GameStatus::Active);
//! assert_eq!(game.active_player(), Some(PlayerId::FIRST));
//! ```

pub mod board;
pub mod error;
pub mod history;
pub mod simulation;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{ConfigError, MarkError, UnmarkError};
pub use history::{History, Reversible};
pub use simulation::{MoveObserver, PlayerMove, Simulation};
