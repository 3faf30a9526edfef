//! Simulation module - the gameplay surface front ends talk to
//!
//! Binds a [`Board`] and a [`History`] of [`PlayerMove`]s together with turn
//! order and the derived [`GameStatus`]. Every state change goes through
//! `mark`, `undo`, `redo` or `reset`, and each of them recomputes the status
//! afterwards.

use tracing::{debug, info};

use crate::board::Board;
use crate::error::{ConfigError, MarkError};
use crate::history::{History, Reversible};
use crate::types::{BoardPosition, GameStatus, PlayerId};

/// One accepted mark, as recorded in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerMove {
    pub player: PlayerId,
    pub position: BoardPosition,
}

/// Front-end hook notified after history navigation.
///
/// The simulation has already updated the board, turn and status when these
/// run; implementors only add presentation (printing, redrawing).
pub trait MoveObserver {
    fn on_after_undo(&mut self, _undone: &PlayerMove) {}

    fn on_after_redo(&mut self, _redone: &PlayerMove) {}
}

/// Observer that ignores every notification.
impl MoveObserver for () {}

/// Replays history items onto the board and turn order.
struct Replay<'a> {
    board: &'a mut Board,
    active_player: &'a mut PlayerId,
}

impl Reversible<PlayerMove> for Replay<'_> {
    fn apply_undo(&mut self, item: &PlayerMove) {
        if let Err(err) = self.board.unmark(item.player, item.position) {
            panic!("history out of sync with board: cannot undo {item:?}: {err}");
        }
        *self.active_player = self.active_player.prev();
    }

    fn apply_redo(&mut self, item: &PlayerMove) {
        if let Err(err) = self.board.mark(item.player, item.position) {
            panic!("history out of sync with board: cannot redo {item:?}: {err}");
        }
        *self.active_player = self.active_player.next();
    }
}

/// A two-player m,n,k game with undo/redo
#[derive(Debug, Clone)]
pub struct Simulation {
    board: Board,
    history: History<PlayerMove>,
    active_player: PlayerId,
    status: GameStatus,
    /// Bumped on every state change; lets renderers skip identical frames.
    revision: u64,
}

impl Simulation {
    /// Start a game on an `m` x `n` board where `k` in a row wins.
    pub fn new(m: u32, n: u32, k: u32) -> Result<Self, ConfigError> {
        let mut sim = Self {
            board: Board::new(m, n, k)?,
            history: History::new(),
            active_player: PlayerId::FIRST,
            status: GameStatus::Active,
            revision: 0,
        };
        sim.update_game_status();
        Ok(sim)
    }

    /// Mark `position` for the active player.
    ///
    /// On failure nothing changes.
    pub fn mark(&mut self, position: BoardPosition) -> Result<(), MarkError> {
        let player = self.active_player;
        if let Err(err) = self.board.mark(player, position) {
            debug!(player = player.index(), %position, %err, "mark rejected");
            return Err(err);
        }

        self.history.add(PlayerMove { player, position });
        self.active_player = player.next();
        self.update_game_status();
        self.revision += 1;
        debug!(player = player.index(), %position, status = self.status.as_str(), "marked");
        Ok(())
    }

    /// Revert the most recent mark. Returns false if there was none.
    pub fn undo(&mut self) -> bool {
        self.undo_with(&mut ())
    }

    /// Re-apply the most recently reverted mark. Returns false if there was none.
    pub fn redo(&mut self) -> bool {
        self.redo_with(&mut ())
    }

    /// [`undo`](Self::undo), then tell `observer` which move was reverted.
    pub fn undo_with(&mut self, observer: &mut dyn MoveObserver) -> bool {
        let mut replay = Replay {
            board: &mut self.board,
            active_player: &mut self.active_player,
        };
        if !self.history.undo(&mut replay) {
            return false;
        }

        self.update_game_status();
        self.revision += 1;
        if let Some(undone) = self.history.next_redo() {
            debug!(player = undone.player.index(), position = %undone.position, "undo");
            observer.on_after_undo(undone);
        }
        true
    }

    /// [`redo`](Self::redo), then tell `observer` which move was re-applied.
    pub fn redo_with(&mut self, observer: &mut dyn MoveObserver) -> bool {
        let mut replay = Replay {
            board: &mut self.board,
            active_player: &mut self.active_player,
        };
        if !self.history.redo(&mut replay) {
            return false;
        }

        self.update_game_status();
        self.revision += 1;
        if let Some(redone) = self.history.applied().last() {
            debug!(player = redone.player.index(), position = %redone.position, "redo");
            observer.on_after_redo(redone);
        }
        true
    }

    /// Clear the board and history and give the first player the turn.
    pub fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
        self.active_player = PlayerId::FIRST;
        self.update_game_status();
        self.revision += 1;
        debug!("reset");
    }

    /// The single place the status is derived from the board.
    fn update_game_status(&mut self) {
        let status = if self.board.winning_player().is_some() {
            GameStatus::Won
        } else if self.board.is_filled() {
            GameStatus::Draw
        } else {
            GameStatus::Active
        };

        if status != self.status {
            info!(from = self.status.as_str(), to = status.as_str(), "game status changed");
        }
        self.status = status;
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player to move, or `None` once the game has ended.
    pub fn active_player(&self) -> Option<PlayerId> {
        (self.status == GameStatus::Active).then_some(self.active_player)
    }

    /// Winner, or `None` unless the game is won.
    pub fn winning_player(&self) -> Option<PlayerId> {
        if self.status != GameStatus::Won {
            return None;
        }
        self.board.winning_player()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn available_undos(&self) -> usize {
        self.history.available_undos()
    }

    pub fn available_redos(&self) -> usize {
        self.history.available_redos()
    }

    /// Moves currently on the board, oldest first.
    pub fn moves(&self) -> &[PlayerMove] {
        self.history.applied()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
