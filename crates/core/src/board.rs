//! Board module - owns the m×n grid and detects wins
//!
//! The board is a `columns` x `rows` grid where each cell is unowned or marked by a player.
//! Uses a flat vector in row-major order (`y * columns + x`) sized once at construction.
//! Coordinates: (x, y) where x ranges 0..columns (left to right), y ranges 0..rows (top to bottom)
//!
//! A win is detected incrementally: every successful mark walks the four line
//! directions through the new cell and records any run of at least
//! `win_condition` same-owner cells.

use tracing::debug;

use crate::error::{ConfigError, MarkError, UnmarkError};
use crate::types::{BoardPosition, Cell, PlayerId, MAX_BOARD_DIMENSION};

/// The four undirected lines through a cell, as unit forward steps.
///
/// Order: diagonal "/", horizontal "-", diagonal "\", vertical "|".
const DIRECTIONS: [(i64, i64); 4] = [(1, -1), (1, 0), (1, 1), (0, 1)];

/// The m,n,k game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: u32,
    rows: u32,
    win_condition: u32,
    /// Flat cell storage, row-major order (y * columns + x)
    cells: Vec<Cell>,
    marked_count: usize,
    winning_player: Option<PlayerId>,
    winning_positions: Vec<BoardPosition>,
}

impl Board {
    /// Create an empty board of `columns` x `rows` where `win_condition`
    /// marks in a row win.
    pub fn new(columns: u32, rows: u32, win_condition: u32) -> Result<Self, ConfigError> {
        if columns == 0 || rows == 0 {
            return Err(ConfigError::EmptyBoard { columns, rows });
        }
        if columns > MAX_BOARD_DIMENSION || rows > MAX_BOARD_DIMENSION {
            return Err(ConfigError::BoardTooLarge { columns, rows });
        }
        if win_condition < 2 {
            return Err(ConfigError::WinConditionTooSmall(win_condition));
        }

        let len = columns as usize * rows as usize;
        Ok(Self {
            columns,
            rows,
            win_condition,
            cells: vec![None; len],
            marked_count: 0,
            winning_player: None,
            winning_positions: Vec::new(),
        })
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, position: BoardPosition) -> Option<usize> {
        if !self.is_valid_position(position) {
            return None;
        }
        Some(position.y as usize * self.columns as usize + position.x as usize)
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn win_condition(&self) -> u32 {
        self.win_condition
    }

    /// Number of marked cells
    pub fn marked_count(&self) -> usize {
        self.marked_count
    }

    pub fn winning_player(&self) -> Option<PlayerId> {
        self.winning_player
    }

    /// Positions of every winning run completed by the last mark.
    ///
    /// Each run is listed in line order. When one mark completes runs in
    /// several directions, the shared cell appears once per run.
    pub fn winning_positions(&self) -> &[BoardPosition] {
        &self.winning_positions
    }

    /// Check if position lies on the board
    pub fn is_valid_position(&self, position: BoardPosition) -> bool {
        position.x < self.columns && position.y < self.rows
    }

    /// Owner of the cell at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is off the board; check with
    /// [`is_valid_position`](Self::is_valid_position) or use [`get`](Self::get).
    pub fn marker(&self, position: BoardPosition) -> Option<PlayerId> {
        match self.index(position) {
            Some(idx) => self.cells[idx],
            None => panic!(
                "position {position} is outside the {}x{} board",
                self.columns, self.rows
            ),
        }
    }

    /// Get cell at position
    /// Returns None if out of bounds
    pub fn get(&self, position: BoardPosition) -> Option<Cell> {
        self.index(position).map(|idx| self.cells[idx])
    }

    /// Check if every cell has been marked
    pub fn is_filled(&self) -> bool {
        self.marked_count >= self.cells.len()
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Place `player`'s mark at `position` and check whether it wins.
    pub fn mark(&mut self, player: PlayerId, position: BoardPosition) -> Result<(), MarkError> {
        if self.winning_player.is_some() {
            return Err(MarkError::GameAlreadyOver);
        }
        let idx = self.index(position).ok_or(MarkError::PositionOutOfBounds)?;
        if self.cells[idx].is_some() {
            return Err(MarkError::PositionAlreadyMarked);
        }

        self.cells[idx] = Some(player);
        self.marked_count += 1;
        self.check_for_win(player, position);
        Ok(())
    }

    /// Remove `player`'s mark from `position`.
    ///
    /// Win state is always cleared: unmarking is only used to revert the most
    /// recent mark, which is part of any run it completed.
    pub fn unmark(&mut self, player: PlayerId, position: BoardPosition) -> Result<(), UnmarkError> {
        let idx = self.index(position).ok_or(UnmarkError::PositionOutOfBounds)?;
        if self.cells[idx] != Some(player) {
            return Err(UnmarkError::PositionNotMarkedByPlayer);
        }

        self.cells[idx] = None;
        self.marked_count -= 1;
        self.clear_win();
        Ok(())
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.marked_count = 0;
        self.clear_win();
    }

    fn clear_win(&mut self) {
        self.winning_player = None;
        self.winning_positions.clear();
    }

    fn check_for_win(&mut self, player: PlayerId, anchor: BoardPosition) {
        let max_steps = self.win_condition - 1;

        for (dx, dy) in DIRECTIONS {
            let forward = self.count_consecutive(player, anchor, (dx, dy), max_steps);
            let backward = self.count_consecutive(player, anchor, (-dx, -dy), max_steps);
            if forward + backward < max_steps {
                continue;
            }

            debug!(
                player = player.index(),
                %anchor,
                direction = ?(dx, dy),
                run = forward + backward + 1,
                "winning run"
            );

            // Line order: farthest backward cell first, farthest forward cell last.
            for step in (1..=backward).rev() {
                self.push_winning(anchor, (-dx, -dy), step);
            }
            self.winning_positions.push(anchor);
            for step in 1..=forward {
                self.push_winning(anchor, (dx, dy), step);
            }

            if self.winning_player.is_none() {
                self.winning_player = Some(player);
            }
        }
    }

    fn push_winning(&mut self, anchor: BoardPosition, (dx, dy): (i64, i64), step: u32) {
        if let Some(pos) = self.offset(anchor, (dx * step as i64, dy * step as i64)) {
            self.winning_positions.push(pos);
        }
    }

    /// Count same-owner cells walking from `from` (exclusive) along `step`,
    /// stopping at the first mismatch, the board edge, or after `remaining` cells.
    fn count_consecutive(
        &self,
        owner: PlayerId,
        from: BoardPosition,
        step: (i64, i64),
        remaining: u32,
    ) -> u32 {
        if remaining == 0 {
            return 0;
        }
        let Some(next) = self.offset(from, step) else {
            return 0;
        };
        if self.get(next) != Some(Some(owner)) {
            return 0;
        }
        1 + self.count_consecutive(owner, next, step, remaining - 1)
    }

    fn offset(&self, from: BoardPosition, (dx, dy): (i64, i64)) -> Option<BoardPosition> {
        let x = from.x as i64 + dx;
        let y = from.y as i64 + dy;
        if x < 0 || y < 0 || x >= self.columns as i64 || y >= self.rows as i64 {
            return None;
        }
        Some(BoardPosition::new(x as u32, y as u32))
    }

    /// Create from text rows for testing ('X', 'O', anything else unowned).
    ///
    /// Cells are written directly; no win detection runs.
    #[cfg(test)]
    pub fn from_rows(rows: &[&str], win_condition: u32) -> Self {
        let columns = rows[0].chars().count() as u32;
        let mut board = Self::new(columns, rows.len() as u32, win_condition).unwrap();
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count() as u32, columns);
            for (x, ch) in row.chars().enumerate() {
                let owner = match ch {
                    'X' => Some(PlayerId::FIRST),
                    'O' => Some(PlayerId::SECOND),
                    _ => None,
                };
                if owner.is_some() {
                    let idx = y * columns as usize + x;
                    board.cells[idx] = owner;
                    board.marked_count += 1;
                }
            }
        }
        board
    }
}
