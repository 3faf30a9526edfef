//! Text prompt front end.
//!
//! Each call to [`BasicGame::update`] prints the board, then reads commands
//! until one of them ends the turn. Normal output and errors go to separate
//! writers so a terminal session can keep them on stdout and stderr.

use std::fmt;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{debug, info, instrument};

use crate::core::{Board, MarkError, MoveObserver, PlayerMove, Simulation};
use crate::input::{parse_command, CommandError, TextCommand};
use crate::types::{player_glyph, BoardPosition, GameStatus};

const HELP_WIDTH: usize = 16;

const HELP_ENTRIES: &[(&str, &str)] = &[
    ("undo", "Moves back a turn, reverting a marker placement."),
    (
        "redo",
        "Moves forward a turn, re-placing a reverted marker placement.",
    ),
    ("help", "Prints this help message."),
    ("status", "Prints the current state of the game."),
    (
        "reset",
        "Clears the current game board and restarts the game.",
    ),
    ("exit", "Ends the game and exits this console application."),
    ("quit", "Ends the game and exits this console application."),
];

/// A game played through line-based commands.
pub struct BasicGame<R, W, E> {
    sim: Simulation,
    input: R,
    out: W,
    err: E,
    quit_requested: bool,
}

impl<R: BufRead, W: Write, E: Write> BasicGame<R, W, E> {
    pub fn new(sim: Simulation, input: R, out: W, err: E) -> Self {
        Self {
            sim,
            input,
            out,
            err,
            quit_requested: false,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// Give back the output and error writers.
    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }

    /// Play until quit is requested or input runs out.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!(
            columns = self.sim.board().columns(),
            rows = self.sim.board().rows(),
            win_condition = self.sim.board().win_condition(),
            "basic game started"
        );
        while self.update()? {}
        Ok(())
    }

    /// Play one turn. Returns false once the game should stop.
    pub fn update(&mut self) -> Result<bool> {
        self.execute_status()?;

        let mut turn_over = false;
        while !turn_over {
            if let Some(active) = self.sim.active_player() {
                write!(self.out, "[{active}] ")?;
            }
            write!(self.out, "Enter a command: ")?;
            self.out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                info!("input closed");
                writeln!(self.out)?;
                self.quit_requested = true;
                break;
            }

            turn_over = match parse_command(&line) {
                Ok(command) => self.execute(command)?,
                Err(err) => {
                    debug!(line = line.trim_end(), %err, "rejected command");
                    match err {
                        CommandError::Unrecognized => writeln!(self.err, "Error: {err}")?,
                        CommandError::InvalidMarkArguments => writeln!(self.err, "{err}")?,
                    }
                    false
                }
            };
        }

        Ok(!self.quit_requested)
    }

    /// Run one command; true if it ends the turn.
    fn execute(&mut self, command: TextCommand) -> Result<bool> {
        match command {
            TextCommand::Mark { x, y } => self.execute_mark(BoardPosition::new(x, y)),
            TextCommand::Undo => self.execute_undo(),
            TextCommand::Redo => self.execute_redo(),
            TextCommand::Help => {
                self.execute_help()?;
                Ok(false)
            }
            TextCommand::Status => {
                self.execute_status()?;
                Ok(false)
            }
            TextCommand::Reset => {
                writeln!(self.out, "Resetting the game to its initial state.")?;
                self.sim.reset();
                self.quit_requested = false;
                Ok(true)
            }
            TextCommand::Quit => {
                self.quit_requested = true;
                Ok(true)
            }
        }
    }

    fn execute_mark(&mut self, position: BoardPosition) -> Result<bool> {
        match self.sim.mark(position) {
            Ok(()) => {
                writeln!(self.out, "Marker placed at {position}")?;
                return Ok(true);
            }
            Err(MarkError::PositionOutOfBounds) => {
                writeln!(self.err, "{position} is out of bounds.")?
            }
            Err(MarkError::PositionAlreadyMarked) => {
                writeln!(self.err, "{position} is already marked.")?
            }
            Err(MarkError::GameAlreadyOver) => {
                writeln!(self.err, "Cannot mark position; game has ended.")?
            }
        }
        Ok(false)
    }

    fn execute_undo(&mut self) -> Result<bool> {
        let mut announcer = Announcer::new(&mut self.out);
        let undone = self.sim.undo_with(&mut announcer);
        announcer.finish()?;
        if !undone {
            writeln!(self.err, "Error: Unable to perform undo.")?;
        }
        Ok(undone)
    }

    fn execute_redo(&mut self) -> Result<bool> {
        let mut announcer = Announcer::new(&mut self.out);
        let redone = self.sim.redo_with(&mut announcer);
        announcer.finish()?;
        if !redone {
            writeln!(self.err, "Error: Unable to perform redo.")?;
        }
        Ok(redone)
    }

    fn execute_help(&mut self) -> io::Result<()> {
        writeln!(self.out, "Available commands:")?;
        if self.sim.status() == GameStatus::Active {
            writeln!(
                self.out,
                "  {:<width$}{}",
                "mark <x> <y>",
                "Places a marker at the given coordinates and ends the current turn.",
                width = HELP_WIDTH
            )?;
        }
        for (command, description) in HELP_ENTRIES {
            writeln!(
                self.out,
                "  {:<width$}{}",
                command,
                description,
                width = HELP_WIDTH
            )?;
        }
        Ok(())
    }

    fn execute_status(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        write!(self.out, "{}", BoardText(self.sim.board()))?;
        match (self.sim.status(), self.sim.active_player(), self.sim.winning_player()) {
            (GameStatus::Active, Some(active), _) => writeln!(self.out, "{active}'s turn.")?,
            (GameStatus::Won, _, Some(winner)) => writeln!(self.out, "{winner} wins!")?,
            _ => writeln!(self.out, "Draw - no player wins.")?,
        }
        writeln!(self.out)
    }
}

/// Prints which marker undo/redo moved.
struct Announcer<'a, W: Write> {
    out: &'a mut W,
    result: io::Result<()>,
}

impl<'a, W: Write> Announcer<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Self { out, result: Ok(()) }
    }

    fn finish(self) -> io::Result<()> {
        self.result
    }
}

impl<W: Write> MoveObserver for Announcer<'_, W> {
    fn on_after_undo(&mut self, undone: &PlayerMove) {
        self.result = writeln!(
            self.out,
            "Marker '{}' has been removed from {}.",
            undone.player.glyph(),
            undone.position
        );
    }

    fn on_after_redo(&mut self, redone: &PlayerMove) {
        self.result = writeln!(
            self.out,
            "Marker '{}' has been re-placed at {}.",
            redone.player.glyph(),
            redone.position
        );
    }
}

/// The board as text: a `MxN, K-in-a-row` header, then glyph rows.
pub struct BoardText<'a>(pub &'a Board);

impl fmt::Display for BoardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        writeln!(
            f,
            "{}x{}, {}-in-a-row",
            board.columns(),
            board.rows(),
            board.win_condition()
        )?;

        let separator = "-".repeat(board.columns() as usize * 2 - 1);
        let columns = board.columns() as usize;
        for (y, row) in board.cells().chunks(columns).enumerate() {
            let glyphs: Vec<String> = row
                .iter()
                .map(|&cell| player_glyph(cell).to_string())
                .collect();
            writeln!(f, "{}", glyphs.join("|"))?;
            if y + 1 < board.rows() as usize {
                writeln!(f, "{separator}")?;
            }
        }
        Ok(())
    }
}
