//! Text prompt front end driven by scripted input

use std::io::Cursor;

use tui_tictactoe::basic::BasicGame;
use tui_tictactoe::core::Simulation;
use tui_tictactoe::types::{GameStatus, PlayerId};

struct Session {
    out: String,
    err: String,
    sim: Simulation,
    turns: usize,
}

/// Run `update` until it asks to stop, counting the turns played.
fn play(m: u32, n: u32, k: u32, script: &str) -> Session {
    let sim = Simulation::new(m, n, k).unwrap();
    let mut game = BasicGame::new(sim, Cursor::new(script.to_string()), Vec::new(), Vec::new());
    let mut turns = 0;
    while game.update().unwrap() {
        turns += 1;
    }
    let sim = game.simulation().clone();
    let (out, err) = game.into_writers();
    Session {
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
        sim,
        turns,
    }
}

#[test]
fn test_status_block_and_prompt() {
    let session = play(3, 2, 2, "quit\n");
    assert_eq!(
        session.out,
        "\n3x2, 2-in-a-row\n | | \n-----\n | | \nPlayer 1 (X)'s turn.\n\n[Player 1 (X)] Enter a command: "
    );
    assert!(session.err.is_empty());
    assert_eq!(session.turns, 0);
}

#[test]
fn test_full_game_to_win() {
    let session = play(
        3,
        3,
        3,
        "mark 0 0\nmark 0 1\nmark 1 0\nmark 1 1\nmark 2 0\nquit\n",
    );
    assert_eq!(session.turns, 5);
    assert_eq!(session.sim.status(), GameStatus::Won);
    assert_eq!(session.sim.winning_player(), Some(PlayerId::FIRST));
    assert!(session.out.contains("Marker placed at (2, 0)\n"));
    assert!(session.out.contains("Player 1 (X) wins!\n"));
    assert!(session.out.contains("X|X|X\n-----\nO|O| \n"));
    // Once the game is over the prompt loses its player prefix.
    assert!(session.out.ends_with("wins!\n\nEnter a command: "));
}

#[test]
fn test_mark_errors_go_to_error_writer() {
    let session = play(
        3,
        3,
        3,
        "mark 1 1\nmark 1 1\nmark 5 0\nmark x 1\nmark 1\nquit\n",
    );
    assert_eq!(
        session.err,
        "(1, 1) is already marked.\n\
         (5, 0) is out of bounds.\n\
         Invalid input for 'mark <x> <y>' command.\n\
         Invalid input for 'mark <x> <y>' command.\n"
    );
    assert_eq!(session.sim.board().marked_count(), 1);
    assert_eq!(session.sim.active_player(), Some(PlayerId::SECOND));
}

#[test]
fn test_mark_after_game_over() {
    let session = play(2, 1, 2, "mark 0 0\nmark 1 0\nmark 0 0\nquit\n");
    assert_eq!(session.sim.status(), GameStatus::Draw);
    assert!(session.out.contains("Draw - no player wins.\n"));
    assert_eq!(session.err, "(0, 0) is already marked.\n");

    let session = play(3, 1, 2, "mark 0 0\nmark 2 0\nmark 1 0\nmark 2 0\nquit\n");
    assert_eq!(session.sim.status(), GameStatus::Won);
    assert_eq!(session.err, "Cannot mark position; game has ended.\n");
}

#[test]
fn test_undo_and_redo_messages() {
    let session = play(3, 3, 3, "undo\nmark 2 1\nundo\nredo\nredo\nquit\n");
    assert!(session.out.contains("Marker 'X' has been removed from (2, 1).\n"));
    assert!(session.out.contains("Marker 'X' has been re-placed at (2, 1).\n"));
    assert_eq!(
        session.err,
        "Error: Unable to perform undo.\nError: Unable to perform redo.\n"
    );
    assert_eq!(session.turns, 3);
    assert_eq!(session.sim.board().marked_count(), 1);
}

#[test]
fn test_unknown_command() {
    let session = play(3, 3, 3, "dance\n\nquit\n");
    let line = "Error: Unrecognized command. Type 'help' for a list of available commands.\n";
    assert_eq!(session.err, format!("{line}{line}"));
}

#[test]
fn test_help_lists_mark_only_while_active() {
    let active = play(3, 3, 3, "help\nquit\n");
    assert!(active.out.contains("Available commands:\n"));
    assert!(active.out.contains(
        "  mark <x> <y>    Places a marker at the given coordinates and ends the current turn.\n"
    ));
    assert!(active
        .out
        .contains("  undo            Moves back a turn, reverting a marker placement.\n"));
    assert!(active
        .out
        .contains("  quit            Ends the game and exits this console application.\n"));

    let over = play(2, 1, 2, "mark 0 0\nmark 1 0\nhelp\nquit\n");
    assert!(over.out.contains("Available commands:\n"));
    assert!(!over.out.contains("mark <x> <y>"));
}

#[test]
fn test_status_and_reset() {
    let session = play(3, 3, 3, "mark 0 0\nstatus\nreset\nquit\n");
    assert!(session.out.contains("Player 2 (O)'s turn.\n"));
    assert!(session
        .out
        .contains("Resetting the game to its initial state.\n"));
    assert_eq!(session.sim.board().marked_count(), 0);
    assert_eq!(session.sim.available_undos(), 0);
    assert_eq!(session.turns, 2);
}

#[test]
fn test_end_of_input_stops_the_game() {
    let session = play(3, 3, 3, "mark 0 0\n");
    assert_eq!(session.turns, 1);
    assert_eq!(session.sim.board().marked_count(), 1);
}

#[test]
fn test_exit_alias() {
    let session = play(3, 3, 3, "exit\n");
    assert_eq!(session.turns, 0);
    assert!(session.err.is_empty());
}
