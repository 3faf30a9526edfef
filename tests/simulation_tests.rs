//! Simulation tests - turn order, status derivation and move history

use tui_tictactoe::core::{MarkError, MoveObserver, PlayerMove, Simulation};
use tui_tictactoe::types::{player_glyph, BoardPosition, GameStatus, PlayerId};

fn pos(x: u32, y: u32) -> BoardPosition {
    BoardPosition::new(x, y)
}

fn play(sim: &mut Simulation, moves: &[(u32, u32)]) {
    for &(x, y) in moves {
        sim.mark(pos(x, y)).unwrap();
    }
}

/// Board rows as glyph strings, top to bottom.
fn rows(sim: &Simulation) -> Vec<String> {
    let board = sim.board();
    board
        .cells()
        .chunks(board.columns() as usize)
        .map(|row| row.iter().map(|&c| player_glyph(c)).collect())
        .collect()
}

#[test]
fn test_new_game_state() {
    let sim = Simulation::new(3, 3, 3).unwrap();
    assert_eq!(sim.status(), GameStatus::Active);
    assert_eq!(sim.active_player(), Some(PlayerId::FIRST));
    assert_eq!(sim.winning_player(), None);
    assert_eq!(sim.available_undos(), 0);
    assert_eq!(sim.available_redos(), 0);
    assert!(sim.moves().is_empty());
}

#[test]
fn test_invalid_parameters() {
    assert!(Simulation::new(0, 3, 3).is_err());
    assert!(Simulation::new(3, 3, 0).is_err());
}

#[test]
fn test_players_alternate() {
    let mut sim = Simulation::new(4, 4, 4).unwrap();
    let mut expected = PlayerId::FIRST;
    for p in [pos(0, 0), pos(3, 3), pos(1, 2), pos(2, 0), pos(0, 3)] {
        assert_eq!(sim.active_player(), Some(expected));
        sim.mark(p).unwrap();
        assert_eq!(sim.status(), GameStatus::Active);
        expected = expected.next();
    }
    assert_eq!(sim.moves().len(), 5);
    assert_eq!(sim.moves()[1].player, PlayerId::SECOND);
}

#[test]
fn test_row_win() {
    let mut sim = Simulation::new(3, 3, 3).unwrap();
    play(&mut sim, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);

    assert_eq!(sim.status(), GameStatus::Won);
    assert_eq!(sim.winning_player(), Some(PlayerId::FIRST));
    assert_eq!(sim.active_player(), None);
    assert_eq!(
        sim.board().winning_positions(),
        &[pos(0, 0), pos(1, 0), pos(2, 0)]
    );
    assert_eq!(sim.mark(pos(2, 2)), Err(MarkError::GameAlreadyOver));
    assert_eq!(sim.available_undos(), 5);
}

#[test]
fn test_draw() {
    let mut sim = Simulation::new(3, 3, 3).unwrap();
    play(
        &mut sim,
        &[
            (0, 0),
            (1, 0),
            (2, 0),
            (0, 1),
            (1, 1),
            (0, 2),
            (2, 1),
            (2, 2),
            (1, 2),
        ],
    );

    assert_eq!(rows(&sim), ["XOX", "OXX", "OXO"]);
    assert_eq!(sim.status(), GameStatus::Draw);
    assert_eq!(sim.winning_player(), None);
    assert_eq!(sim.active_player(), None);
    assert!(sim.board().is_filled());
    assert_eq!(
        sim.mark(pos(0, 0)),
        Err(MarkError::PositionAlreadyMarked)
    );
}

#[test]
fn test_rejected_marks_change_nothing() {
    let mut sim = Simulation::new(3, 3, 3).unwrap();
    sim.mark(pos(1, 1)).unwrap();
    let before = rows(&sim);

    assert_eq!(sim.mark(pos(3, 0)), Err(MarkError::PositionOutOfBounds));
    assert_eq!(sim.mark(pos(1, 1)), Err(MarkError::PositionAlreadyMarked));
    assert_eq!(rows(&sim), before);
    assert_eq!(sim.active_player(), Some(PlayerId::SECOND));
    assert_eq!(sim.available_undos(), 1);
}

#[test]
fn test_undo_restores_previous_state() {
    let mut sim = Simulation::new(3, 3, 3).unwrap();
    play(&mut sim, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
    let before = rows(&sim);

    sim.mark(pos(2, 0)).unwrap();
    assert_eq!(sim.status(), GameStatus::Won);

    assert!(sim.undo());
    assert_eq!(rows(&sim), before);
    assert_eq!(sim.status(), GameStatus::Active);
    assert_eq!(sim.active_player(), Some(PlayerId::FIRST));
    assert!(sim.board().winning_positions().is_empty());
    assert_eq!(sim.available_redos(), 1);

    assert!(sim.redo());
    assert_eq!(sim.status(), GameStatus::Won);
    assert_eq!(sim.winning_player(), Some(PlayerId::FIRST));
}

#[test]
fn test_undo_redo_is_identity() {
    let mut sim = Simulation::new(4, 3, 3).unwrap();
    play(&mut sim, &[(0, 0), (3, 2), (1, 1)]);
    let snapshot = (rows(&sim), sim.active_player(), sim.status());

    assert!(sim.undo());
    assert!(sim.undo());
    assert!(sim.undo());
    assert!(!sim.undo());
    assert!(sim.board().cells().iter().all(Option::is_none));
    assert_eq!(sim.active_player(), Some(PlayerId::FIRST));

    assert!(sim.redo());
    assert!(sim.redo());
    assert!(sim.redo());
    assert!(!sim.redo());
    assert_eq!((rows(&sim), sim.active_player(), sim.status()), snapshot);
}

#[test]
fn test_mark_after_undo_truncates_redo() {
    let mut sim = Simulation::new(3, 3, 3).unwrap();
    play(&mut sim, &[(0, 0), (1, 0), (2, 0)]);
    sim.undo();
    sim.undo();
    assert_eq!(sim.available_redos(), 2);

    sim.mark(pos(2, 2)).unwrap();
    assert_eq!(sim.available_redos(), 0);
    assert!(!sim.redo());
    assert_eq!(
        sim.moves(),
        &[
            PlayerMove {
                player: PlayerId::FIRST,
                position: pos(0, 0)
            },
            PlayerMove {
                player: PlayerId::SECOND,
                position: pos(2, 2)
            },
        ]
    );
}

#[test]
fn test_undo_out_of_draw() {
    let mut sim = Simulation::new(2, 1, 2).unwrap();
    play(&mut sim, &[(0, 0), (1, 0)]);
    assert_eq!(sim.status(), GameStatus::Draw);
    assert!(sim.undo());
    assert_eq!(sim.status(), GameStatus::Active);
    assert_eq!(sim.active_player(), Some(PlayerId::SECOND));
}

#[test]
fn test_reset() {
    let mut sim = Simulation::new(3, 3, 3).unwrap();
    play(&mut sim, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);
    sim.undo();

    sim.reset();
    assert!(sim.board().cells().iter().all(Option::is_none));
    assert_eq!(sim.board().marked_count(), 0);
    assert_eq!(sim.available_undos(), 0);
    assert_eq!(sim.available_redos(), 0);
    assert_eq!(sim.active_player(), Some(PlayerId::FIRST));
    assert_eq!(sim.status(), GameStatus::Active);
    assert!(!sim.undo());
}

#[test]
fn test_observer_sees_state_after_mutation() {
    struct StatusProbe {
        seen: Vec<String>,
    }

    impl MoveObserver for StatusProbe {
        fn on_after_undo(&mut self, undone: &PlayerMove) {
            self.seen
                .push(format!("undo {} {}", undone.player.glyph(), undone.position));
        }

        fn on_after_redo(&mut self, redone: &PlayerMove) {
            self.seen
                .push(format!("redo {} {}", redone.player.glyph(), redone.position));
        }
    }

    let mut sim = Simulation::new(3, 3, 3).unwrap();
    play(&mut sim, &[(2, 1)]);
    let mut probe = StatusProbe { seen: Vec::new() };

    assert!(sim.undo_with(&mut probe));
    assert_eq!(sim.board().marker(pos(2, 1)), None);
    assert!(sim.redo_with(&mut probe));
    assert!(!sim.redo_with(&mut probe));
    assert_eq!(probe.seen, ["undo X (2, 1)", "redo X (2, 1)"]);
}

#[test]
fn test_long_board_win() {
    let mut sim = Simulation::new(15, 15, 5).unwrap();
    // X runs a diagonal while O plays along the bottom row.
    for i in 0..4 {
        sim.mark(pos(i + 3, i + 3)).unwrap();
        sim.mark(pos(i, 14)).unwrap();
    }
    sim.mark(pos(7, 7)).unwrap();
    assert_eq!(sim.status(), GameStatus::Won);
    assert_eq!(
        sim.board().winning_positions(),
        &[pos(3, 3), pos(4, 4), pos(5, 5), pos(6, 6), pos(7, 7)]
    );
}
