//! Tic-tac-toe through the engine and the strategy adapters.

mod common;

use common::init_logging;
use rust_tbg::core::{EngineError, ErrorKind, Observer, OutOfTurn, PlayerId};
use rust_tbg::engine::{EngineState, TurnEngine};
use rust_tbg::games::tictactoe::TicTacToeGame;
use serde_json::json;

fn new_game() -> TurnEngine<TicTacToeGame> {
    let mut engine = TurnEngine::<TicTacToeGame>::new(&json!(null)).unwrap();
    engine.start("no randomness").unwrap();
    engine
}

/// Play `cells` in order, alternating from player 0.
fn play_cells(engine: &mut TurnEngine<TicTacToeGame>, cells: &[u64]) {
    for &cell in cells {
        let player = engine.players_to_play()[0];
        assert!(engine.play_move(&json!(cell), player).unwrap());
    }
}

/// Player 0 opens and turns alternate.
#[test]
fn test_players_alternate() {
    init_logging();
    let mut engine = new_game();
    assert_eq!(engine.player_count(), 2);
    assert_eq!(engine.players_to_play(), &[PlayerId::new(0)]);

    play_cells(&mut engine, &[4]);
    assert_eq!(engine.players_to_play(), &[PlayerId::new(1)]);

    play_cells(&mut engine, &[0]);
    assert_eq!(engine.players_to_play(), &[PlayerId::new(0)]);
    assert_eq!(engine.turn_count(), 2);
}

/// Public info is the move just played.
#[test]
fn test_last_move_is_public() {
    init_logging();
    let mut engine = new_game();
    assert_eq!(engine.latest_update().unwrap().public_info(), &None);

    play_cells(&mut engine, &[7]);
    let public = engine.latest_update().unwrap().public_info();
    assert_eq!(public.map(|cell| cell.index()), Some(7));
}

/// Cells 0 to 6 in order give player 0 the 2-4-6 diagonal.
#[test]
fn test_first_player_wins() {
    init_logging();
    let mut engine = new_game();
    play_cells(&mut engine, &[0, 1, 2, 3, 4, 5, 6]);

    assert_eq!(engine.state(), EngineState::Terminal);
    assert!(engine.players_to_play().is_empty());
    assert_eq!(engine.current_winners().unwrap(), vec![PlayerId::new(0)]);
    assert_eq!(
        engine.latest_update().unwrap().winners(),
        Some(&[PlayerId::new(0)][..])
    );
    assert_eq!(engine.game().inner().inner().to_string(), "XOX\nOXO\nX..\n");
}

/// Player 1 can win on a row.
#[test]
fn test_second_player_wins() {
    init_logging();
    let mut engine = new_game();
    play_cells(&mut engine, &[0, 3, 1, 4, 8, 5]);
    assert_eq!(engine.current_winners().unwrap(), vec![PlayerId::new(1)]);
}

/// A full board with no line is terminal with no winners.
#[test]
fn test_draw_has_no_winners() {
    init_logging();
    let mut engine = new_game();
    play_cells(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(engine.state(), EngineState::Terminal);
    assert_eq!(engine.latest_update().unwrap().winners(), Some(&[][..]));
    assert!(engine.current_winners().unwrap().is_empty());
}

/// Player 1 cannot open.
#[test]
fn test_out_of_turn() {
    init_logging();
    let mut engine = new_game();

    let err = engine.play_move(&json!(4), PlayerId::new(1)).unwrap_err();
    assert!(matches!(
        err,
        EngineError::OutOfTurn { reason: OutOfTurn::NotToPlay, .. }
    ));
    assert_eq!(err.player(), Some(PlayerId::new(1)));
    assert_eq!(engine.turn_count(), 0);
}

/// Taken cells are illegal; the mover keeps the turn.
#[test]
fn test_occupied_cell() {
    init_logging();
    let mut engine = new_game();
    play_cells(&mut engine, &[4]);

    let err = engine.play_move(&json!(4), PlayerId::new(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalMove);
    assert_eq!(
        err.to_string(),
        "illegal move 4 from Player 1: cell 4 is already taken by Player 0"
    );

    // Still player 1's turn
    assert!(engine.play_move(&json!(0), PlayerId::new(1)).unwrap());
}

/// Anything but an integer cell 0-8 is malformed.
#[test]
fn test_malformed_cells() {
    init_logging();
    let mut engine = new_game();
    for bad in [json!(9), json!("4"), json!(null), json!({ "cell": 4 })] {
        let err = engine.play_move(&bad, PlayerId::new(0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMove, "{}", bad);
    }
    assert_eq!(engine.turn_count(), 0);
}

/// Tic-tac-toe has no hidden information.
#[test]
fn test_no_private_info() {
    init_logging();
    let engine = new_game();
    let view = engine.observe(Observer::Player(PlayerId::new(0))).unwrap();
    assert!(view.private_info.is_none());
    assert!(view.must_play());

    let spectator = engine.observe(Observer::Spectator).unwrap();
    assert!(!spectator.must_play());
}

/// Tic-tac-toe takes no configuration.
#[test]
fn test_rejects_options() {
    let err = TurnEngine::<TicTacToeGame>::new(&json!({ "size": 4 })).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOptions);

    for bad in [json!([]), json!([3])] {
        let err = TurnEngine::<TicTacToeGame>::new(&bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOptions, "{}", bad);
    }
    assert!(TurnEngine::<TicTacToeGame>::new(&json!({})).is_ok());
}
