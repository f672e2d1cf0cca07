//! Dice guessing game through the turn engine.
//!
//! Covers the simultaneous, randomized, hidden-information side of the
//! engine: tied callers, per-player private dice, and both kinds of
//! rejected call.

mod common;

use common::{even, find_seed, gamble, init_logging, odd, private_roll, public_roll, started_dice};
use rust_tbg::core::{EngineError, ErrorKind, Observer, OutOfTurn, PlayerId};
use rust_tbg::engine::{EngineState, TurnEngine};
use rust_tbg::games::dice::{DiceGame, DiceMove, Guess};
use serde_json::json;

/// Callers are exactly the players tied for the top public die.
#[test]
fn test_opening_update() {
    init_logging();
    let engine = started_dice(3, 5, "test_seed");
    let first = engine.latest_update().unwrap();
    let rolls = first.public_info().public_rolls.as_slice().to_vec();

    assert_eq!(rolls.len(), 3);
    let top = *rolls.iter().max().unwrap();
    let tied: Vec<_> = PlayerId::all(3).filter(|p| rolls[p.index()] == top).collect();
    assert_eq!(engine.players_to_play(), tied.as_slice());

    let private = first.private_info().unwrap();
    assert_eq!(private.player_count(), 3);
    assert_eq!(first.winners(), None);
}

/// A lone caller resolves the turn; calls reveal with `null` for non-callers.
#[test]
fn test_single_caller_resolves_turn() {
    init_logging();
    let seed = find_seed(3, 5, |e| e.players_to_play() == [PlayerId::new(0)]);
    let mut engine = started_dice(3, 5, &seed);

    assert!(engine.play_move(&even(), PlayerId::new(0)).unwrap());
    assert_eq!(engine.all_updates().unwrap().len(), 2);

    let next = engine.latest_update().unwrap();
    let public = serde_json::to_value(next.public_info()).unwrap();
    assert_eq!(public["calls"], json!([{ "guess": "even" }, null, null]));
    assert_eq!(public["public_rolls"].as_array().map(Vec::len), Some(3));
}

/// Tied callers must all call before the turn resolves.
#[test]
fn test_tied_callers_must_all_call() {
    init_logging();
    let seed = find_seed(3, 5, |e| e.players_to_play().len() >= 2);
    let mut engine = started_dice(3, 5, &seed);
    let callers = engine.players_to_play().to_vec();

    assert!(!engine.play_move(&odd(), callers[0]).unwrap());
    assert_eq!(engine.all_updates().unwrap().len(), 1);
    assert_eq!(engine.awaiting(), callers[1..].to_vec());

    for &p in &callers[1..callers.len() - 1] {
        assert!(!engine.play_move(&odd(), p).unwrap());
    }
    assert!(engine.play_move(&even(), callers[callers.len() - 1]).unwrap());

    let calls = &engine.latest_update().unwrap().public_info().calls;
    assert_eq!(calls[callers[0]], Some(DiceMove::new(Guess::Odd)));
    assert_eq!(calls[callers[callers.len() - 1]], Some(DiceMove::new(Guess::Even)));
}

/// A malformed call is rejected and the same player may resubmit.
#[test]
fn test_invalid_call_then_resubmit() {
    init_logging();
    let mut engine = started_dice(3, 5, "test_seed");
    let caller = engine.players_to_play()[0];

    let err = engine
        .play_move(&json!({ "guess": "neither" }), caller)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidMove);
    assert_eq!(err.player(), Some(caller));
    assert_eq!(err.raw_input(), Some(&json!({ "guess": "neither" })));
    assert!(!engine.has_played(caller));
    assert_eq!(engine.all_updates().unwrap().len(), 1);

    assert!(engine.play_move(&even(), caller).is_ok());
    assert!(engine.transcript().moves().len() == 1);
}

/// Gambling with mismatched dice is well-formed but illegal.
#[test]
fn test_gamble_with_mismatched_dice_is_illegal() {
    init_logging();
    let seed = find_seed(3, 5, |e| {
        let p = e.players_to_play()[0];
        private_roll(e, p) != public_roll(e, p)
    });
    let mut engine = started_dice(3, 5, &seed);
    let caller = engine.players_to_play()[0];

    let err = engine.play_move(&gamble(), caller).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalMove);
    assert!(engine.pending_moves().is_empty());
    assert!(engine.transcript().moves().is_empty());

    // A parity call is still available
    assert!(engine.play_move(&odd(), caller).is_ok());
}

/// Gambling with matching dice is accepted and rolls a fresh die.
#[test]
fn test_gamble_with_matching_dice_is_accepted() {
    init_logging();
    let seed = find_seed(3, 5, |e| {
        let callers = e.players_to_play();
        callers.len() == 1 && private_roll(e, callers[0]) == public_roll(e, callers[0])
    });
    let mut engine = started_dice(3, 5, &seed);
    let caller = engine.players_to_play()[0];

    // Sole caller, so the gamble resolves the turn
    assert_eq!(engine.play_move(&gamble(), caller), Ok(true));
    let public = engine.latest_update().unwrap().public_info();
    assert!(public.gamble_rolls[caller].is_some());
    assert_eq!(public.calls[caller], Some(DiceMove::new(Guess::Gamble)));
}

/// Arrays are never read as calls or options.
#[test]
fn test_array_shaped_input_is_invalid() {
    init_logging();
    let mut engine = started_dice(3, 5, "arrays");
    let caller = engine.players_to_play()[0];

    for bad in [json!(["even"]), json!([])] {
        let err = engine.play_move(&bad, caller).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMove, "{}", bad);
    }
    assert!(!engine.has_played(caller));
    assert_eq!(engine.turn_count(), 0);

    let err = TurnEngine::<DiceGame>::new(&json!([3, 5])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOptions);
    assert!(TurnEngine::<DiceGame>::new(&json!([])).is_err());
}

/// Players without the top die cannot call.
#[test]
fn test_non_caller_is_out_of_turn() {
    init_logging();
    let seed = find_seed(3, 5, |e| e.players_to_play().len() < 3);
    let mut engine = started_dice(3, 5, &seed);
    let idle = PlayerId::all(3)
        .find(|p| !engine.players_to_play().contains(p))
        .unwrap();

    let err = engine.play_move(&even(), idle).unwrap_err();
    assert!(matches!(
        err,
        EngineError::OutOfTurn { reason: OutOfTurn::NotToPlay, .. }
    ));

    let unseated = engine.play_move(&even(), PlayerId::new(200)).unwrap_err();
    assert_eq!(unseated.kind(), ErrorKind::OutOfTurn);
}

/// Each player sees only their own private die; spectators see none.
#[test]
fn test_private_dice_visible_only_to_owner() {
    init_logging();
    let engine = started_dice(4, 5, "privacy");

    for p in PlayerId::all(4) {
        let view = engine.observe(Observer::Player(p)).unwrap();
        let mine = view.private_info.unwrap();
        assert_eq!(mine.private_roll, private_roll(&engine, p));
    }

    let spectator = engine.observe(Observer::Spectator).unwrap();
    assert!(spectator.private_info.is_none());
    assert_eq!(spectator.public_info.public_rolls.player_count(), 4);
}

/// Winners reach the target score and are embedded in the last update.
#[test]
fn test_game_reaches_terminal_with_winners() {
    init_logging();
    let mut engine = started_dice(2, 3, "to-the-end");
    common::play_dice_out(&mut engine);

    assert_eq!(engine.state(), EngineState::Terminal);
    let last = engine.latest_update().unwrap();
    let winners = last.winners().unwrap().to_vec();
    assert!(!winners.is_empty());
    for p in &winners {
        assert!(last.public_info().scores[*p] >= 3);
    }
    assert_eq!(engine.current_winners().unwrap(), winners);
    assert!(engine.players_to_play().is_empty());
}

/// Nobody has won at the opening position.
#[test]
fn test_winners_query_mid_game() {
    init_logging();
    let engine = started_dice(3, 5, "mid-game");
    assert!(engine.current_winners().unwrap().is_empty());
}

/// A one-player game runs to completion.
#[test]
fn test_single_player_game() {
    init_logging();
    let mut engine = started_dice(1, 2, "solo");
    assert_eq!(engine.players_to_play(), &[PlayerId::new(0)]);
    common::play_dice_out(&mut engine);
    assert_eq!(engine.current_winners().unwrap(), vec![PlayerId::new(0)]);
}

/// Out-of-range player counts are rejected at construction.
#[test]
fn test_bad_options() {
    init_logging();
    let err = TurnEngine::<DiceGame>::new(&json!({ "players": 12 })).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOptions);
    assert!(err.to_string().contains("players must be between 1 and 8"));
}
