//! Shared helpers for integration tests.
#![allow(dead_code)]

use rust_tbg::core::PlayerId;
use rust_tbg::engine::{EngineState, TurnEngine};
use rust_tbg::games::dice::{DiceGame, DiceOptions};
use serde_json::{json, Value};
use tracing_subscriber::{fmt, EnvFilter};

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub fn even() -> Value {
    json!({ "guess": "even" })
}

pub fn odd() -> Value {
    json!({ "guess": "odd" })
}

pub fn gamble() -> Value {
    json!({ "guess": "gamble" })
}

/// An unstarted dice engine.
pub fn dice_engine(players: usize, points_to_win: u32) -> TurnEngine<DiceGame> {
    let options = DiceOptions::default()
        .with_players(players)
        .with_points_to_win(points_to_win);
    TurnEngine::new(&options.to_value()).unwrap()
}

/// A dice engine started with `seed`.
pub fn started_dice(players: usize, points_to_win: u32, seed: &str) -> TurnEngine<DiceGame> {
    let mut engine = dice_engine(players, points_to_win);
    engine.start(seed).unwrap();
    engine
}

/// First seed of the form `seed-N` whose opening position satisfies `pred`.
pub fn find_seed(
    players: usize,
    points_to_win: u32,
    pred: impl Fn(&TurnEngine<DiceGame>) -> bool,
) -> String {
    (0..10_000)
        .map(|i| format!("seed-{}", i))
        .find(|seed| pred(&started_dice(players, points_to_win, seed)))
        .expect("no seed in range satisfies the predicate")
}

/// A player's private die in the latest update.
pub fn private_roll(engine: &TurnEngine<DiceGame>, player: PlayerId) -> u8 {
    engine
        .latest_update()
        .unwrap()
        .private_info_for(player)
        .unwrap()
        .private_roll
}

/// A player's public die in the latest update.
pub fn public_roll(engine: &TurnEngine<DiceGame>, player: PlayerId) -> u8 {
    engine.latest_update().unwrap().public_info().public_rolls[player]
}

/// Play the dice game to the end with every caller guessing even.
///
/// Returns the number of turns played.
pub fn play_dice_out(engine: &mut TurnEngine<DiceGame>) -> usize {
    let mut turns = 0;
    while engine.state() == EngineState::AwaitingMoves {
        assert!(turns < 10_000, "game did not finish");
        for player in engine.awaiting() {
            engine.play_move(&even(), player).unwrap();
        }
        turns += 1;
    }
    turns
}
