//! Dice guessing: simultaneous, randomized, imperfect information.
//!
//! Each round every player holds a public die and a private die:
//! - Players tied for the highest public die must call
//! - `{"guess": "even"}` / `{"guess": "odd"}`: parity of the sum of all
//!   private dice, +1 point if right
//! - `{"guess": "gamble"}`: only when the caller's two dice match; a fresh
//!   die scores +2 on 4-6 and -1 otherwise
//! - The game ends once anyone reaches `points_to_win`
//!
//! All randomness comes from the start seed.

mod game;
mod options;

pub use game::{DiceGame, DiceMove, DicePrivate, DicePublic, Guess};
pub use options::{DiceOptions, MAX_PLAYERS, MAX_POINTS_TO_WIN};
