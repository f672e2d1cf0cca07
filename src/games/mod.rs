//! Reference games that exercise the engine.
//!
//! - `dice`: simultaneous moves, hidden information, seeded randomness
//! - `tictactoe`: two-player abstract strategy

pub mod dice;
pub mod tictactoe;
