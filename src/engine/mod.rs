//! The turn engine and the contract games implement to plug into it.
//!
//! - [`Game`]: rules of one game (sanitize, check legality, resolve turns)
//! - [`TurnEngine`]: owns history and the pending-moves buffer
//! - [`Transcript`]: replayable record of options, seed, and moves

mod game;
mod transcript;
mod turn_engine;

pub use game::{Game, GameUpdate, PendingMoves};
pub use transcript::{RecordedMove, Transcript, TranscriptError};
pub use turn_engine::{EngineState, TurnEngine};
