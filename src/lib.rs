//! # rust-tbg
//!
//! A generic turn engine for modeling arbitrary turn-based games.
//!
//! ## Design Principles
//!
//! 1. **One Engine**: Single or multiplayer, deterministic or randomized,
//!    perfect or imperfect information, sequential or simultaneous moves
//!    all run through the same `TurnEngine`.
//!
//! 2. **Rules Are Plugged In**: Games implement the `Game` contract. The
//!    engine never interprets game-specific concepts.
//!
//! 3. **Validate, Then Buffer, Then Resolve**: Every move is checked before
//!    anything is touched. A turn resolves atomically once all required
//!    players have submitted.
//!
//! ## Architecture
//!
//! - **Updates**: History is an append-only list of updates, each split
//!   into public info and per-player private info.
//!
//! - **Persistent Data Structures**: History and the pending-moves buffer
//!   use `im` so callers get O(1) snapshots that can't corrupt the engine.
//!
//! - **Observers**: Spectators and players get views that expose only what
//!   they are allowed to see.
//!
//! ## Modules
//!
//! - `core`: Players, observers, updates, RNG, errors
//! - `engine`: The `Game` contract, `TurnEngine`, transcripts
//! - `adapters`: Alternating-turn and abstract-strategy game shapes
//! - `games`: Reference games (dice guessing, tic-tac-toe)

pub mod core;
pub mod engine;
pub mod adapters;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    EngineError, ErrorKind, Lifecycle, OutOfTurn, Rejection,
    Observer, PlayerId, PlayerMap,
    GameRng,
    Observation, ToPlay, Update,
};

pub use crate::engine::{
    EngineState, Game, GameUpdate, PendingMoves, RecordedMove, Transcript, TranscriptError,
    TurnEngine,
};

pub use crate::adapters::{
    AbstractStrategy, AbstractStrategyGame, Alternating, AlternatingGame, Step, StrategyGame,
    StrategyOutcome,
};
