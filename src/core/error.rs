//! Error taxonomy for the turn engine.
//!
//! Games report failures as a [`Rejection`]. The engine decides which
//! [`EngineError`] variant a rejection becomes based on the contract step
//! that produced it, and attaches the raw input and player for diagnostics.

use serde_json::Value;
use thiserror::Error;

use super::player::PlayerId;

/// A game's refusal of options or a move, with a human-readable reason.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct Rejection {
    reason: String,
}

impl Rejection {
    /// Create a rejection with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The reason text.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<serde_json::Error> for Rejection {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Why a move was submitted out of turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum OutOfTurn {
    #[error("game hasn't started")]
    NotStarted,
    #[error("game is already over")]
    GameOver,
    #[error("no legal move this turn for this player")]
    NotToPlay,
    #[error("player already played this turn")]
    AlreadyPlayed,
}

/// Caller-side sequencing mistakes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Lifecycle {
    #[error("game already started")]
    AlreadyStarted,
    #[error("game hasn't started")]
    NotStarted,
}

/// Fieldless error kind, for callers that only need to branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidOptions,
    InvalidMove,
    IllegalMove,
    OutOfTurn,
    Lifecycle,
}

/// Errors surfaced by [`crate::engine::TurnEngine`].
///
/// No engine state is mutated on any error path.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EngineError {
    /// Configuration failed structural validation. No engine was created.
    #[error("invalid options {raw}: {reason}")]
    InvalidOptions { raw: Value, reason: Rejection },

    /// Raw move failed structural sanitization.
    #[error("invalid move {raw} from {player}: {reason}")]
    InvalidMove {
        raw: Value,
        player: PlayerId,
        reason: Rejection,
    },

    /// Well-formed move is not legal in the current position.
    #[error("illegal move {raw} from {player}: {reason}")]
    IllegalMove {
        raw: Value,
        player: PlayerId,
        reason: Rejection,
    },

    /// The player may not submit a move right now.
    #[error("move {raw} from {player} rejected: {reason}")]
    OutOfTurn {
        raw: Value,
        player: PlayerId,
        reason: OutOfTurn,
    },

    #[error("{0}")]
    Lifecycle(Lifecycle),
}

impl EngineError {
    /// The error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::InvalidOptions { .. } => ErrorKind::InvalidOptions,
            EngineError::InvalidMove { .. } => ErrorKind::InvalidMove,
            EngineError::IllegalMove { .. } => ErrorKind::IllegalMove,
            EngineError::OutOfTurn { .. } => ErrorKind::OutOfTurn,
            EngineError::Lifecycle(_) => ErrorKind::Lifecycle,
        }
    }

    /// The offending player, if the error concerns a move.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            EngineError::InvalidMove { player, .. }
            | EngineError::IllegalMove { player, .. }
            | EngineError::OutOfTurn { player, .. } => Some(*player),
            EngineError::InvalidOptions { .. } | EngineError::Lifecycle(_) => None,
        }
    }

    /// The raw input echoed back, if any.
    #[must_use]
    pub fn raw_input(&self) -> Option<&Value> {
        match self {
            EngineError::InvalidOptions { raw, .. }
            | EngineError::InvalidMove { raw, .. }
            | EngineError::IllegalMove { raw, .. }
            | EngineError::OutOfTurn { raw, .. } => Some(raw),
            EngineError::Lifecycle(_) => None,
        }
    }
}

impl From<Lifecycle> for EngineError {
    fn from(err: Lifecycle) -> Self {
        EngineError::Lifecycle(err)
    }
}
