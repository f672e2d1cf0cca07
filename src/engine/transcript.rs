//! Replayable record of a game.
//!
//! A transcript holds the raw options, the seed, and every accepted raw move
//! in submission order. Replaying it through a fresh engine rebuilds the same
//! history, provided the game derives all randomness from the seed.
//!
//! Raw inputs are stored as JSON text so the transcript can be encoded with
//! `bincode`, which cannot carry self-describing `serde_json::Value`s.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::core::{EngineError, PlayerId};

use super::game::Game;
use super::turn_engine::TurnEngine;

/// Errors from persisting or replaying a transcript.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("transcript encoding error: {0}")]
    Encoding(#[from] bincode::Error),
    #[error("transcript holds malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("replay diverged: {0}")]
    Replay(#[from] EngineError),
}

/// One accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    /// Who played it.
    pub player: PlayerId,
    /// The raw move as submitted, as JSON text.
    pub raw: String,
}

/// Everything needed to rebuild an engine's history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    options: String,
    seed: Option<String>,
    moves: Vec<RecordedMove>,
}

impl Transcript {
    pub(crate) fn new(raw_options: &Value) -> Self {
        Self {
            options: raw_options.to_string(),
            seed: None,
            moves: Vec::new(),
        }
    }

    pub(crate) fn record_start(&mut self, seed: &str) {
        self.seed = Some(seed.to_owned());
    }

    pub(crate) fn record_move(&mut self, player: PlayerId, raw: &Value) {
        self.moves.push(RecordedMove {
            player,
            raw: raw.to_string(),
        });
    }

    /// The raw options the engine was built from.
    pub fn options(&self) -> Result<Value, TranscriptError> {
        Ok(serde_json::from_str(&self.options)?)
    }

    /// The start seed, if the game was started.
    #[must_use]
    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    /// Accepted moves in submission order.
    #[must_use]
    pub fn moves(&self) -> &[RecordedMove] {
        &self.moves
    }

    /// Rebuild an engine by replaying this transcript.
    pub fn replay<G: Game>(&self) -> Result<TurnEngine<G>, TranscriptError> {
        let mut engine = TurnEngine::<G>::new(&self.options()?)?;

        if let Some(seed) = &self.seed {
            engine.start(seed)?;
        }

        for recorded in &self.moves {
            let raw: Value = serde_json::from_str(&recorded.raw)?;
            engine.play_move(&raw, recorded.player)?;
        }

        Ok(engine)
    }

    /// Serialize with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TranscriptError> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from `bincode` bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TranscriptError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
