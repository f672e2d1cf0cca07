//! Core engine types: players, observers, updates, RNG, errors.
//!
//! This module contains the fundamental building blocks that are game-agnostic.
//! Games produce `Update`s; the engine records them and hands out
//! `Observation`s per viewer.

pub mod error;
pub mod player;
pub mod rng;
pub mod update;

pub use error::{EngineError, ErrorKind, Lifecycle, OutOfTurn, Rejection};
pub use player::{Observer, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use update::{Observation, ToPlay, Update};
