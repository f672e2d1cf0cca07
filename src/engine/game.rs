//! The contract every game specialization implements.
//!
//! The engine calls into `Game` but never interprets game-specific
//! concepts directly. Any bookkeeping the rules need (scores, boards,
//! hands) lives inside the implementing type.

use im::OrdMap;
use serde_json::Value;

use crate::core::{PlayerId, Rejection, Update};

/// Sanitized moves for the current turn, keyed by player.
///
/// Ordered by player, so iteration order never depends on submission order.
pub type PendingMoves<M> = OrdMap<PlayerId, M>;

/// Update type produced by a game.
pub type GameUpdate<G> = Update<<G as Game>::PublicInfo, <G as Game>::PrivateInfo>;

/// Rules of one game, plugged into [`super::TurnEngine`].
///
/// ## Implementation Notes
///
/// - `sanitize_options` / `sanitize_move`: structural checks only. They take
///   no `&self`, so they cannot consult game state.
/// - `assert_move_is_legal`: may read game state, must not change it.
/// - `process_turn`: receives exactly one move per player in the previous
///   update's `to_play`. It is only ever given sanitized, legal moves and is
///   expected to succeed.
/// - `winners`: may be asked at any point after start, not only at the end.
pub trait Game: Sized {
    /// Validated configuration.
    type Options: Clone + std::fmt::Debug;
    /// Sanitized move.
    type Move: Clone + std::fmt::Debug;
    /// Information every observer may see.
    type PublicInfo: Clone + std::fmt::Debug;
    /// Information one player may see.
    type PrivateInfo: Clone + std::fmt::Debug;

    /// Validate and default untrusted configuration.
    ///
    /// Must be deterministic for the same raw input.
    fn sanitize_options(raw: &Value) -> Result<Self::Options, Rejection>;

    /// Number of seats, fixed for the game's lifetime. At least 1.
    fn number_of_players_for_options(options: &Self::Options) -> usize;

    /// Build the rule state for a new game.
    fn from_options(options: &Self::Options) -> Self;

    /// Check the shape of an untrusted move. No legality checks.
    fn sanitize_move(options: &Self::Options, raw: &Value) -> Result<Self::Move, Rejection>;

    /// Check a sanitized move against the current position.
    fn assert_move_is_legal(&self, mv: &Self::Move, player: PlayerId) -> Result<(), Rejection>;

    /// Produce the first update. The seed is opaque to the engine.
    fn initialize(&mut self, seed: &str) -> GameUpdate<Self>;

    /// Resolve one turn from every required player's move.
    fn process_turn(&mut self, moves: &PendingMoves<Self::Move>) -> GameUpdate<Self>;

    /// Players who have secured victory so far.
    fn winners(&self) -> Vec<PlayerId>;
}
