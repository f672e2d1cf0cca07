//! Abstract-strategy games: two players, deterministic, perfect information.
//!
//! The public update of each turn is the move itself. The outcome is one
//! of four states, so winners follow directly from it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{PlayerId, Rejection};

use super::alternating::{Alternating, AlternatingGame, Step};

/// State of an abstract-strategy game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyOutcome {
    InProgress,
    Draw,
    FirstPlayerWins,
    SecondPlayerWins,
}

impl StrategyOutcome {
    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(self) -> bool {
        self != StrategyOutcome::InProgress
    }

    /// Winning players. Empty for draws and games in progress.
    #[must_use]
    pub fn winners(self) -> Vec<PlayerId> {
        match self {
            StrategyOutcome::FirstPlayerWins => vec![PlayerId::new(0)],
            StrategyOutcome::SecondPlayerWins => vec![PlayerId::new(1)],
            StrategyOutcome::InProgress | StrategyOutcome::Draw => Vec::new(),
        }
    }
}

/// Rules of a two-player abstract-strategy game.
///
/// Player 0 is the first player. No seed, no hidden information.
pub trait AbstractStrategyGame: Sized {
    type Options: Clone + std::fmt::Debug;
    type Move: Clone + std::fmt::Debug;

    fn sanitize_options(raw: &Value) -> Result<Self::Options, Rejection>;

    fn from_options(options: &Self::Options) -> Self;

    fn sanitize_move(options: &Self::Options, raw: &Value) -> Result<Self::Move, Rejection>;

    fn assert_move_is_legal(&self, mv: &Self::Move, player: PlayerId) -> Result<(), Rejection>;

    /// Whose move it is. Only consulted while the game is in progress.
    fn player_to_play(&self) -> PlayerId;

    /// Apply a sanitized, legal move.
    fn play(&mut self, mv: &Self::Move, player: PlayerId);

    fn outcome(&self) -> StrategyOutcome;
}

/// Runs an [`AbstractStrategyGame`] as an [`AlternatingGame`].
///
/// Public info is `None` at the start, then the move just played.
#[derive(Clone, Debug)]
pub struct AbstractStrategy<G>(G);

impl<G> AbstractStrategy<G> {
    /// The wrapped game.
    #[must_use]
    pub fn inner(&self) -> &G {
        &self.0
    }
}

/// An abstract-strategy game ready for [`crate::engine::TurnEngine`].
pub type StrategyGame<G> = Alternating<AbstractStrategy<G>>;

impl<G: AbstractStrategyGame> AlternatingGame for AbstractStrategy<G> {
    type Options = G::Options;
    type Move = G::Move;
    type PublicInfo = Option<G::Move>;
    type PrivateInfo = ();

    fn sanitize_options(raw: &Value) -> Result<Self::Options, Rejection> {
        G::sanitize_options(raw)
    }

    fn number_of_players_for_options(_: &Self::Options) -> usize {
        2
    }

    fn from_options(options: &Self::Options) -> Self {
        Self(G::from_options(options))
    }

    fn sanitize_move(options: &Self::Options, raw: &Value) -> Result<Self::Move, Rejection> {
        G::sanitize_move(options, raw)
    }

    fn assert_move_is_legal(&self, mv: &Self::Move, player: PlayerId) -> Result<(), Rejection> {
        self.0.assert_move_is_legal(mv, player)
    }

    fn initialize(&mut self, _seed: &str) -> Step<Self::PublicInfo, ()> {
        Step::public(None)
    }

    fn player_to_play(&self) -> Option<PlayerId> {
        (!self.0.outcome().is_over()).then(|| self.0.player_to_play())
    }

    fn process_move(&mut self, mv: &Self::Move, player: PlayerId) -> Step<Self::PublicInfo, ()> {
        self.0.play(mv, player);
        Step::public(Some(mv.clone()))
    }

    fn winners(&self) -> Vec<PlayerId> {
        self.0.outcome().winners()
    }
}
