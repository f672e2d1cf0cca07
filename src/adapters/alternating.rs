//! Alternating-turn games: at most one player moves at a time.
//!
//! Games implement [`AlternatingGame`] and say who moves next and what one
//! move does. [`Alternating`] wraps such a game and implements [`Game`]
//! for it, so it runs on the same [`crate::engine::TurnEngine`].

use serde_json::Value;

use crate::core::{PlayerId, PlayerMap, Rejection, Update};
use crate::engine::{Game, GameUpdate, PendingMoves};

/// Result of initializing or of one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step<PU, PR> {
    /// Information every observer may see.
    pub public_info: PU,
    /// Per-player hidden information, if any.
    pub private_info: Option<PlayerMap<PR>>,
}

impl<PU, PR> Step<PU, PR> {
    /// A step with public information only.
    pub fn public(public_info: PU) -> Self {
        Self {
            public_info,
            private_info: None,
        }
    }

    /// Attach per-player private info.
    #[must_use]
    pub fn with_private_info(mut self, private_info: PlayerMap<PR>) -> Self {
        self.private_info = Some(private_info);
        self
    }
}

/// Rules of a game where one player moves at a time.
///
/// Same option and move hooks as [`Game`]; turn resolution is replaced by
/// `player_to_play` and `process_move`.
pub trait AlternatingGame: Sized {
    type Options: Clone + std::fmt::Debug;
    type Move: Clone + std::fmt::Debug;
    type PublicInfo: Clone + std::fmt::Debug;
    type PrivateInfo: Clone + std::fmt::Debug;

    fn sanitize_options(raw: &Value) -> Result<Self::Options, Rejection>;

    fn number_of_players_for_options(options: &Self::Options) -> usize;

    fn from_options(options: &Self::Options) -> Self;

    fn sanitize_move(options: &Self::Options, raw: &Value) -> Result<Self::Move, Rejection>;

    fn assert_move_is_legal(&self, mv: &Self::Move, player: PlayerId) -> Result<(), Rejection>;

    fn initialize(&mut self, seed: &str) -> Step<Self::PublicInfo, Self::PrivateInfo>;

    /// Who moves next; `None` once the game is over.
    fn player_to_play(&self) -> Option<PlayerId>;

    /// Apply the single move of this turn.
    fn process_move(
        &mut self,
        mv: &Self::Move,
        player: PlayerId,
    ) -> Step<Self::PublicInfo, Self::PrivateInfo>;

    fn winners(&self) -> Vec<PlayerId>;
}

/// Runs an [`AlternatingGame`] as a [`Game`].
#[derive(Clone, Debug)]
pub struct Alternating<G>(G);

impl<G> Alternating<G> {
    /// The wrapped game.
    #[must_use]
    pub fn inner(&self) -> &G {
        &self.0
    }
}

impl<G: AlternatingGame> Alternating<G> {
    fn to_update(&self, step: Step<G::PublicInfo, G::PrivateInfo>) -> GameUpdate<Self> {
        let update = Update::new(step.public_info, self.0.player_to_play());
        match step.private_info {
            Some(private_info) => update.with_private_info(private_info),
            None => update,
        }
    }
}

impl<G: AlternatingGame> Game for Alternating<G> {
    type Options = G::Options;
    type Move = G::Move;
    type PublicInfo = G::PublicInfo;
    type PrivateInfo = G::PrivateInfo;

    fn sanitize_options(raw: &Value) -> Result<Self::Options, Rejection> {
        G::sanitize_options(raw)
    }

    fn number_of_players_for_options(options: &Self::Options) -> usize {
        G::number_of_players_for_options(options)
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

    fn initialize(&mut self, seed: &str) -> GameUpdate<Self> {
        let step = self.0.initialize(seed);
        self.to_update(step)
    }

    fn process_turn(&mut self, moves: &PendingMoves<Self::Move>) -> GameUpdate<Self> {
        assert_eq!(moves.len(), 1, "Alternating turns carry exactly one move");
        let Some((&player, mv)) = moves.iter().next() else {
            unreachable!("one move per alternating turn");
        };
        let step = self.0.process_move(mv, player);
        self.to_update(step)
    }

    fn winners(&self) -> Vec<PlayerId> {
        self.0.winners()
    }
}
