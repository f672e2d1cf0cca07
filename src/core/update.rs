//! Updates: the atomic unit of game history.
//!
//! ## Update
//!
//! One update per decision point:
//! - Public info, visible to every observer
//! - Players who must move before the next update (`to_play`)
//! - Winners, present only once `to_play` is empty
//! - Optional per-player private info
//!
//! ## Observation
//!
//! A borrowed view of an update from one observer's seat: public info plus
//! that observer's private info, nothing else.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{Observer, PlayerId, PlayerMap};

/// Players required to move before the next update.
///
/// SmallVec optimizes for up to 4 simultaneous players without heap allocation.
pub type ToPlay = SmallVec<[PlayerId; 4]>;

/// Record of one transition between decision points.
///
/// Games build updates with [`Update::new`] and [`Update::with_private_info`].
/// Winners are attached by the engine when `to_play` is empty, so games
/// never set them directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update<PU, PR> {
    public_info: PU,
    to_play: ToPlay,
    winners: Option<Vec<PlayerId>>,
    private_info: Option<PlayerMap<PR>>,
}

impl<PU, PR> Update<PU, PR> {
    /// Create an update with the players who must move next.
    ///
    /// An empty `to_play` marks a terminal point.
    pub fn new(public_info: PU, to_play: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            public_info,
            to_play: to_play.into_iter().collect(),
            winners: None,
            private_info: None,
        }
    }

    /// Attach per-player private info.
    #[must_use]
    pub fn with_private_info(mut self, private_info: PlayerMap<PR>) -> Self {
        self.private_info = Some(private_info);
        self
    }

    /// Information visible to every observer.
    #[must_use]
    pub fn public_info(&self) -> &PU {
        &self.public_info
    }

    /// Players who must move before the next update.
    #[must_use]
    pub fn to_play(&self) -> &[PlayerId] {
        &self.to_play
    }

    /// Whether no further moves are possible.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.to_play.is_empty()
    }

    /// Outcome at a terminal point; `None` while the game continues.
    #[must_use]
    pub fn winners(&self) -> Option<&[PlayerId]> {
        self.winners.as_deref()
    }

    /// All private info, indexed by player.
    #[must_use]
    pub fn private_info(&self) -> Option<&PlayerMap<PR>> {
        self.private_info.as_ref()
    }

    /// One player's private info.
    #[must_use]
    pub fn private_info_for(&self, player: PlayerId) -> Option<&PR> {
        self.private_info.as_ref().and_then(|info| info.get(player))
    }

    /// View this update from one observer's seat.
    #[must_use]
    pub fn observe(&self, observer: Observer) -> Observation<'_, PU, PR> {
        Observation {
            observer,
            public_info: &self.public_info,
            to_play: &self.to_play,
            winners: self.winners.as_deref(),
            private_info: observer.player().and_then(|p| self.private_info_for(p)),
        }
    }

    pub(crate) fn set_winners(&mut self, winners: Vec<PlayerId>) {
        self.winners = Some(winners);
    }

    /// Clears winners a game may have smuggled into a non-terminal update.
    pub(crate) fn clear_winners(&mut self) {
        self.winners = None;
    }
}

/// An update as seen by one observer.
#[derive(Debug, PartialEq, Eq)]
pub struct Observation<'a, PU, PR> {
    /// Who is looking.
    pub observer: Observer,
    /// Information visible to everyone.
    pub public_info: &'a PU,
    /// Players who must move next.
    pub to_play: &'a [PlayerId],
    /// Outcome, if terminal.
    pub winners: Option<&'a [PlayerId]>,
    /// The observer's own private info. Always `None` for spectators.
    pub private_info: Option<&'a PR>,
}

impl<PU, PR> Observation<'_, PU, PR> {
    /// Whether the observer must submit a move for this turn.
    #[must_use]
    pub fn must_play(&self) -> bool {
        self.observer
            .player()
            .is_some_and(|p| self.to_play.contains(&p))
    }
}

impl<PU, PR> Clone for Observation<'_, PU, PR> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<PU, PR> Copy for Observation<'_, PU, PR> {}
