//! Player identification, observers, and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## Observer
//!
//! Who is looking at the game: a seated player or a spectator. There is no
//! sentinel player id; "nobody" is its own variant.
//!
//! ## PlayerMap
//!
//! Efficient per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check whether this id names a seat in a game of `player_count` players.
    #[must_use]
    pub const fn is_seated(self, player_count: usize) -> bool {
        self.index() < player_count
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_tbg::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Someone observing the game.
///
/// Spectators see public information only. A player sees public information
/// plus their own private information.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Observer {
    /// A seated player.
    Player(PlayerId),
    /// Anyone without a seat.
    Spectator,
}

impl Observer {
    /// The observer's seat, if any.
    #[must_use]
    pub const fn player(self) -> Option<PlayerId> {
        match self {
            Observer::Player(p) => Some(p),
            Observer::Spectator => None,
        }
    }
}

impl From<PlayerId> for Observer {
    fn from(player: PlayerId) -> Self {
        Observer::Player(player)
    }
}

impl From<Option<PlayerId>> for Observer {
    fn from(player: Option<PlayerId>) -> Self {
        player.map_or(Observer::Spectator, Observer::Player)
    }
}

impl std::fmt::Display for Observer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Observer::Player(p) => write!(f, "{}", p),
            Observer::Spectator => write!(f, "Spectator"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
/// Use `PlayerMap::new()` to create with a factory function,
/// or `PlayerMap::with_value()` to initialize all entries to the same value.
/// Serializes as a plain sequence indexed by player.
///
/// ## Example
///
/// ```
/// use rust_tbg::core::{PlayerId, PlayerMap};
///
/// // Create with factory
/// let mut score: PlayerMap<u32> = PlayerMap::new(4, |_| 0);
///
/// // Modify
/// score[PlayerId::new(1)] = 3;
/// assert_eq!(score[PlayerId::new(1)], 3);
/// assert_eq!(score.get(PlayerId::new(7)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Create a PlayerMap from values already ordered by player.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, or `None` for an unseated id.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Entries in player order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }

    /// Build a new map by transforming every entry.
    pub fn map<U>(&self, f: impl Fn(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: self.iter().map(|(p, v)| f(p, v)).collect(),
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
