//! Generic turn engine: move submission and turn resolution.
//!
//! ## Lifecycle
//!
//! - **Unstarted**: history is empty
//! - **AwaitingMoves**: latest update has players to play
//! - **Terminal**: latest update has nobody to play
//!
//! `start` moves from Unstarted to one of the others exactly once. Each
//! `play_move` buffers one player's move; when every required player has
//! submitted, the turn resolves atomically into a new update.
//!
//! ## Example
//!
//! ```
//! use rust_tbg::engine::TurnEngine;
//! use rust_tbg::games::tictactoe::TicTacToeGame;
//! use rust_tbg::core::PlayerId;
//! use serde_json::json;
//!
//! let mut engine = TurnEngine::<TicTacToeGame>::new(&json!(null)).unwrap();
//! engine.start("unused").unwrap();
//!
//! assert!(engine.play_move(&json!(4), PlayerId::new(0)).unwrap());
//! assert_eq!(engine.players_to_play(), &[PlayerId::new(1)]);
//! ```

use im::Vector;
use rustc_hash::FxHashSet;
use serde_json::Value;
use tracing::{debug, info};

use crate::core::{EngineError, Lifecycle, Observation, Observer, OutOfTurn, PlayerId};

use super::game::{Game, GameUpdate, PendingMoves};
use super::transcript::Transcript;

/// Where the engine is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// `start` has not been called.
    Unstarted,
    /// At least one player owes a move.
    AwaitingMoves,
    /// No further moves are possible.
    Terminal,
}

/// Owns the authoritative history and the current turn's pending moves.
///
/// Single-threaded: callers feeding moves from several threads must
/// serialize access to one engine themselves.
#[derive(Clone)]
pub struct TurnEngine<G: Game> {
    game: G,
    options: G::Options,
    player_count: usize,
    history: Vector<GameUpdate<G>>,
    pending: PendingMoves<G::Move>,
    transcript: Transcript,
}

impl<G: Game> TurnEngine<G> {
    /// Create an engine from untrusted configuration.
    ///
    /// # Errors
    ///
    /// `InvalidOptions` if the game rejects the configuration.
    ///
    /// # Panics
    ///
    /// If the game reports a player count outside `1..=255`.
    pub fn new(raw_options: &Value) -> Result<Self, EngineError> {
        let options = G::sanitize_options(raw_options).map_err(|reason| {
            EngineError::InvalidOptions {
                raw: raw_options.clone(),
                reason,
            }
        })?;

        let player_count = G::number_of_players_for_options(&options);
        assert!(player_count >= 1, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        debug!(?options, player_count, "engine created");

        Ok(Self {
            game: G::from_options(&options),
            options,
            player_count,
            history: Vector::new(),
            pending: PendingMoves::new(),
            transcript: Transcript::new(raw_options),
        })
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Sanitized configuration.
    #[must_use]
    pub fn options(&self) -> &G::Options {
        &self.options
    }

    /// Read-only access to the rules, e.g. for bots enumerating moves.
    #[must_use]
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Record of options, seed, and accepted moves.
    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> EngineState {
        match self.history.last() {
            None => EngineState::Unstarted,
            Some(update) if update.is_terminal() => EngineState::Terminal,
            Some(_) => EngineState::AwaitingMoves,
        }
    }

    /// Number of resolved turns.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    /// Start the game, producing history entry 0.
    ///
    /// # Errors
    ///
    /// `Lifecycle::AlreadyStarted` on any call after the first.
    pub fn start(&mut self, seed: &str) -> Result<(), EngineError> {
        if !self.history.is_empty() {
            return Err(Lifecycle::AlreadyStarted.into());
        }

        let update = self.game.initialize(seed);
        let update = self.seal(update);

        info!(
            seed,
            players = self.player_count,
            to_play = ?update.to_play(),
            "game started"
        );
        if let Some(winners) = update.winners() {
            info!(?winners, "game over before the first move");
        }

        self.history.push_back(update);
        self.transcript.record_start(seed);
        Ok(())
    }

    /// Submit one player's move for the current turn.
    ///
    /// Returns `true` if this move completed the turn and a new update was
    /// appended, `false` if other required players still owe moves.
    ///
    /// # Errors
    ///
    /// Checked in order, stopping at the first failure:
    /// 1. `OutOfTurn::NotStarted` before `start`
    /// 2. `OutOfTurn::GameOver` once terminal
    /// 3. `OutOfTurn::NotToPlay` if `player` is not required this turn
    /// 4. `OutOfTurn::AlreadyPlayed` if `player` already submitted
    /// 5. `InvalidMove` if the game cannot sanitize `raw`
    /// 6. `IllegalMove` if the sanitized move is not legal now
    ///
    /// Nothing is mutated on any error.
    pub fn play_move(&mut self, raw: &Value, player: PlayerId) -> Result<bool, EngineError> {
        let result = self.submit(raw, player);
        if let Err(err) = &result {
            debug!(%player, kind = ?err.kind(), %err, "move rejected");
        }
        result
    }

    fn submit(&mut self, raw: &Value, player: PlayerId) -> Result<bool, EngineError> {
        let out_of_turn = |reason| EngineError::OutOfTurn {
            raw: raw.clone(),
            player,
            reason,
        };

        let latest = self
            .history
            .last()
            .ok_or_else(|| out_of_turn(OutOfTurn::NotStarted))?;
        if latest.is_terminal() {
            return Err(out_of_turn(OutOfTurn::GameOver));
        }
        if !latest.to_play().contains(&player) {
            return Err(out_of_turn(OutOfTurn::NotToPlay));
        }
        if self.pending.contains_key(&player) {
            return Err(out_of_turn(OutOfTurn::AlreadyPlayed));
        }
        let required = latest.to_play().len();

        let mv = G::sanitize_move(&self.options, raw).map_err(|reason| {
            EngineError::InvalidMove {
                raw: raw.clone(),
                player,
                reason,
            }
        })?;
        self.game
            .assert_move_is_legal(&mv, player)
            .map_err(|reason| EngineError::IllegalMove {
                raw: raw.clone(),
                player,
                reason,
            })?;

        debug!(%player, ?mv, "move accepted");
        self.pending.insert(player, mv);
        self.transcript.record_move(player, raw);

        if self.pending.len() < required {
            return Ok(false);
        }

        self.resolve_turn();
        Ok(true)
    }

    /// Hand the full pending set to the game and append the result.
    fn resolve_turn(&mut self) {
        let moves = std::mem::take(&mut self.pending);
        let update = self.game.process_turn(&moves);
        let update = self.seal(update);

        debug!(
            turn = self.history.len(),
            to_play = ?update.to_play(),
            "turn resolved"
        );
        if let Some(winners) = update.winners() {
            info!(?winners, turns = self.history.len(), "game over");
        }

        self.history.push_back(update);
    }

    /// Check a game-produced update and attach winners at terminal points.
    fn seal(&self, mut update: GameUpdate<G>) -> GameUpdate<G> {
        let mut seen = FxHashSet::default();
        for &player in update.to_play() {
            assert!(
                player.is_seated(self.player_count),
                "{} is not seated in a {}-player game",
                player,
                self.player_count
            );
            assert!(seen.insert(player), "{} listed twice in to_play", player);
        }
        if let Some(private) = update.private_info() {
            assert_eq!(
                private.player_count(),
                self.player_count,
                "Private info must have one entry per player"
            );
        }

        if update.is_terminal() {
            update.set_winners(self.game.winners());
        } else {
            update.clear_winners();
        }
        update
    }

    /// The most recent update.
    ///
    /// # Errors
    ///
    /// `Lifecycle::NotStarted` before `start`.
    pub fn latest_update(&self) -> Result<&GameUpdate<G>, EngineError> {
        self.history
            .last()
            .ok_or(EngineError::Lifecycle(Lifecycle::NotStarted))
    }

    /// Snapshot of the full history. O(1); unaffected by later moves.
    ///
    /// # Errors
    ///
    /// `Lifecycle::NotStarted` before `start`.
    pub fn all_updates(&self) -> Result<Vector<GameUpdate<G>>, EngineError> {
        if self.history.is_empty() {
            return Err(Lifecycle::NotStarted.into());
        }
        Ok(self.history.clone())
    }

    /// Players required this turn. Empty if unstarted or terminal.
    #[must_use]
    pub fn players_to_play(&self) -> &[PlayerId] {
        self.history.last().map_or(&[][..], |update| update.to_play())
    }

    /// Required players who have not submitted yet.
    #[must_use]
    pub fn awaiting(&self) -> Vec<PlayerId> {
        self.players_to_play()
            .iter()
            .copied()
            .filter(|p| !self.pending.contains_key(p))
            .collect()
    }

    /// Whether `player` already has a buffered move this turn.
    #[must_use]
    pub fn has_played(&self, player: PlayerId) -> bool {
        self.pending.contains_key(&player)
    }

    /// Snapshot of the current turn's buffered moves.
    #[must_use]
    pub fn pending_moves(&self) -> PendingMoves<G::Move> {
        self.pending.clone()
    }

    /// Ask the game who has secured victory so far.
    ///
    /// # Errors
    ///
    /// `Lifecycle::NotStarted` before `start`.
    pub fn current_winners(&self) -> Result<Vec<PlayerId>, EngineError> {
        if self.history.is_empty() {
            return Err(Lifecycle::NotStarted.into());
        }
        Ok(self.game.winners())
    }

    /// The latest update from one observer's seat.
    ///
    /// # Errors
    ///
    /// `Lifecycle::NotStarted` before `start`.
    pub fn observe(
        &self,
        observer: Observer,
    ) -> Result<Observation<'_, G::PublicInfo, G::PrivateInfo>, EngineError> {
        Ok(self.latest_update()?.observe(observer))
    }

    /// The whole history from one observer's seat, oldest first.
    ///
    /// # Errors
    ///
    /// `Lifecycle::NotStarted` before `start`.
    pub fn observations(
        &self,
        observer: Observer,
    ) -> Result<impl Iterator<Item = Observation<'_, G::PublicInfo, G::PrivateInfo>>, EngineError>
    {
        if self.history.is_empty() {
            return Err(Lifecycle::NotStarted.into());
        }
        Ok(self.history.iter().map(move |update| update.observe(observer)))
    }
}

impl<G: Game> std::fmt::Debug for TurnEngine<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnEngine")
            .field("options", &self.options)
            .field("player_count", &self.player_count)
            .field("state", &self.state())
            .field("updates", &self.history.len())
            .field("pending", &self.pending.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
