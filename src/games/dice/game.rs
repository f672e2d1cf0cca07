//! Dice guessing rules.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{GameRng, PlayerId, PlayerMap, Rejection, Update};
use crate::engine::{Game, GameUpdate, PendingMoves};

use super::options::DiceOptions;

const SIDES: u8 = 6;

/// What a caller bets on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Guess {
    /// The sum of all private rolls is even.
    Even,
    /// The sum of all private rolls is odd.
    Odd,
    /// Roll a fresh die: +2 on 4-6, -1 otherwise. Only when the caller's
    /// private roll equals their public roll.
    Gamble,
}

/// A call, as submitted: `{"guess": "even"}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiceMove {
    pub guess: Guess,
}

impl DiceMove {
    #[must_use]
    pub const fn new(guess: Guess) -> Self {
        Self { guess }
    }
}

/// What everybody sees after each update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePublic {
    /// Public die per player for the round now being called.
    pub public_rolls: PlayerMap<u8>,
    /// Calls made in the turn just resolved; `None` for players who did not call.
    pub calls: PlayerMap<Option<DiceMove>>,
    /// Sum of the private rolls the calls were made against.
    pub revealed_total: Option<u32>,
    /// Fresh dice rolled for gamblers in the turn just resolved.
    pub gamble_rolls: PlayerMap<Option<u8>>,
    /// Running scores.
    pub scores: PlayerMap<u32>,
}

/// What only one player sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePrivate {
    pub private_roll: u8,
}

/// Independent random streams, so gambles never shift later rolls.
#[derive(Clone, Debug)]
struct DiceRngs {
    public: GameRng,
    private: GameRng,
    gamble: GameRng,
}

impl DiceRngs {
    fn from_seed(seed: &str) -> Self {
        let root = GameRng::from_seed_str(seed);
        Self {
            public: root.for_context("public"),
            private: root.for_context("private"),
            gamble: root.for_context("gamble"),
        }
    }
}

/// Every round each player holds a public and a private die. Players tied
/// for the highest public die must call the parity of the private total,
/// or gamble when their two dice match. First to the target score wins.
#[derive(Clone, Debug)]
pub struct DiceGame {
    options: DiceOptions,
    scores: PlayerMap<u32>,
    public_rolls: PlayerMap<u8>,
    private_rolls: PlayerMap<u8>,
    rngs: DiceRngs,
}

impl DiceGame {
    /// Validated configuration.
    #[must_use]
    pub fn options(&self) -> &DiceOptions {
        &self.options
    }

    /// Running scores.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// Current public dice.
    #[must_use]
    pub fn public_rolls(&self) -> &PlayerMap<u8> {
        &self.public_rolls
    }

    /// Whether `player` may gamble this round.
    #[must_use]
    pub fn can_gamble(&self, player: PlayerId) -> bool {
        self.public_rolls.get(player).is_some()
            && self.public_rolls.get(player) == self.private_rolls.get(player)
    }

    fn roll_all(rng: &mut GameRng, players: usize) -> PlayerMap<u8> {
        PlayerMap::from_vec((0..players).map(|_| rng.roll_die(SIDES)).collect())
    }

    fn reroll(&mut self) {
        self.public_rolls = Self::roll_all(&mut self.rngs.public, self.options.players);
        self.private_rolls = Self::roll_all(&mut self.rngs.private, self.options.players);
    }

    /// Players tied for the highest public die, or nobody once someone won.
    fn callers(&self) -> Vec<PlayerId> {
        if !self.winners().is_empty() {
            return Vec::new();
        }
        let top = self.public_rolls.as_slice().iter().max().copied();
        self.public_rolls
            .iter()
            .filter(|&(_, &roll)| Some(roll) == top)
            .map(|(p, _)| p)
            .collect()
    }

    fn private_info(&self) -> PlayerMap<DicePrivate> {
        self.private_rolls.map(|_, &private_roll| DicePrivate { private_roll })
    }

    fn update(
        &self,
        calls: PlayerMap<Option<DiceMove>>,
        revealed_total: Option<u32>,
        gamble_rolls: PlayerMap<Option<u8>>,
    ) -> GameUpdate<Self> {
        let public = DicePublic {
            public_rolls: self.public_rolls.clone(),
            calls,
            revealed_total,
            gamble_rolls,
            scores: self.scores.clone(),
        };
        Update::new(public, self.callers()).with_private_info(self.private_info())
    }
}

impl Game for DiceGame {
    type Options = DiceOptions;
    type Move = DiceMove;
    type PublicInfo = DicePublic;
    type PrivateInfo = DicePrivate;

    fn sanitize_options(raw: &Value) -> Result<DiceOptions, Rejection> {
        DiceOptions::sanitize(raw)
    }

    fn number_of_players_for_options(options: &DiceOptions) -> usize {
        options.players
    }

    fn from_options(options: &DiceOptions) -> Self {
        let players = options.players;
        Self {
            options: options.clone(),
            scores: PlayerMap::with_value(players, 0),
            public_rolls: PlayerMap::with_value(players, 0),
            private_rolls: PlayerMap::with_value(players, 0),
            // Reseeded in `initialize`
            rngs: DiceRngs::from_seed(""),
        }
    }

    fn sanitize_move(_: &DiceOptions, raw: &Value) -> Result<DiceMove, Rejection> {
        if !raw.is_object() {
            return Err(Rejection::new(r#"expected a call like {"guess": "even"}"#));
        }
        Ok(serde_json::from_value(raw.clone())?)
    }

    fn assert_move_is_legal(&self, mv: &DiceMove, player: PlayerId) -> Result<(), Rejection> {
        if mv.guess == Guess::Gamble && !self.can_gamble(player) {
            return Err(Rejection::new(
                "can only gamble when your private roll matches your public roll",
            ));
        }
        Ok(())
    }

    fn initialize(&mut self, seed: &str) -> GameUpdate<Self> {
        self.rngs = DiceRngs::from_seed(seed);
        self.reroll();

        let players = self.options.players;
        self.update(
            PlayerMap::with_value(players, None),
            None,
            PlayerMap::with_value(players, None),
        )
    }

    fn process_turn(&mut self, moves: &PendingMoves<DiceMove>) -> GameUpdate<Self> {
        let players = self.options.players;
        let total: u32 = self.private_rolls.as_slice().iter().map(|&r| u32::from(r)).sum();
        let total_is_even = total % 2 == 0;

        let mut gamble_rolls = vec![None; players];
        for (&player, mv) in moves.iter() {
            let score = &mut self.scores[player];
            match mv.guess {
                Guess::Even | Guess::Odd => {
                    if (mv.guess == Guess::Even) == total_is_even {
                        *score += 1;
                    }
                }
                Guess::Gamble => {
                    let roll = self.rngs.gamble.roll_die(SIDES);
                    gamble_rolls[player.index()] = Some(roll);
                    if roll >= 4 {
                        *score += 2;
                    } else {
                        *score = score.saturating_sub(1);
                    }
                }
            }
        }

        let calls = PlayerMap::new(players, |p| moves.get(&p).copied());
        if self.winners().is_empty() {
            self.reroll();
        }
        self.update(calls, Some(total), PlayerMap::from_vec(gamble_rolls))
    }

    fn winners(&self) -> Vec<PlayerId> {
        self.scores
            .iter()
            .filter(|&(_, &score)| score >= self.options.points_to_win)
            .map(|(p, _)| p)
            .collect()
    }
}
