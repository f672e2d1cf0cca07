//! Dice game configuration.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::Rejection;

/// Most seats a dice game supports.
pub const MAX_PLAYERS: usize = 8;

/// Highest accepted target score.
pub const MAX_POINTS_TO_WIN: u32 = 100;

/// Validated dice game configuration.
///
/// Missing fields take their defaults; unknown fields are rejected.
///
/// ```
/// use rust_tbg::games::dice::DiceOptions;
///
/// let options = DiceOptions::default().with_players(3).with_points_to_win(5);
/// assert_eq!(options.to_value()["players"], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiceOptions {
    /// Number of seats (1-8).
    pub players: usize,
    /// Score that ends the game (1-100).
    pub points_to_win: u32,
}

impl Default for DiceOptions {
    fn default() -> Self {
        Self {
            players: 2,
            points_to_win: 5,
        }
    }
}

impl DiceOptions {
    #[must_use]
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    #[must_use]
    pub fn with_points_to_win(mut self, points: u32) -> Self {
        self.points_to_win = points;
        self
    }

    /// Raw form, as a caller would submit it.
    #[must_use]
    pub fn to_value(&self) -> Value {
        json!({
            "players": self.players,
            "points_to_win": self.points_to_win,
        })
    }

    /// Parse and range-check untrusted configuration. `null` means defaults.
    pub fn sanitize(raw: &Value) -> Result<Self, Rejection> {
        let options: Self = if raw.is_null() {
            Self::default()
        } else if raw.is_object() {
            serde_json::from_value(raw.clone())?
        } else {
            return Err(Rejection::new("options must be a JSON object or null"));
        };

        if !(1..=MAX_PLAYERS).contains(&options.players) {
            return Err(Rejection::new(format!(
                "players must be between 1 and {}, got {}",
                MAX_PLAYERS, options.players
            )));
        }
        if !(1..=MAX_POINTS_TO_WIN).contains(&options.points_to_win) {
            return Err(Rejection::new(format!(
                "points_to_win must be between 1 and {}, got {}",
                MAX_POINTS_TO_WIN, options.points_to_win
            )));
        }
        Ok(options)
    }
}
