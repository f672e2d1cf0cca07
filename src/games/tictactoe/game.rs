//! Tic-tac-toe rules.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::adapters::{AbstractStrategyGame, StrategyGame, StrategyOutcome};
use crate::core::{PlayerId, Rejection};

/// Rows, columns, diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Tic-tac-toe takes no configuration; `null` and `{}` are both accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TicTacToeOptions {}

/// A board cell, 0-8 in reading order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell(u8);

impl Cell {
    /// Create a cell, or `None` if off the board.
    #[must_use]
    pub fn new(index: u8) -> Option<Self> {
        (index < 9).then_some(Self(index))
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Board and side to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicTacToe {
    board: [Option<PlayerId>; 9],
    next: PlayerId,
}

/// Tic-tac-toe ready for the turn engine.
pub type TicTacToeGame = StrategyGame<TicTacToe>;

impl TicTacToe {
    /// Cells in reading order; `None` is empty.
    #[must_use]
    pub fn board(&self) -> &[Option<PlayerId>; 9] {
        &self.board
    }

    /// Empty cells, in order. Empty once the game is over.
    #[must_use]
    pub fn open_cells(&self) -> Vec<Cell> {
        if self.outcome().is_over() {
            return Vec::new();
        }
        (0..9u8)
            .filter(|&i| self.board[i as usize].is_none())
            .map(Cell)
            .collect()
    }

    fn line_owner(&self) -> Option<PlayerId> {
        LINES.iter().find_map(|&[a, b, c]| match self.board[a] {
            Some(p) if self.board[b] == Some(p) && self.board[c] == Some(p) => Some(p),
            _ => None,
        })
    }
}

impl std::fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.board.chunks(3) {
            for cell in row {
                let c = match cell {
                    Some(PlayerId(0)) => 'X',
                    Some(_) => 'O',
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl AbstractStrategyGame for TicTacToe {
    type Options = TicTacToeOptions;
    type Move = Cell;

    fn sanitize_options(raw: &Value) -> Result<Self::Options, Rejection> {
        if raw.is_null() {
            return Ok(TicTacToeOptions::default());
        }
        if !raw.is_object() {
            return Err(Rejection::new("options must be a JSON object or null"));
        }
        Ok(serde_json::from_value(raw.clone())?)
    }

    fn from_options(_: &Self::Options) -> Self {
        Self {
            board: [None; 9],
            next: PlayerId::new(0),
        }
    }

    fn sanitize_move(_: &Self::Options, raw: &Value) -> Result<Cell, Rejection> {
        raw.as_u64()
            .and_then(|n| u8::try_from(n).ok())
            .and_then(Cell::new)
            .ok_or_else(|| Rejection::new("expected a cell index from 0 to 8"))
    }

    fn assert_move_is_legal(&self, mv: &Cell, _: PlayerId) -> Result<(), Rejection> {
        match self.board[mv.index()] {
            Some(owner) => Err(Rejection::new(format!(
                "cell {} is already taken by {}",
                mv.0, owner
            ))),
            None => Ok(()),
        }
    }

    fn player_to_play(&self) -> PlayerId {
        self.next
    }

    fn play(&mut self, mv: &Cell, player: PlayerId) {
        self.board[mv.index()] = Some(player);
        self.next = PlayerId::new(1 - player.0);
    }

    fn outcome(&self) -> StrategyOutcome {
        match self.line_owner() {
            Some(PlayerId(0)) => StrategyOutcome::FirstPlayerWins,
            Some(_) => StrategyOutcome::SecondPlayerWins,
            None if self.board.iter().all(Option::is_some) => StrategyOutcome::Draw,
            None => StrategyOutcome::InProgress,
        }
    }
}
