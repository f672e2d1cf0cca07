//! Tic-tac-toe on the abstract-strategy adapter.
//!
//! - Player 0 (X) moves first
//! - A move is a cell index 0-8 (JSON integer)
//! - Occupied cells are illegal

mod game;

pub use game::{Cell, TicTacToe, TicTacToeGame, TicTacToeOptions};
