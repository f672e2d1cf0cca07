//! Narrower game shapes adapted onto the generic [`crate::engine::Game`].
//!
//! - [`AlternatingGame`] / [`Alternating`]: one player moves per turn
//! - [`AbstractStrategyGame`] / [`AbstractStrategy`]: two players,
//!   deterministic, perfect information, the move is the public update
//!
//! ## Example
//!
//! ```
//! use rust_tbg::adapters::StrategyOutcome;
//! use rust_tbg::core::PlayerId;
//!
//! assert_eq!(StrategyOutcome::SecondPlayerWins.winners(), vec![PlayerId::new(1)]);
//! ```

mod alternating;
mod strategy;

pub use alternating::{Alternating, AlternatingGame, Step};
pub use strategy::{AbstractStrategy, AbstractStrategyGame, StrategyGame, StrategyOutcome};
