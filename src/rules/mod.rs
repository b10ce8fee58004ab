//! Game rules: the engine and the values it reports.
//!
//! - `GameEngine` validates and applies claims, awards completed cells and
//!   decides whose turn it is
//! - `ClaimOutcome` describes one accepted claim
//! - `GameResult` is the final verdict once every cell is owned

pub mod engine;
pub mod outcome;

pub use engine::GameEngine;
pub use outcome::{ClaimOutcome, GamePhase, GameResult};
