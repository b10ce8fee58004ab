//! # dots-boxes
//!
//! A game-state engine for two-player Dots and Boxes on an N×N grid of
//! boxes, with a Monte Carlo Tree Search opponent.
//!
//! ## Rules
//!
//! Players alternately claim unclaimed edges between adjacent dots. Claiming
//! the fourth side of one or two boxes awards them to the mover, who then
//! moves again. A claim that completes nothing passes the turn. The game ends
//! once every box is owned, and the player with more boxes wins.
//!
//! ## Architecture
//!
//! - **Flat edge arena**: the board stores claims in a single `Vec<bool>`,
//!   horizontal edges first, so edge and box lookups are index arithmetic.
//!
//! - **Persistent history**: moves live in an `im::Vector`, keeping
//!   `GameEngine` cheap to clone for search.
//!
//! - **Atomic claims**: a rejected claim leaves the game exactly as it was.
//!
//! ## Modules
//!
//! - `core`: Edges, cells, players, configuration, errors, RNG, move records
//! - `board`: Edge claims and box ownership
//! - `rules`: `GameEngine`, turn order and scoring
//! - `mcts`: Monte Carlo Tree Search for AI

pub mod board;
pub mod core;
pub mod mcts;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    CellId, Edge, GameConfig, GameError, GameRng, MoveRecord, Orientation, PlayerId, PlayerMap,
    Side,
};

pub use crate::board::Board;

pub use crate::rules::{ClaimOutcome, GameEngine, GamePhase, GameResult};

pub use crate::mcts::{
    GreedySimulation, MCTSConfig, MCTSSearch, RandomSimulation, SearchStats, SelectionPolicy,
    SimulationPolicy, UCB1,
};
