//! Errors returned by the engine.
//!
//! Every variant is recoverable: a rejected call leaves the game untouched and
//! the caller simply ignores the move.

use thiserror::Error;

use super::cell::CellId;
use super::config::MAX_DIMENSION;
use super::edge::Edge;

/// Errors that can occur when configuring or playing a game.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Board dimension must lie in `1..=MAX_DIMENSION`.
    #[error(
        "invalid configuration: board dimension {dimension} must be between 1 and {}",
        MAX_DIMENSION
    )]
    InvalidConfiguration { dimension: usize },

    /// Edge does not exist on this board.
    #[error("invalid move: {0} is outside the board")]
    InvalidMove(Edge),

    /// Cell does not exist on this board.
    #[error("{0} is outside the board")]
    InvalidCell(CellId),

    /// Edge has already been drawn.
    #[error("edge {0} is already claimed")]
    AlreadyClaimed(Edge),

    /// Every cell is owned; no further moves are accepted.
    #[error("game over")]
    GameOver,

    /// A result was requested while the game is still in progress.
    #[error("game is not finished")]
    NotFinished,
}
