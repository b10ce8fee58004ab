//! Values returned by the engine: move outcomes, phases, final results.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CellId, Edge, PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One player owns strictly more cells.
    Winner(PlayerId),
    /// Both players own the same number of cells.
    Tie,
}

impl GameResult {
    /// Decide the result from final scores.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let first = scores[PlayerId::First];
        let second = scores[PlayerId::Second];
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::First),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::Second),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "{} wins", player),
            GameResult::Tie => write!(f, "Tie game"),
        }
    }
}

/// Lifecycle of a game. `Finished` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    InProgress,
    Finished,
}

/// Everything a front end needs to redraw after an accepted claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimOutcome {
    /// The edge that was drawn.
    pub edge: Edge,

    /// Who drew it.
    pub player: PlayerId,

    /// Cells this claim completed, all now owned by `player`.
    pub completed: SmallVec<[CellId; 2]>,

    /// Scores after the claim.
    pub scores: PlayerMap<u32>,

    /// Whose turn it is now.
    pub next_player: PlayerId,

    /// Did this claim end the game?
    pub finished: bool,
}

impl ClaimOutcome {
    /// Number of cells completed, 0 to 2.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Did the mover keep the turn?
    #[must_use]
    pub fn extra_turn(&self) -> bool {
        !self.completed.is_empty()
    }
}
