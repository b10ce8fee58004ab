//! Move records for game history.
//!
//! Used for:
//! - Replay and debugging
//! - Front ends that animate the last move

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::CellId;
use super::edge::Edge;
use super::player::PlayerId;

/// One accepted claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who drew the edge.
    pub player: PlayerId,

    /// The edge drawn.
    pub edge: Edge,

    /// Cells completed by this claim (zero, one or two).
    pub completed: SmallVec<[CellId; 2]>,

    /// Position of this move in the game, starting at 0.
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: PlayerId, edge: Edge, completed: &[CellId], sequence: u32) -> Self {
        Self {
            player,
            edge,
            completed: SmallVec::from_slice(completed),
            sequence,
        }
    }

    /// Did this move earn the player another turn?
    #[must_use]
    pub fn kept_turn(&self) -> bool {
        !self.completed.is_empty()
    }
}
