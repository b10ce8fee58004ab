//! MCTS node and branch structures.
//!
//! Uses arena-based allocation with index references (NodeId) for efficiency
//! and serializability. A tree edge is called a `Branch` so it never gets
//! confused with a board `Edge`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Edge, PlayerId, PlayerMap};

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A candidate claim out of a node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Branch {
    /// The board edge this branch claims.
    pub edge: Edge,

    /// Child node (NONE if not yet expanded).
    pub child: NodeId,

    /// Visit count.
    pub visits: u32,

    /// Accumulated reward, per player.
    pub total_reward: PlayerMap<f64>,
}

impl Branch {
    /// Create an unvisited branch.
    pub fn new(edge: Edge) -> Self {
        Self {
            edge,
            child: NodeId::NONE,
            visits: 0,
            total_reward: PlayerMap::with_value(0.0),
        }
    }

    /// Get the mean reward for a player.
    #[must_use]
    pub fn mean_reward(&self, player: PlayerId) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward[player] / self.visits as f64
        }
    }

    /// Check if this branch has a child node.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.child.is_none()
    }
}

/// A position in the search tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSNode {
    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Player to move here. Several consecutive nodes can share a mover
    /// because completing a box keeps the turn.
    pub to_move: PlayerId,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Total visits to this node.
    pub visits: u32,

    /// Is the game over here?
    pub is_terminal: bool,

    /// Terminal rewards (if terminal).
    pub terminal_reward: Option<PlayerMap<f64>>,

    /// Outgoing branches, one per unclaimed edge.
    pub branches: SmallVec<[Branch; 4]>,
}

impl MCTSNode {
    /// Create a new node.
    pub fn new(parent: NodeId, to_move: PlayerId, depth: u16) -> Self {
        Self {
            parent,
            to_move,
            depth,
            visits: 0,
            is_terminal: false,
            terminal_reward: None,
            branches: SmallVec::new(),
        }
    }

    /// Create a root node.
    pub fn root(to_move: PlayerId) -> Self {
        Self::new(NodeId::NONE, to_move, 0)
    }

    /// Check if any branches are unexpanded.
    #[must_use]
    pub fn has_unexpanded(&self) -> bool {
        self.branches.iter().any(|b| !b.is_expanded())
    }

    /// Get indices of unexpanded branches.
    pub fn unexpanded_branches(&self) -> impl Iterator<Item = usize> + '_ {
        self.branches
            .iter()
            .enumerate()
            .filter(|(_, b)| !b.is_expanded())
            .map(|(i, _)| i)
    }

    /// Get the branch with the most visits.
    #[must_use]
    pub fn most_visited(&self) -> Option<&Branch> {
        self.branches.iter().max_by_key(|b| b.visits)
    }
}
