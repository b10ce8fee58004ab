//! Edge and cell storage for one board.
//!
//! Claimed flags live in a flat `Vec<bool>` laid out in `Edge::all` order:
//! the `(N + 1) * N` horizontal edges row-major, then the `N * (N + 1)`
//! vertical edges row-major. Owners are a row-major `Vec<Option<PlayerId>>`.
//!
//! A deserialized board is checked like a new one: vector lengths must match
//! the dimension, a cell is owned exactly when its four sides are drawn, and
//! the counters are recomputed from the vectors.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CellId, Edge, GameConfig, GameError, Orientation, PlayerId};

/// The grid of edges and cells.
///
/// `Board` only stores state and answers queries. Rule enforcement (turn
/// order, game over) is the job of `GameEngine`, the only code that mutates
/// a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    dimension: usize,
    claimed: Vec<bool>,
    owners: Vec<Option<PlayerId>>,
    claimed_count: usize,
    complete_count: usize,
}

impl Board {
    /// Create an empty board of the given dimension.
    pub fn new(dimension: usize) -> Result<Self, GameError> {
        GameConfig::new(dimension).validate()?;

        Ok(Self {
            dimension,
            claimed: vec![false; Edge::count(dimension)],
            owners: vec![None; dimension * dimension],
            claimed_count: 0,
            complete_count: 0,
        })
    }

    /// Number of cells along one side.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.claimed.len()
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.owners.len()
    }

    /// Number of claimed edges.
    #[must_use]
    pub fn claimed_edge_count(&self) -> usize {
        self.claimed_count
    }

    /// Number of complete (owned) cells.
    #[must_use]
    pub fn complete_cell_count(&self) -> usize {
        self.complete_count
    }

    /// Is every cell owned?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.complete_count == self.owners.len()
    }

    fn edge_index(&self, edge: Edge) -> Option<usize> {
        if !edge.is_within(self.dimension) {
            return None;
        }
        let n = self.dimension;
        Some(match edge.orientation {
            Orientation::Horizontal => edge.row * n + edge.col,
            Orientation::Vertical => (n + 1) * n + edge.row * (n + 1) + edge.col,
        })
    }

    fn cell_index(&self, cell: CellId) -> Option<usize> {
        cell.is_within(self.dimension).then(|| cell.row * self.dimension + cell.col)
    }

    /// Has this edge been drawn?
    pub fn is_claimed(&self, edge: Edge) -> Result<bool, GameError> {
        self.edge_index(edge)
            .map(|i| self.claimed[i])
            .ok_or(GameError::InvalidMove(edge))
    }

    /// Owner of a cell, `None` while it is incomplete.
    pub fn owner(&self, cell: CellId) -> Result<Option<PlayerId>, GameError> {
        self.cell_index(cell)
            .map(|i| self.owners[i])
            .ok_or(GameError::InvalidCell(cell))
    }

    /// How many of the cell's four sides are drawn.
    pub fn claimed_sides(&self, cell: CellId) -> Result<usize, GameError> {
        if !cell.is_within(self.dimension) {
            return Err(GameError::InvalidCell(cell));
        }
        Ok(cell
            .edges()
            .into_iter()
            .filter(|&e| self.is_claimed(e).unwrap_or(false))
            .count())
    }

    /// Undrawn edges in `Edge::all` order.
    pub fn unclaimed_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        Edge::all(self.dimension)
            .zip(self.claimed.iter())
            .filter(|&(_, &claimed)| !claimed)
            .map(|(edge, _)| edge)
    }

    /// Erase every edge and owner.
    pub(crate) fn clear(&mut self) {
        self.claimed.fill(false);
        self.owners.fill(None);
        self.claimed_count = 0;
        self.complete_count = 0;
    }

    /// Draw an edge for `player` and award any cell it completes.
    ///
    /// Validation has the same order and outcome as `GameEngine::claim_edge`
    /// minus the game-over check. On error the board is unchanged.
    pub(crate) fn claim(
        &mut self,
        edge: Edge,
        player: PlayerId,
    ) -> Result<SmallVec<[CellId; 2]>, GameError> {
        let index = self.edge_index(edge).ok_or(GameError::InvalidMove(edge))?;
        if self.claimed[index] {
            return Err(GameError::AlreadyClaimed(edge));
        }

        self.claimed[index] = true;
        self.claimed_count += 1;

        let mut completed = SmallVec::new();
        for cell in edge.adjacent_cells(self.dimension) {
            let Some(cell_index) = self.cell_index(cell) else {
                continue;
            };
            if self.owners[cell_index].is_none() && self.claimed_sides(cell) == Ok(4) {
                self.owners[cell_index] = Some(player);
                self.complete_count += 1;
                completed.push(cell);
            }
        }

        Ok(completed)
    }
}

/// Serialized form of a `Board`; the counters are derived, not trusted.
#[derive(Deserialize)]
struct BoardRepr {
    dimension: usize,
    claimed: Vec<bool>,
    owners: Vec<Option<PlayerId>>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let BoardRepr {
            dimension,
            claimed,
            owners,
        } = repr;

        let empty = Board::new(dimension)?;
        if claimed.len() != empty.edge_count() || owners.len() != empty.cell_count() {
            return Err(GameError::InvalidConfiguration { dimension });
        }

        let board = Board {
            dimension,
            claimed_count: claimed.iter().filter(|&&c| c).count(),
            complete_count: owners.iter().filter(|o| o.is_some()).count(),
            claimed,
            owners,
        };

        for cell in CellId::all(dimension) {
            let enclosed = board.claimed_sides(cell)? == 4;
            if board.owner(cell)?.is_some() != enclosed {
                return Err(GameError::InvalidCell(cell));
            }
        }

        Ok(board)
    }
}
