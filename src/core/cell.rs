//! Cell identifiers and the four sides of a cell.

use serde::{Deserialize, Serialize};

use super::edge::Edge;

/// One side of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// All four sides.
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];
}

/// Identifier of one box on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellId {
    pub row: usize,
    pub col: usize,
}

impl CellId {
    /// Create a new cell identifier.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check that the cell lies on a grid of the given dimension.
    #[must_use]
    pub const fn is_within(self, dimension: usize) -> bool {
        self.row < dimension && self.col < dimension
    }

    /// The edge on the given side of this cell.
    #[must_use]
    pub const fn edge(self, side: Side) -> Edge {
        match side {
            Side::Top => Edge::horizontal(self.row, self.col),
            Side::Bottom => Edge::horizontal(self.row + 1, self.col),
            Side::Left => Edge::vertical(self.row, self.col),
            Side::Right => Edge::vertical(self.row, self.col + 1),
        }
    }

    /// The four edges bounding this cell, in `Side::ALL` order.
    #[must_use]
    pub const fn edges(self) -> [Edge; 4] {
        [
            self.edge(Side::Top),
            self.edge(Side::Bottom),
            self.edge(Side::Left),
            self.edge(Side::Right),
        ]
    }

    /// Every cell of the grid, row-major.
    pub fn all(dimension: usize) -> impl Iterator<Item = CellId> {
        (0..dimension).flat_map(move |row| (0..dimension).map(move |col| CellId::new(row, col)))
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({}, {})", self.row, self.col)
    }
}
