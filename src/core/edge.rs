//! Edge identifiers and edge-to-cell adjacency.
//!
//! An edge joins two neighbouring junctions of the dot grid. On a board of
//! dimension `N`:
//!
//! - Horizontal `(row, col)` with `row ∈ [0, N]`, `col ∈ [0, N)` runs along the
//!   top of cell `(row, col)` and the bottom of cell `(row - 1, col)`.
//! - Vertical `(row, col)` with `row ∈ [0, N)`, `col ∈ [0, N]` runs along the
//!   left of cell `(row, col)` and the right of cell `(row, col - 1)`.
//!
//! Border edges touch one cell, interior edges touch two.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::CellId;

/// Direction an edge runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Identifier of one claimable edge.
///
/// ## Example
///
/// ```
/// use dots_boxes::core::{CellId, Edge};
///
/// // The edge between cells (0, 0) and (1, 0).
/// let edge = Edge::horizontal(1, 0);
/// let cells: Vec<_> = edge.adjacent_cells(2).into_iter().collect();
/// assert_eq!(cells, vec![CellId::new(1, 0), CellId::new(0, 0)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Edge {
    /// Create a new edge identifier.
    #[must_use]
    pub const fn new(row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    /// Horizontal edge at `(row, col)`.
    #[must_use]
    pub const fn horizontal(row: usize, col: usize) -> Self {
        Self::new(row, col, Orientation::Horizontal)
    }

    /// Vertical edge at `(row, col)`.
    #[must_use]
    pub const fn vertical(row: usize, col: usize) -> Self {
        Self::new(row, col, Orientation::Vertical)
    }

    /// Check that both endpoints lie on a grid of the given dimension.
    #[must_use]
    pub const fn is_within(self, dimension: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => self.row <= dimension && self.col < dimension,
            Orientation::Vertical => self.row < dimension && self.col <= dimension,
        }
    }

    /// Cells bordered by this edge, at most two.
    ///
    /// The cell below (horizontal) or to the right (vertical) comes first.
    /// Returns an empty set for an edge outside the grid.
    #[must_use]
    pub fn adjacent_cells(self, dimension: usize) -> SmallVec<[CellId; 2]> {
        let mut cells = SmallVec::new();
        if !self.is_within(dimension) {
            return cells;
        }

        match self.orientation {
            Orientation::Horizontal => {
                if self.row < dimension {
                    cells.push(CellId::new(self.row, self.col));
                }
                if self.row > 0 {
                    cells.push(CellId::new(self.row - 1, self.col));
                }
            }
            Orientation::Vertical => {
                if self.col < dimension {
                    cells.push(CellId::new(self.row, self.col));
                }
                if self.col > 0 {
                    cells.push(CellId::new(self.row, self.col - 1));
                }
            }
        }

        cells
    }

    /// Total number of edges on a grid of the given dimension.
    #[must_use]
    pub const fn count(dimension: usize) -> usize {
        2 * dimension * (dimension + 1)
    }

    /// Every edge of the grid: horizontals row-major, then verticals row-major.
    pub fn all(dimension: usize) -> impl Iterator<Item = Edge> {
        let horizontals = (0..=dimension)
            .flat_map(move |row| (0..dimension).map(move |col| Edge::horizontal(row, col)));
        let verticals = (0..dimension)
            .flat_map(move |row| (0..=dimension).map(move |col| Edge::vertical(row, col)));
        horizontals.chain(verticals)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.orientation {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        };
        write!(f, "{}({}, {})", tag, self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Edge::horizontal(3, 2).is_within(3));
        assert!(!Edge::horizontal(3, 3).is_within(3));
        assert!(!Edge::horizontal(4, 0).is_within(3));

        assert!(Edge::vertical(2, 3).is_within(3));
        assert!(!Edge::vertical(3, 0).is_within(3));
        assert!(!Edge::vertical(0, 4).is_within(3));
    }

    #[test]
    fn test_border_edges_touch_one_cell() {
        assert_eq!(Edge::horizontal(0, 1).adjacent_cells(2).as_slice(), &[CellId::new(0, 1)]);
        assert_eq!(Edge::horizontal(2, 1).adjacent_cells(2).as_slice(), &[CellId::new(1, 1)]);
        assert_eq!(Edge::vertical(1, 0).adjacent_cells(2).as_slice(), &[CellId::new(1, 0)]);
        assert_eq!(Edge::vertical(1, 2).adjacent_cells(2).as_slice(), &[CellId::new(1, 1)]);
    }

    #[test]
    fn test_interior_edges_touch_two_cells() {
        assert_eq!(
            Edge::vertical(0, 1).adjacent_cells(2).as_slice(),
            &[CellId::new(0, 1), CellId::new(0, 0)]
        );
    }

    #[test]
    fn test_out_of_bounds_has_no_cells() {
        assert!(Edge::vertical(5, 5).adjacent_cells(2).is_empty());
    }

    #[test]
    fn test_all_enumerates_every_edge_once() {
        for dimension in 1..=5 {
            let edges: Vec<_> = Edge::all(dimension).collect();
            assert_eq!(edges.len(), Edge::count(dimension));
            assert!(edges.iter().all(|e| e.is_within(dimension)));

            let mut sorted = edges.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), edges.len());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Edge::horizontal(1, 2)), "H(1, 2)");
        assert_eq!(format!("{}", Edge::vertical(0, 3)), "V(0, 3)");
    }
}
