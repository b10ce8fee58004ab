//! Board storage: which edges are drawn and who owns each cell.

mod display;
pub mod grid;

pub use grid::Board;
