//! Plain-text dump of a board.
//!
//! ```text
//! +---+   +
//! | 1 |
//! +---+---+
//!         |
//! +   +---+
//! ```
//!
//! Dots are `+`, drawn edges `---` and `|`, owned cells show `1` or `2`.

use std::fmt;

use crate::core::{CellId, Edge, PlayerId};

use super::grid::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dimension();
        let drawn = |edge: Edge| self.is_claimed(edge).unwrap_or(false);

        for row in 0..=n {
            let mut line = String::from("+");
            for col in 0..n {
                line.push_str(if drawn(Edge::horizontal(row, col)) { "---" } else { "   " });
                line.push('+');
            }
            writeln!(f, "{}", line.trim_end())?;

            if row == n {
                break;
            }

            let mut line = String::new();
            for col in 0..=n {
                line.push(if drawn(Edge::vertical(row, col)) { '|' } else { ' ' });
                if col < n {
                    let mark = match self.owner(CellId::new(row, col)) {
                        Ok(Some(PlayerId::First)) => " 1 ",
                        Ok(Some(PlayerId::Second)) => " 2 ",
                        _ => "   ",
                    };
                    line.push_str(mark);
                }
            }
            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}
