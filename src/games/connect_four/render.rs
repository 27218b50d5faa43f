//! Text rendering of the board.
//!
//! ```text
//! |1|2|3|4|5|6|7|
//! ---------------
//! | | | | | | | |
//! ---------------
//! ...
//! | |O|X| | | | |
//! ---------------
//! ```
//!
//! `O` is the first player, `X` the second.

use std::fmt;

use crate::core::Cell;

use super::game::ConnectFour;

impl ConnectFour {
    fn cell_symbol(&self, cell: Cell) -> char {
        match cell.occupant() {
            None => ' ',
            Some(player) if player == self.first_player() => 'O',
            Some(_) => 'X',
        }
    }
}

impl fmt::Display for ConnectFour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.columns();
        let separator = "-".repeat(2 * columns + 1);

        write!(f, "|")?;
        for col in 0..columns {
            write!(f, "{}|", col + 1)?;
        }
        writeln!(f)?;
        writeln!(f, "{separator}")?;

        for row in 0..self.rows() {
            write!(f, "|")?;
            for col in 0..columns {
                write!(f, "{}|", self.cell_symbol(self.board().at(row, col)))?;
            }
            writeln!(f)?;
            writeln!(f, "{separator}")?;
        }
        Ok(())
    }
}
