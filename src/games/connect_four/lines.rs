//! Length-four windows ("lines") and win detection.
//!
//! There are four window families, one per direction. Each family is a
//! rectangle of start cells plus a step; the window is the start cell and the
//! three cells after it along the step. Start rectangles are sized so no
//! window wraps or leaves the board.
//!
//! Family order and row-major order inside a family decide which player
//! `find_winner` reports, so both are fixed:
//!
//! | family      | start   | step      | start rows     | start columns |
//! |-------------|---------|-----------|----------------|---------------|
//! | horizontal  | (0, 0)  | (1, 0)    | `0..rows`      | `0..cols-3`   |
//! | vertical    | (0, 0)  | (0, 1)    | `0..rows-3`    | `0..cols`     |
//! | falling ↘   | (0, 0)  | (1, 1)    | `0..rows-3`    | `0..cols-3`   |
//! | rising ↗    | (0, 4)  | (1, -1)   | `4..rows`      | `0..cols-3`   |

use crate::core::{Board, Coord, PlayerId};

/// Number of cells in a line.
pub const LINE_LENGTH: i32 = 4;

/// First start row of the rising family on boards taller than four rows.
pub const RISING_START_ROW: usize = 4;

/// One direction's worth of windows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineFamily {
    /// Top-left start cell.
    pub start: Coord,
    /// Exclusive bound on start cells (`x` columns, `y` rows).
    pub end: Coord,
    pub step: Coord,
}

impl LineFamily {
    /// Start cells, row-major.
    pub fn starts(self) -> impl Iterator<Item = Coord> {
        (self.start.y..self.end.y)
            .flat_map(move |y| (self.start.x..self.end.x).map(move |x| Coord::new(x, y)))
    }

    /// The four cells of the window starting at `start`.
    #[must_use]
    pub fn line(self, start: Coord) -> [Coord; 4] {
        [0, 1, 2, 3].map(|i| start + i * self.step)
    }

    /// Every window of this family.
    pub fn windows(self) -> impl Iterator<Item = [Coord; 4]> {
        self.starts().map(move |start| self.line(start))
    }
}

/// The four families in win-priority order.
#[must_use]
pub fn families(rows: usize, columns: usize) -> [LineFamily; 4] {
    // A rising line needs three rows above its start.
    let rising_row = RISING_START_ROW.min(rows.saturating_sub(1)) as i32;
    let rows = rows as i32;
    let cols = columns as i32;
    let span = LINE_LENGTH - 1;

    [
        LineFamily {
            start: Coord::ZERO,
            end: Coord::new(cols - span, rows),
            step: Coord::new(1, 0),
        },
        LineFamily {
            start: Coord::ZERO,
            end: Coord::new(cols, rows - span),
            step: Coord::new(0, 1),
        },
        LineFamily {
            start: Coord::ZERO,
            end: Coord::new(cols - span, rows - span),
            step: Coord::new(1, 1),
        },
        LineFamily {
            start: Coord::new(0, rising_row),
            end: Coord::new(cols - span, rows),
            step: Coord::new(1, -1),
        },
    ]
}

/// Every window on the board, family by family.
pub fn all_windows(board: &Board) -> impl Iterator<Item = [Coord; 4]> {
    families(board.rows(), board.columns())
        .into_iter()
        .flat_map(LineFamily::windows)
}

/// Owner of the window if all four cells belong to the same player.
#[must_use]
pub fn line_owner(board: &Board, line: &[Coord; 4]) -> Option<PlayerId> {
    let owner = board.get(line[0]).occupant()?;
    line[1..]
        .iter()
        .all(|&c| board.get(c).is_owned_by(owner))
        .then_some(owner)
}

/// First complete line found in one family.
#[must_use]
pub fn search_family(board: &Board, family: LineFamily) -> Option<PlayerId> {
    family
        .starts()
        .filter(|&start| !board.get(start).is_empty())
        .find_map(|start| line_owner(board, &family.line(start)))
}

/// Winner of the position, if any.
///
/// Families are searched in the order horizontal, vertical, falling, rising;
/// the first complete line found decides.
#[must_use]
pub fn find_winner(board: &Board) -> Option<PlayerId> {
    families(board.rows(), board.columns())
        .into_iter()
        .find_map(|family| search_family(board, family))
}
