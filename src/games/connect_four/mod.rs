//! Connect Four.
//!
//! Two players drop pieces into the columns of an upright grid (6 rows by 7
//! columns by default); a piece falls to the lowest empty cell. Four in a row
//! horizontally, vertically or diagonally wins; a full board with no line is
//! a draw.
//!
//! - `game`: the engine (`ConnectFour`), with make/undo and evaluation
//! - `lines`: window geometry and win detection
//! - `valuation`: the partial-line heuristic
//! - `render`: text display

mod game;
pub mod lines;
mod render;
pub mod valuation;

pub use game::{Columns, ConnectFour};
