//! A single board slot.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Board slot: empty or owned by exactly one player.
///
/// Cells are write-once: `place` refuses an occupied cell, and only `clear`
/// (the undo path) empties it again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Owned(PlayerId),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub const fn occupant(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }

    /// True if `player` owns this cell.
    #[must_use]
    pub fn is_owned_by(self, player: PlayerId) -> bool {
        self == Cell::Owned(player)
    }

    /// Claim the cell for `player`.
    ///
    /// Returns `false` and leaves the cell untouched if it is already occupied.
    #[must_use]
    pub fn place(&mut self, player: PlayerId) -> bool {
        if self.is_empty() {
            *self = Cell::Owned(player);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        *self = Cell::Empty;
    }
}
