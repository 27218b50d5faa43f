//! Move records and the undo stack.
//!
//! The history is the engine's reversible log: every applied move pushes a
//! record, every undo pops one. Its length always equals the number of
//! occupied cells, and its top record is how the engine recovers whose turn it
//! is after an undo.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::PlayerId;

/// A move that was applied: who moved and where the piece landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// Landing cell of the piece.
    pub coord: Coord,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: PlayerId, coord: Coord) -> Self {
        Self { player, coord }
    }

    /// Column the move was played in.
    #[must_use]
    pub fn column(&self) -> usize {
        self.coord.col()
    }
}

/// Last-in-first-out move log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sized for a board with `cells` slots.
    #[must_use]
    pub fn with_capacity(cells: usize) -> Self {
        Self {
            records: Vec::with_capacity(cells),
        }
    }

    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    pub(crate) fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }

    /// Most recent move.
    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }

    /// Columns played, oldest first.
    #[must_use]
    pub fn columns(&self) -> Vec<usize> {
        self.records.iter().map(MoveRecord::column).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut history = MoveHistory::new();
        let a = MoveRecord::new(PlayerId::new(0), Coord::at(5, 3));
        let b = MoveRecord::new(PlayerId::new(1), Coord::at(4, 3));

        history.push(a);
        history.push(b);
        assert_eq!(history.len(), 2);
        assert_eq!(history.last(), Some(&b));

        assert_eq!(history.pop(), Some(b));
        assert_eq!(history.pop(), Some(a));
        assert_eq!(history.pop(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn test_columns_oldest_first() {
        let mut history = MoveHistory::with_capacity(42);
        history.push(MoveRecord::new(PlayerId::new(0), Coord::at(5, 3)));
        history.push(MoveRecord::new(PlayerId::new(1), Coord::at(5, 0)));
        history.push(MoveRecord::new(PlayerId::new(0), Coord::at(4, 3)));

        assert_eq!(history.columns(), vec![3, 0, 3]);
    }

    #[test]
    fn test_record_serialization() {
        let record = MoveRecord::new(PlayerId::new(1), Coord::at(2, 6));
        let json = serde_json::to_string(&record).unwrap();
        let back: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, back);
        assert_eq!(back.column(), 6);
    }
}
