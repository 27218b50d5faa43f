//! Fixed-size Connect Four grid.
//!
//! Cells live in a single row-major buffer indexed by `row * columns + col`.
//! Row 0 is the top of the board; pieces fall towards `rows - 1`.
//!
//! Bounds are the caller's responsibility: every reader in this crate walks
//! ranges computed from the board's own dimensions, so indexing out of range
//! panics like a slice would.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::coord::Coord;
use super::player::PlayerId;
use crate::error::EngineError;

/// Standard board height.
pub const DEFAULT_ROWS: usize = 6;
/// Standard board width.
pub const DEFAULT_COLUMNS: usize = 7;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a blank board.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.columns
            && (coord.y as usize) < self.rows
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.columns);
        row * self.columns + col
    }

    #[inline]
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    #[inline]
    #[must_use]
    pub fn get(&self, coord: Coord) -> Cell {
        self.at(coord.row(), coord.col())
    }

    /// Claim a cell for `player`.
    pub fn place(&mut self, coord: Coord, player: PlayerId) -> Result<(), EngineError> {
        let (row, col) = (coord.row(), coord.col());
        let idx = self.index(row, col);
        if self.cells[idx].place(player) {
            Ok(())
        } else {
            Err(EngineError::CellOccupied { row, col })
        }
    }

    /// Empty a cell. Only the undo path calls this.
    pub fn clear(&mut self, coord: Coord) {
        let idx = self.index(coord.row(), coord.col());
        self.cells[idx].clear();
    }

    /// Blank every cell, keeping dimensions.
    pub fn clear_all(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// A column is full once its top cell is taken.
    #[must_use]
    pub fn is_column_full(&self, col: usize) -> bool {
        !self.at(0, col).is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|col| self.is_column_full(col))
    }

    /// Row a piece dropped into `col` would land in.
    #[must_use]
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        (0..self.rows).rev().find(|&row| self.at(row, col).is_empty())
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// True if every cell below `coord` down to the floor is occupied.
    #[must_use]
    pub fn is_supported(&self, coord: Coord) -> bool {
        (coord.row() + 1..self.rows).all(|row| !self.at(row, coord.col()).is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}
