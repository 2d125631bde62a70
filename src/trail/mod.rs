// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Visited-cell tracking with trail-based backtracking.
//!
//! The trail records every cell marked on the current candidate path, in the
//! order it was entered. Backtracking pops entries off the trail and clears
//! their visited bit, so the visited matrix always equals exactly the set of
//! cells on the trail.
//!
//! The visited set is path-scoped, not search-scoped: a cell abandoned on one
//! path must become available again for the next one.
//!
//! # Memory Model
//!
//! Each search owns its own `Trail`. It is never shared between searches.

use crate::grid::{Grid, Position};

/// Visited matrix plus the ordered trail of marked cells.
#[derive(Debug, Clone)]
pub struct Trail {
    /// Row-major visited flags, one per grid cell.
    visited: Vec<bool>,
    /// Marked cells in the order they were entered.
    entries: Vec<Position>,
    rows: usize,
    cols: usize,
}

impl Trail {
    /// Create an all-clear trail sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self::with_dimensions(grid.rows(), grid.cols())
    }

    /// Create an all-clear trail for a `rows` × `cols` grid.
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self {
            visited: vec![false; rows * cols],
            entries: Vec::with_capacity(rows * cols),
            rows,
            cols,
        }
    }

    fn slot(&self, pos: Position) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }

    /// Whether `pos` is on the current path. Out-of-bounds cells never are.
    pub fn is_visited(&self, pos: Position) -> bool {
        self.slot(pos).is_some_and(|i| self.visited[i])
    }

    /// Mark `pos` visited and push it on the trail.
    ///
    /// Returns false, changing nothing, if `pos` is out of bounds or already
    /// on the path.
    pub fn mark(&mut self, pos: Position) -> bool {
        match self.slot(pos) {
            Some(i) if !self.visited[i] => {
                self.visited[i] = true;
                self.entries.push(pos);
                true
            }
            _ => false,
        }
    }

    /// Undo the most recent mark, returning the cell it released.
    pub fn unmark(&mut self) -> Option<Position> {
        let pos = self.entries.pop()?;
        if let Some(i) = self.slot(pos) {
            self.visited[i] = false;
        }
        Some(pos)
    }

    /// Current trail length, usable as a checkpoint for [`Trail::rewind_to`].
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Unmark cells until the trail is back to `checkpoint` entries.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        while self.entries.len() > checkpoint {
            self.unmark();
        }
    }

    /// Clear the whole path.
    pub fn clear(&mut self) {
        self.rewind_to(0);
    }

    /// Cells on the current path, first entered first.
    pub fn path(&self) -> &[Position] {
        &self.entries
    }

    /// Number of cells on the current path.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
