// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for grid construction.
//!
//! The search itself is total over any rectangular grid, so the only
//! failures are malformed grids supplied by the caller.

use thiserror::Error;

/// Errors that can occur while building a [`Grid`](crate::grid::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoggleError {
    /// The grid has no rows at all.
    #[error("grid has no rows")]
    EmptyGrid,

    /// A row has no cells.
    #[error("row {row} has no cells")]
    EmptyRow { row: usize },

    /// A row does not match the width of the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(BoggleError::EmptyGrid.to_string(), "grid has no rows");
        assert_eq!(
            BoggleError::EmptyRow { row: 2 }.to_string(),
            "row 2 has no cells"
        );
        assert_eq!(
            BoggleError::RaggedRow {
                row: 1,
                expected: 4,
                found: 3
            }
            .to_string(),
            "row 1 has 3 cells, expected 4"
        );
    }
}
