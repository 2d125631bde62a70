// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The letter grid searched for words.
//!
//! A [`Grid`] is an immutable, rectangular matrix of symbols addressed by
//! [`Position`] (row, column), both 0-indexed. Construction validates the
//! shape once so the searcher can index cells without further checks.

pub mod direction;

pub use direction::Direction;

use crate::error::BoggleError;
use std::fmt;
use std::str::FromStr;

/// A cell address in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rectangular grid of single-character cells.
///
/// Cells are stored row-major in one flat vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from rows of symbols.
    ///
    /// Fails if there are no rows, if the first row is empty, or if any row
    /// differs in length from the first.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, BoggleError> {
        let cols = match rows.first() {
            None => return Err(BoggleError::EmptyGrid),
            Some(first) if first.is_empty() => return Err(BoggleError::EmptyRow { row: 0 }),
            Some(first) => first.len(),
        };

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, symbols) in rows.iter().enumerate() {
            if symbols.is_empty() {
                return Err(BoggleError::EmptyRow { row });
            }
            if symbols.len() != cols {
                return Err(BoggleError::RaggedRow {
                    row,
                    expected: cols,
                    found: symbols.len(),
                });
            }
            cells.extend_from_slice(symbols);
        }

        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Build a grid from string rows, one `char` per cell.
    ///
    /// ```
    /// use boggle_search::Grid;
    ///
    /// let grid = Grid::from_rows(&["EARA", "NLEC"]).unwrap();
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.cols(), 4);
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoggleError> {
        Self::new(rows.iter().map(|r| r.as_ref().chars().collect()).collect())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (rows × cols).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed grid.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Symbol at `pos`, or `None` when `pos` lies outside the grid.
    pub fn get(&self, pos: Position) -> Option<char> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Row-major flat index of `pos`, or `None` when out of bounds.
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        if pos.row < self.rows && pos.col < self.cols {
            Some(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    /// The cell one step from `pos` in `dir`, if it is inside the grid.
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        (row < self.rows && col < self.cols).then_some(Position { row, col })
    }

    /// All in-bounds neighbors of `pos`, in [`Direction::ALL`] order.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(pos, dir))
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position { row, col }))
    }

    /// Whether `symbol` appears anywhere in the grid.
    pub fn contains(&self, symbol: char) -> bool {
        self.cells.contains(&symbol)
    }
}

impl FromStr for Grid {
    type Err = BoggleError;

    /// Parse rows separated by newlines, commas, or other whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|row| !row.is_empty())
            .collect();
        Self::from_rows(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, symbol) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(&["EARA", "NLEC", "IAIS", "BYOR"]).unwrap()
    }

    #[test]
    fn test_dimensions_and_lookup() {
        let grid = sample();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.len(), 16);
        assert_eq!(grid.get(Position::new(1, 3)), Some('C'));
        assert_eq!(grid.get(Position::new(3, 0)), Some('B'));
        assert_eq!(grid.get(Position::new(4, 0)), None);
        assert_eq!(grid.get(Position::new(0, 4)), None);
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert_eq!(Grid::new(vec![]), Err(BoggleError::EmptyGrid));
        assert_eq!(Grid::from_rows::<&str>(&[]), Err(BoggleError::EmptyGrid));
    }

    #[test]
    fn test_empty_row_rejected() {
        assert_eq!(
            Grid::from_rows(&[""]),
            Err(BoggleError::EmptyRow { row: 0 })
        );
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert_eq!(
            Grid::from_rows(&["ABC", "DE"]),
            Err(BoggleError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::from_rows(&["AB", "CD", ""]),
            Err(BoggleError::EmptyRow { row: 2 })
        );
    }

    #[test]
    fn test_corner_has_three_neighbors() {
        let grid = sample();
        let neighbors: Vec<_> = grid.neighbors(Position::new(0, 0)).collect();
        assert_eq!(
            neighbors,
            vec![Position::new(0, 1), Position::new(1, 1), Position::new(1, 0)]
        );
    }

    #[test]
    fn test_interior_has_eight_neighbors() {
        let grid = sample();
        assert_eq!(grid.neighbors(Position::new(1, 1)).count(), 8);
        assert_eq!(grid.neighbors(Position::new(0, 2)).count(), 5);
    }

    #[test]
    fn test_single_cell_has_no_neighbors() {
        let grid = Grid::from_rows(&["Q"]).unwrap();
        assert_eq!(grid.neighbors(Position::new(0, 0)).count(), 0);
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::from_rows(&["AB", "CD", "EF"]).unwrap();
        let symbols: String = grid.positions().filter_map(|p| grid.get(p)).collect();
        assert_eq!(symbols, "ABCDEF");
    }

    #[test]
    fn test_parse_separators() {
        let grid: Grid = "EARA,NLEC\nIAIS BYOR\n".parse().unwrap();
        assert_eq!(grid, sample());
        assert_eq!("".parse::<Grid>(), Err(BoggleError::EmptyGrid));
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        assert_eq!(grid.to_string(), "A B\nC D");
    }

    #[test]
    fn test_contains() {
        let grid = sample();
        assert!(grid.contains('Y'));
        assert!(!grid.contains('Z'));
        assert!(!grid.contains('e'));
    }
}
