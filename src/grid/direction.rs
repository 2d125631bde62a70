// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The eight compass directions used for cell adjacency.

/// One of the eight neighbor directions of a grid cell.
///
/// Rows grow downwards, so `N` is row - 1 and `S` is row + 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    W,
    NW,
    N,
    NE,
    E,
    SE,
    S,
    SW,
}

impl Direction {
    /// Neighbor enumeration order used by the searcher.
    ///
    /// Starts west and walks clockwise. Any fixed permutation finds the same
    /// answer; the order only decides which successful path is reported.
    pub const ALL: [Direction; 8] = [
        Direction::W,
        Direction::NW,
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
    ];

    /// Row and column offsets for this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::W => (0, -1),
            Direction::NW => (-1, -1),
            Direction::N => (-1, 0),
            Direction::NE => (-1, 1),
            Direction::E => (0, 1),
            Direction::SE => (1, 1),
            Direction::S => (1, 0),
            Direction::SW => (1, -1),
        }
    }

    /// Whether this is one of the four diagonal directions.
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::NW | Direction::NE | Direction::SE | Direction::SW
        )
    }
}
