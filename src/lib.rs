// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Boggle word search.
//!
//! Decides whether a single word can be traced through a letter grid as a
//! path of adjacent cells (including diagonals), using each cell at most
//! once per path.
//!
//! # Architecture
//!
//! ## Prefix index (immutable)
//!
//! The word is stored in a trie ([`PrefixIndex`]) built once before the
//! search. During the search the index is only read, one symbol step at a
//! time, so any path whose symbols leave the trie is abandoned immediately.
//!
//! ## Trail (mutable)
//!
//! Each search owns a [`Trail`]: the visited-cell matrix plus the ordered list
//! of cells on the current path. Backtracking pops the trail, releasing cells
//! for other candidate paths.
//!
//! # Search Algorithm
//!
//! [`GridSearcher`] tries every cell as a start in row-major order and runs a
//! depth-first search over the eight neighbors of each cell, stepping the
//! index in lock-step. The first complete word ends the search.
//!
//! # Example
//!
//! ```
//! use boggle_search::{check, Grid};
//!
//! let grid = Grid::from_rows(&["EARA", "NLEC", "IAIS", "BYOR"]).unwrap();
//! assert!(check(&grid, "RSCAREIOYBAILNEA"));
//! assert!(!check(&grid, "CEREAL"));
//! ```

pub mod boggle;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod index;
pub mod logging;
pub mod trail;

// Re-export commonly used types
pub use boggle::{check, Boggle};
pub use config::{SearchConfig, SearchStrategy};
pub use engine::{GridSearcher, SearchOutcome, SearchStatistics};
pub use error::BoggleError;
pub use grid::{Direction, Grid, Position};
pub use index::{NodeId, PrefixIndex};
pub use trail::Trail;
