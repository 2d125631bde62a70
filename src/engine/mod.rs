// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking grid search engine.
//!
//! The engine decides whether the word stored in a [`PrefixIndex`] can be
//! traced through the grid as a simple path of adjacent cells (all eight
//! directions, no cell used twice on one path).
//!
//! # Algorithm
//!
//! From every cell in row-major order, run a depth-first search that walks
//! the index in lock-step with the grid:
//! 1. Reject the cell if it is already on the current path
//! 2. Step the index by the cell's symbol; prune if there is no such edge
//! 3. Mark the cell on the trail
//! 4. If the index node is terminal, the word is found
//! 5. Otherwise try each neighbor in [`Direction::ALL`] order
//! 6. If every neighbor fails, unmark the cell and report failure
//!
//! Step 6 is what makes the visited set path-scoped. Without it a cell
//! abandoned on one branch would stay blocked for every later branch.
//!
//! # Architecture
//!
//! Two strategies share the cell-entry logic and therefore produce identical
//! answers, paths and statistics:
//! - [`SearchStrategy::Recursive`] uses the call stack
//! - [`SearchStrategy::ExplicitStack`] keeps a stack of frames, each holding
//!   its index node, cell, and the next direction to try
//!
//! # Example
//!
//! ```
//! use boggle_search::{Grid, GridSearcher, PrefixIndex};
//!
//! let grid = Grid::from_rows(&["EARA", "NLEC", "IAIS", "BYOR"]).unwrap();
//! let searcher = GridSearcher::new();
//! assert!(searcher.find(&grid, &PrefixIndex::from_word("BAILER")));
//! assert!(!searcher.find(&grid, &PrefixIndex::from_word("CEREAL")));
//! ```

pub mod statistics;

pub use statistics::{Counters, SearchStatistics};

use crate::config::{SearchConfig, SearchStrategy};
use crate::grid::{Direction, Grid, Position};
use crate::index::{NodeId, PrefixIndex};
use crate::trail::Trail;
use tracing::{debug, trace};

/// Result of a search, with the matched path when one was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Whether the word was found.
    pub found: bool,
    /// Cells spelling the word, in word order. Empty when not found.
    pub path: Vec<Position>,
    pub statistics: SearchStatistics,
}

/// Searches a grid for the word held by a [`PrefixIndex`].
///
/// The searcher holds only configuration. Every call allocates its own
/// visited trail, so one searcher (and one grid and index) may be used from
/// several threads at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridSearcher {
    config: SearchConfig,
}

impl GridSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// True iff the indexed word traces a simple adjacency path on `grid`.
    pub fn find(&self, grid: &Grid, index: &PrefixIndex) -> bool {
        self.search(grid, index).found
    }

    /// Run the search and report the path and statistics as well.
    pub fn search(&self, grid: &Grid, index: &PrefixIndex) -> SearchOutcome {
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            word_len = index.depth(),
            strategy = ?self.config.strategy,
            "starting grid search"
        );

        let mut search = Search::new(grid, index);
        let found = grid.positions().any(|start| {
            search.statistics.increment(Counters::Starts);
            match self.config.strategy {
                SearchStrategy::Recursive => search.dfs(index.root(), start),
                SearchStrategy::ExplicitStack => search.run_from(start),
            }
        });

        debug_assert!(found || search.trail.is_empty());
        let outcome = SearchOutcome {
            found,
            path: if found {
                search.trail.path().to_vec()
            } else {
                Vec::new()
            },
            statistics: search.statistics,
        };
        debug!(found, stats = %outcome.statistics, "grid search finished");
        outcome
    }
}

/// What happened when the search tried to step onto a cell.
enum Entry {
    /// Cell already on the path, or its symbol has no edge in the index.
    Rejected,
    /// Cell marked; the index node reached is not terminal.
    Entered(NodeId),
    /// Cell marked and the word is complete.
    Complete,
}

/// One pending cell on the explicit stack.
#[derive(Debug)]
struct Frame {
    /// Index node reached by entering `position`.
    node: NodeId,
    position: Position,
    /// Offset into [`Direction::ALL`] of the next neighbor to try.
    next_direction: usize,
}

/// Working state of a single search.
struct Search<'a> {
    grid: &'a Grid,
    index: &'a PrefixIndex,
    trail: Trail,
    statistics: SearchStatistics,
}

impl<'a> Search<'a> {
    fn new(grid: &'a Grid, index: &'a PrefixIndex) -> Self {
        Self {
            grid,
            index,
            trail: Trail::new(grid),
            statistics: SearchStatistics::new(),
        }
    }

    fn enter(&mut self, node: NodeId, position: Position) -> Entry {
        if self.trail.is_visited(position) {
            return Entry::Rejected;
        }
        let Some(symbol) = self.grid.get(position) else {
            return Entry::Rejected;
        };
        let Some(child) = self.index.step(node, symbol) else {
            self.statistics.increment(Counters::Prunes);
            return Entry::Rejected;
        };

        self.trail.mark(position);
        self.statistics.increment(Counters::CellsEntered);
        if self.index.is_terminal(child) {
            Entry::Complete
        } else {
            Entry::Entered(child)
        }
    }

    fn backtrack(&mut self) {
        if let Some(position) = self.trail.unmark() {
            trace!(%position, depth = self.trail.len(), "backtrack");
        }
        self.statistics.increment(Counters::Backtracks);
    }

    fn dfs(&mut self, node: NodeId, position: Position) -> bool {
        let child = match self.enter(node, position) {
            Entry::Rejected => return false,
            Entry::Complete => return true,
            Entry::Entered(child) => child,
        };

        let grid = self.grid;
        for next in grid.neighbors(position) {
            if self.dfs(child, next) {
                return true;
            }
        }

        self.backtrack();
        false
    }

    fn run_from(&mut self, start: Position) -> bool {
        let mut stack = match self.enter(self.index.root(), start) {
            Entry::Rejected => return false,
            Entry::Complete => return true,
            Entry::Entered(node) => vec![Frame {
                node,
                position: start,
                next_direction: 0,
            }],
        };

        while let Some(frame) = stack.last_mut() {
            if frame.next_direction >= Direction::ALL.len() {
                stack.pop();
                self.backtrack();
                continue;
            }

            let direction = Direction::ALL[frame.next_direction];
            frame.next_direction += 1;
            let node = frame.node;
            let Some(next) = self.grid.neighbor(frame.position, direction) else {
                continue;
            };

            match self.enter(node, next) {
                Entry::Rejected => {}
                Entry::Complete => return true,
                Entry::Entered(child) => stack.push(Frame {
                    node: child,
                    position: next,
                    next_direction: 0,
                }),
            }
        }

        false
    }
}
