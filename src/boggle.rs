// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! One-word Boggle check.
//!
//! [`Boggle`] pairs a grid with the prefix index of a single word. The free
//! function [`check`] is the one-shot form.

use crate::config::SearchConfig;
use crate::engine::{GridSearcher, SearchOutcome};
use crate::grid::Grid;
use crate::index::PrefixIndex;

/// A grid together with the word to look for.
#[derive(Debug, Clone)]
pub struct Boggle<'a> {
    grid: &'a Grid,
    word: String,
    index: PrefixIndex,
    searcher: GridSearcher,
}

impl<'a> Boggle<'a> {
    pub fn new(grid: &'a Grid, word: &str) -> Self {
        Self::with_config(grid, word, SearchConfig::default())
    }

    pub fn with_config(grid: &'a Grid, word: &str, config: SearchConfig) -> Self {
        Self {
            grid,
            word: word.to_string(),
            index: PrefixIndex::from_word(word),
            searcher: GridSearcher::with_config(config),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// True iff the word traces a simple adjacency path on the grid.
    pub fn check(&self) -> bool {
        self.searcher.find(self.grid, &self.index)
    }

    /// Like [`Boggle::check`], also returning the path and statistics.
    pub fn search(&self) -> SearchOutcome {
        self.searcher.search(self.grid, &self.index)
    }
}

/// True iff `word` traces a simple adjacency path on `grid`.
///
/// ```
/// use boggle_search::{check, Grid};
///
/// let grid = Grid::from_rows(&["EARA", "NLEC", "IAIS", "BYOR"]).unwrap();
/// assert!(check(&grid, "EAR"));
/// assert!(!check(&grid, "EARS"));
/// ```
pub fn check(grid: &Grid, word: &str) -> bool {
    Boggle::new(grid, word).check()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchStrategy;

    #[test]
    fn test_check_matches_search() {
        let grid = Grid::from_rows(&["EARA", "NLEC", "IAIS", "BYOR"]).unwrap();
        let boggle = Boggle::new(&grid, "BAILER");
        assert_eq!(boggle.word(), "BAILER");
        assert!(boggle.check());
        let outcome = boggle.search();
        assert!(outcome.found);
        assert_eq!(outcome.path.len(), 6);
    }

    #[test]
    fn test_repeated_checks_agree() {
        let grid = Grid::from_rows(&["EARA", "NLEC", "IAIS", "BYOR"]).unwrap();
        let boggle = Boggle::with_config(
            &grid,
            "ROBES",
            SearchConfig::new().with_strategy(SearchStrategy::Recursive),
        );
        assert!(!boggle.check());
        assert!(!boggle.check());
    }

    #[test]
    fn test_case_sensitive() {
        let grid = Grid::from_rows(&["EAR"]).unwrap();
        assert!(check(&grid, "EAR"));
        assert!(!check(&grid, "ear"));
    }
}
