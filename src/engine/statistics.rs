// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search statistics
//!
//! Counters are incremented by the searcher as it walks the grid. They do
//! not influence the answer; they make pruning and backtracking observable
//! in logs and tests.

use std::fmt;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Starting cells tried from the root of the index.
    Starts,
    /// Cells marked visited after a successful index step.
    CellsEntered,
    /// Cells rejected because the index had no edge for their symbol.
    Prunes,
    /// Cells unmarked after all their neighbors failed.
    Backtracks,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStatistics {
    stats: [u64; Counters::COUNT],
}

impl SearchStatistics {
    pub fn new() -> Self {
        SearchStatistics::default()
    }

    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "starts={} entered={} pruned={} backtracks={}",
            self.get(Counters::Starts),
            self.get(Counters::CellsEntered),
            self.get(Counters::Prunes),
            self.get(Counters::Backtracks)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_independent() {
        let mut stats = SearchStatistics::new();
        stats.increment(Counters::Prunes);
        stats.increment(Counters::Prunes);
        stats.increment(Counters::Backtracks);
        assert_eq!(stats.get(Counters::Prunes), 2);
        assert_eq!(stats.get(Counters::Backtracks), 1);
        assert_eq!(stats.get(Counters::Starts), 0);
        assert_eq!(stats.to_string(), "starts=0 entered=0 pruned=2 backtracks=1");
    }
}
