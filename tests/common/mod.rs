// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test fixtures shared across integration tests.

#![allow(dead_code)]

use boggle_search::{Grid, SearchConfig, SearchStrategy};

/// The sample 4×4 board.
pub const SAMPLE_ROWS: [&str; 4] = ["EARA", "NLEC", "IAIS", "BYOR"];

/// Words checked against [`SAMPLE_ROWS`] with their expected answers.
pub const SAMPLE_CASES: [(&str, bool); 7] = [
    ("C", true),
    ("EAR", true),
    ("EARS", false),
    ("BAILER", true),
    ("RSCAREIOYBAILNEA", true),
    ("CEREAL", false),
    ("ROBES", false),
];

pub const STRATEGIES: [SearchStrategy; 2] =
    [SearchStrategy::Recursive, SearchStrategy::ExplicitStack];

pub fn sample_grid() -> Grid {
    Grid::from_rows(&SAMPLE_ROWS).unwrap()
}

pub fn config(strategy: SearchStrategy) -> SearchConfig {
    SearchConfig::new().with_strategy(strategy)
}
