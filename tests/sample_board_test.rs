// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end checks against the sample 4×4 board.

mod common;

use boggle_search::{check, Boggle, Grid, GridSearcher, Position, PrefixIndex};
use common::{config, sample_grid, SAMPLE_CASES, STRATEGIES};

#[test]
fn test_sample_words() {
    let grid = sample_grid();
    for (word, expected) in SAMPLE_CASES {
        assert_eq!(check(&grid, word), expected, "word {}", word);
    }
}

#[test]
fn test_sample_words_with_each_strategy() {
    let grid = sample_grid();
    for strategy in STRATEGIES {
        for (word, expected) in SAMPLE_CASES {
            let found = Boggle::with_config(&grid, word, config(strategy)).check();
            assert_eq!(found, expected, "word {} with {:?}", word, strategy);
        }
    }
}

#[test]
fn test_single_letter_located() {
    let grid = sample_grid();
    let outcome = Boggle::new(&grid, "C").search();
    assert!(outcome.found);
    assert_eq!(outcome.path, vec![Position::new(1, 3)]);
}

#[test]
fn test_found_paths_are_valid() {
    let grid = sample_grid();
    for strategy in STRATEGIES {
        for (word, expected) in SAMPLE_CASES {
            let outcome = Boggle::with_config(&grid, word, config(strategy)).search();
            if !expected {
                assert!(outcome.path.is_empty());
                continue;
            }

            let spelled: String = outcome.path.iter().filter_map(|&p| grid.get(p)).collect();
            assert_eq!(spelled, word);

            for pair in outcome.path.windows(2) {
                let adjacent = grid.neighbors(pair[0]).any(|n| n == pair[1]);
                assert!(adjacent, "{} and {} not adjacent in {}", pair[0], pair[1], word);
            }

            let mut cells = outcome.path.clone();
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), outcome.path.len(), "cell reused in {}", word);
        }
    }
}

#[test]
fn test_sixteen_letter_word_covers_board() {
    let grid = sample_grid();
    let outcome = Boggle::new(&grid, "RSCAREIOYBAILNEA").search();
    assert!(outcome.found);
    assert_eq!(outcome.path.len(), grid.len());
}

#[test]
fn test_repeated_searches_are_stable() {
    let grid = sample_grid();
    let snapshot = grid.clone();
    let searcher = GridSearcher::new();

    for (word, expected) in SAMPLE_CASES {
        let first = searcher.search(&grid, &PrefixIndex::from_word(word));
        let index = PrefixIndex::from_word(word);
        let second = searcher.search(&grid, &index);
        let third = searcher.search(&grid, &index);
        assert_eq!(first.found, expected);
        assert_eq!(first, second);
        assert_eq!(second, third);
    }
    assert_eq!(grid, snapshot);
}

#[test]
fn test_parsed_grid_matches() {
    let grid: Grid = "EARA NLEC IAIS BYOR".parse().unwrap();
    assert_eq!(grid, sample_grid());
    assert!(check(&grid, "BAILER"));
}
