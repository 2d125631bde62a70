// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: check words against a Boggle grid.
//!
//! With no grid and no words, checks the built-in sample board.

use boggle_search::logging::init_logging;
use boggle_search::{Boggle, BoggleError, Grid, SearchConfig, SearchStrategy};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;
use thiserror::Error;

const SAMPLE_GRID: [&str; 4] = ["EARA", "NLEC", "IAIS", "BYOR"];
const SAMPLE_WORDS: [&str; 7] = [
    "C",
    "EAR",
    "EARS",
    "BAILER",
    "RSCAREIOYBAILNEA",
    "CEREAL",
    "ROBES",
];

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Recursive depth-first search
    Recursive,
    /// Depth-first search over an explicit frame stack
    ExplicitStack,
}

impl From<StrategyArg> for SearchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Recursive => SearchStrategy::Recursive,
            StrategyArg::ExplicitStack => SearchStrategy::ExplicitStack,
        }
    }
}

#[derive(Parser)]
#[command(name = "boggle")]
#[command(about = "Check whether words can be traced on a Boggle grid", long_about = None)]
struct Args {
    /// Grid rows separated by commas or whitespace, e.g. "EARA,NLEC,IAIS,BYOR"
    #[arg(long, conflicts_with = "grid_file")]
    grid: Option<String>,

    /// File holding the grid, one row per line
    #[arg(long)]
    grid_file: Option<PathBuf>,

    /// Search strategy
    #[arg(long, value_enum, default_value = "explicit-stack")]
    strategy: StrategyArg,

    /// Print the cells of each path found
    #[arg(long)]
    path: bool,

    /// Print search statistics for each word
    #[arg(long)]
    stats: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,

    /// Words to check (defaults to the sample words)
    words: Vec<String>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read grid file {path}: {source}")]
    GridFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid grid: {0}")]
    Grid(#[from] BoggleError),
}

fn load_grid(args: &Args) -> Result<Grid, CliError> {
    if let Some(path) = &args.grid_file {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::GridFile {
            path: path.clone(),
            source,
        })?;
        return Ok(text.parse()?);
    }
    match &args.grid {
        Some(text) => Ok(text.parse()?),
        None => Ok(Grid::from_rows(&SAMPLE_GRID)?),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let grid = match load_grid(&args) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    let words: Vec<String> = if args.words.is_empty() {
        SAMPLE_WORDS.iter().map(|w| w.to_string()).collect()
    } else {
        args.words.clone()
    };

    let config = SearchConfig::new().with_strategy(args.strategy.into());
    println!("{}", grid);
    println!();

    for word in &words {
        let outcome = Boggle::with_config(&grid, word, config).search();
        let verdict = if outcome.found { "found" } else { "not found" };
        println!("{}: {}", word, verdict);

        if args.path && outcome.found {
            let cells: Vec<String> = outcome.path.iter().map(|p| p.to_string()).collect();
            println!("  path: {}", cells.join(" -> "));
        }
        if args.stats {
            println!("  stats: {}", outcome.statistics);
        }
    }
}
