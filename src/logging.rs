// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Logging setup for the command-line tool.
//!
//! Writes to stderr so that stdout carries only results. `RUST_LOG` takes
//! precedence over the level chosen on the command line.

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `verbose` raises the default level from `warn` to `debug`. Calling this
/// more than once is harmless; later calls leave the first subscriber in place.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
