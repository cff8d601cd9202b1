//! # fanout
//!
//! Command-line front end for the subscriber traversal benchmark.
//!
//! The benchmark itself runs under criterion (`cargo bench -p fanout-core`).
//! This binary verifies that the three traversal strategies are behaviourally
//! identical for the configured subscriber counts and prints the resolved
//! bench configuration.
//!
//! ## Logging
//!
//! Log output goes to stderr and is filtered by `RUST_LOG` (default `info`).

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    commands::execute_command(cli.command)
}

/// Initialize tracing subscriber with environment filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
