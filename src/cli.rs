//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// fanout - subscriber traversal benchmark
#[derive(Parser, Debug)]
#[command(name = "fanout")]
#[command(version)]
#[command(about = "Compare stream, iterator, and indexed-loop delivery to subscribers")]
#[command(
    long_about = "fanout checks that every traversal strategy delivers to the same subscribers before the criterion bench measures them. Run the bench itself with `cargo bench -p fanout-core`."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify all strategies agree for each subscriber count
    Verify {
        /// Bench config file (TOML); defaults to $FANOUT_BENCH_CONFIG or built-in values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override subscriber counts, e.g. --counts 0,1,10
        #[arg(long, value_delimiter = ',')]
        counts: Vec<usize>,

        /// Print reports as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the resolved bench config as TOML
    Config {
        /// Bench config file (TOML); defaults to $FANOUT_BENCH_CONFIG or built-in values
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn test_parse_verify_with_counts() {
        let cli = Cli::try_parse_from(["fanout", "verify", "--counts", "0,1,10", "--json"]).unwrap();
        match cli.command {
            Commands::Verify {
                config,
                counts,
                json,
            } => {
                assert!(config.is_none());
                assert_eq!(counts, vec![0, 1, 10]);
                assert!(json);
            }
            Commands::Config { .. } => panic!("expected verify"),
        }
    }

    #[test]
    fn test_parse_config_path() {
        let cli = Cli::try_parse_from(["fanout", "config", "-c", "bench.toml"]).unwrap();
        match cli.command {
            Commands::Config { config } => {
                assert_eq!(config, Some(PathBuf::from("bench.toml")));
            }
            Commands::Verify { .. } => panic!("expected config"),
        }
    }

    #[test]
    fn test_rejects_negative_counts() {
        assert!(Cli::try_parse_from(["fanout", "verify", "--counts", "-1"]).is_err());
    }
}
