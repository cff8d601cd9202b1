//! CLI command handlers.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use fanout_core::{BenchConfig, VerificationReport, verify};
use tracing::info;

use crate::cli::Commands;

/// Execute a CLI command.
pub fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::Verify {
            config,
            counts,
            json,
        } => cmd_verify(config.as_deref(), counts, json),

        Commands::Config { config } => cmd_config(config.as_deref()),
    }
}

/// Resolve the bench config from an explicit path or the environment.
fn load_config(path: Option<&Path>) -> Result<BenchConfig> {
    match path {
        Some(path) => BenchConfig::resolve(Some(path))
            .with_context(|| format!("Failed to load bench config from {}", path.display())),
        None => BenchConfig::from_env().context("Failed to load bench config from environment"),
    }
}

/// Run every strategy for each subscriber count and report the deliveries.
fn cmd_verify(config: Option<&Path>, counts: Vec<usize>, json: bool) -> Result<()> {
    let mut config = load_config(config)?;
    if !counts.is_empty() {
        config = config.with_subscriber_counts(counts)?;
    }

    info!(counts = ?config.subscriber_counts(), "Verifying traversal strategies");
    let reports = verify(config.subscriber_counts()).context("Traversal strategies disagree")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print!("{}", render_table(&reports));
    }

    Ok(())
}

/// Print the resolved config.
fn cmd_config(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let rendered = toml::to_string(&config).context("Failed to render bench config")?;
    print!("{rendered}");
    Ok(())
}

fn render_table(reports: &[VerificationReport]) -> String {
    let mut out = format!(
        "{:>12}  {:>10}  {:>10}  {:>16}\n",
        "subscribers", "stream", "iterator", "indexed_for_loop"
    );
    for report in reports {
        let cells: Vec<String> = report
            .deliveries
            .iter()
            .map(|d| d.deliveries.to_string())
            .collect();
        let cell = |i: usize| cells.get(i).map_or("-", String::as_str);
        let _ = writeln!(
            out,
            "{:>12}  {:>10}  {:>10}  {:>16}",
            report.subscriber_count,
            cell(0),
            cell(1),
            cell(2)
        );
    }
    out
}
