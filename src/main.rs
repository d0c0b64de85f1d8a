// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Time permutation table construction and reuse for a number of jets.
//!
//! ```bash
//! jet-permutation 6
//! jet-permutation 4 --show
//! RUST_LOG=jet_permutation=debug jet-permutation 8 --repeat 3
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use jet_permutation::state::Counters;
use jet_permutation::{EngineConfig, PermutationEngine, TableCache};
use std::fmt;
use std::time::Instant;
use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "jet-permutation", about = "Enumerate leptonic/hadronic jet splits")]
struct Cli {
    /// Number of jets to permute
    jets: usize,

    /// Number of extra walks that reuse the cached table
    #[arg(long, default_value_t = 1)]
    repeat: usize,

    /// Reject sessions with more jets than this
    #[arg(long)]
    max_items: Option<usize>,

    /// Print every leptonic/hadronic pair of the first walk
    #[arg(long)]
    show: bool,
}

/// Stand-in for a reconstructed jet: only its label matters here.
#[derive(Debug)]
struct Jet {
    id: usize,
}

impl fmt::Display for Jet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

fn format_jets(jets: &[&Jet]) -> String {
    jets.iter()
        .map(|jet| jet.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Walk every split of `jets` once, returning the number reported.
fn walk(engine: &mut PermutationEngine, jets: &[Jet], show: bool) -> Result<u64> {
    let mut total = 0;
    for split in engine.splits(jets)? {
        let split = split?;
        if show {
            println!("Leptonic: {}", format_jets(&split.leptonic));
            println!("Hadronic: {}", format_jets(&split.hadronic));
            println!();
        }
        total += 1;
    }
    Ok(total)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(subscriber_fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let mut config = EngineConfig::new();
    if let Some(max_items) = cli.max_items {
        config = config.with_max_items(max_items);
    }
    let mut engine = PermutationEngine::with_config(config, TableCache::new());

    let jets: Vec<Jet> = (1..=cli.jets).map(|id| Jet { id }).collect();
    println!("{}", format_jets(&jets.iter().collect::<Vec<_>>()));

    let start = Instant::now();
    let total = walk(&mut engine, &jets, cli.show)
        .with_context(|| format!("permuting {} jets", cli.jets))?;
    println!("{} total permutations were generated", total);
    println!("it took {:.6} seconds", start.elapsed().as_secs_f64());

    for _ in 0..cli.repeat {
        println!();
        println!("reuse tables");
        let start = Instant::now();
        let total = walk(&mut engine, &jets, false)?;
        println!("{} total permutations were generated", total);
        println!("it took {:.6} seconds", start.elapsed().as_secs_f64());
    }

    let stats = engine.statistics();
    tracing::info!(
        tables_built = stats.get(Counters::TablesBuilt),
        tables_reused = stats.get(Counters::TablesReused),
        duplicates = stats.get(Counters::DuplicateSplits),
        "finished"
    );
    Ok(())
}
