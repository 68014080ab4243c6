//! CLI argument definitions for card-forge.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "card-forge")]
#[command(about = "Generate trading cards and simulate booster pack rarity odds", long_about = None)]
pub struct Cli {
    /// TOML config file; flags below override its values
    #[arg(short, long, global = true, env = "CARD_FORGE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate packs and print the rarity table
    Simulate {
        /// Number of packs to open
        #[arg(short, long)]
        packs: Option<usize>,

        /// Session seed
        #[arg(short, long, env = "CARD_FORGE_SEED")]
        seed: Option<u64>,

        /// Health distribution (normal or logistic)
        #[arg(short, long)]
        distribution: Option<String>,

        /// Distribution mean
        #[arg(long)]
        mean: Option<f64>,

        /// Distribution standard deviation
        #[arg(long)]
        std_dev: Option<f64>,

        /// Health samples drawn per pack
        #[arg(long)]
        samples: Option<usize>,

        /// Print every pack's cards
        #[arg(short, long)]
        verbose: bool,

        /// Print a histogram of raw health samples
        #[arg(long)]
        plot: bool,

        /// Spread packs across all cores (ignored with --plot or --verbose)
        #[arg(long)]
        parallel: bool,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a single card and draw its face
    Card {
        /// Card health
        health: i64,

        /// Primary attack
        attack: i64,

        /// Sub-stream seed factor (1-3)
        #[arg(short = 'k', long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
        factor: u8,
    },

    /// Print the default configuration as TOML
    DefaultConfig,
}
