//! Clap derive definitions for the `azulejo` binary.
//!
//! The parser itself stays declarative; argument resolution against the
//! configuration layer happens in the command handlers.

use clap::{Parser, Subcommand};

/// Top-level argument parser for the `azulejo` binary.
#[derive(Parser, Debug)]
#[command(name = "azulejo", version, about = "Azulejo tile-drafting game CLI")]
pub struct AzulejoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// All subcommands understood by the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive two-player game
    Play {
        /// Number of rounds to play (default from configuration)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,

        /// RNG seed for a reproducible bag shuffle
        #[arg(long)]
        seed: Option<u64>,

        /// Display name for player 1
        #[arg(long)]
        p1: Option<String>,

        /// Display name for player 2
        #[arg(long)]
        p2: Option<String>,

        /// Append a JSONL match record to this file
        #[arg(long)]
        log: Option<String>,
    },

    /// Stock the factories from a seeded bag and print them
    Deal {
        /// RNG seed for deterministic output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show resolved configuration with value sources
    Cfg,
}
