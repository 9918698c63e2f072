//! Command-line argument definitions.
//!
//! Declarative clap types for the `fivedraw` binary. Parsing happens in
//! [`crate::run`]; every option that overlaps the configuration layer is
//! optional here so the resolved config can fill the gaps.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `fivedraw` binary.
#[derive(Debug, Parser)]
#[command(
    name = "fivedraw",
    version,
    about = "Five-card draw poker at the terminal"
)]
pub struct FivedrawCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// All `fivedraw` subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive session against bot opponents
    Play {
        /// Number of bot seats at the table (1-5)
        #[arg(long)]
        bots: Option<u32>,

        /// Bot strategy name (see `fivedraw cfg` for the default)
        #[arg(long)]
        strategy: Option<String>,

        /// Deck RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,

        /// Session id; defaults to a UTC timestamp
        #[arg(long)]
        session: Option<String>,

        /// Resume stacks and round count from an existing session log
        #[arg(long)]
        resume: Option<String>,

        /// Display name for the human seat
        #[arg(long)]
        name: Option<String>,
    },

    /// Run bot-only rounds and report the outcome
    Sim {
        /// Number of rounds to simulate
        #[arg(long)]
        rounds: u32,

        /// Number of bot seats at the table (2-6)
        #[arg(long)]
        bots: Option<u32>,

        /// Bot strategy name
        #[arg(long)]
        strategy: Option<String>,

        /// Deck RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Append one record per round to this JSONL file
        #[arg(long)]
        output: Option<String>,
    },

    /// Aggregate statistics from session logs
    Stats {
        /// A session file or a directory of *.jsonl / *.jsonl.zst files
        #[arg(long)]
        input: String,
    },

    /// Deal and evaluate one sample hand
    Deal {
        /// Deck RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the resolved configuration and where each value came from
    Cfg,
}
