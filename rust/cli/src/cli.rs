//! Argument definitions for the `pokersim` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pokersim",
    author,
    version,
    about = "Seeded multi-player poker hand simulator"
)]
pub struct PokersimCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play N hands on one table and record the hand history
    Sim {
        #[arg(long)]
        hands: u64,
        /// JSONL hand history destination
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
        /// One of: check, call, random, baseline
        #[arg(long)]
        agent: Option<String>,
        #[arg(long)]
        players: Option<usize>,
    },
    /// Deal one hand and print every seat's hole cards and the board
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        players: Option<usize>,
    },
    /// Classify two hole cards against a board
    Eval {
        /// Two cards, e.g. "Ah Kh"
        #[arg(long)]
        hole: String,
        /// Zero to five cards, e.g. "Qh Jh Th"
        #[arg(long, default_value = "")]
        board: String,
        /// Keep the strongest 5-card subset instead of classifying the whole set
        #[arg(long)]
        best_five: bool,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
    /// Turn recorded hands into flattened training samples
    Dataset {
        /// Hand history (JSONL, optionally .zst)
        #[arg(long)]
        input: PathBuf,
        /// Sample destination (JSONL, optionally .zst)
        #[arg(long)]
        output: PathBuf,
        /// Shuffle the samples with this seed
        #[arg(long)]
        shuffle: Option<u64>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Sim { .. } => "sim",
            Commands::Deal { .. } => "deal",
            Commands::Eval { .. } => "eval",
            Commands::Cfg => "cfg",
            Commands::Dataset { .. } => "dataset",
        }
    }
}

pub const COMMANDS: &[&str] = &["sim", "deal", "eval", "cfg", "dataset"];
