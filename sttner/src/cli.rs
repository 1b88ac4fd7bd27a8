//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;
use std::path::PathBuf;

/// Default number of training samples
pub const DEFAULT_NUM_TRAIN: usize = 1000;

/// Default number of dev samples
pub const DEFAULT_NUM_DEV: usize = 100;

#[derive(Debug, Parser)]
#[command(name = "sttner")]
#[command(about = "Synthetic NER data for noisy speech-to-text transcripts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate train and dev splits as JSONL files
    Gen(crate::generate::Args),

    /// Validate entity spans in JSONL files
    Check(crate::check::Args),
}

/// Output layout for generated splits.
#[derive(clap::Args, Clone, Debug)]
pub struct SplitArgs {
    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Training split file name
    #[arg(long, default_value = "train.jsonl")]
    pub train_file: PathBuf,

    /// Dev split file name
    #[arg(long, default_value = "dev.jsonl")]
    pub dev_file: PathBuf,

    /// Number of training samples
    #[arg(long, default_value_t = DEFAULT_NUM_TRAIN)]
    pub num_train: usize,

    /// Number of dev samples
    #[arg(long, default_value_t = DEFAULT_NUM_DEV)]
    pub num_dev: usize,
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Gen(args) => crate::generate::execute(args.try_into()?),
        Commands::Check(args) => crate::check::execute(args.try_into()?),
    }
}
