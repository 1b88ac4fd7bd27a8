//! Configuration types for resolved CLI arguments.
//!
//! This module contains Config structs and their TryFrom implementations.
//! Args structs (for CLI parsing) remain in cli.rs.

use crate::cli::SplitArgs;
use eyre::{Result, ensure};
use std::path::PathBuf;

/// One dataset split to generate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Split {
    /// Split name, used as the record id prefix `utt_{name}`
    pub name: &'static str,
    /// Output file path
    pub path: PathBuf,
    /// Number of records
    pub count: usize,
}

impl Split {
    /// Record id prefix, e.g. `utt_train`.
    pub fn id_prefix(&self) -> String {
        format!("utt_{}", self.name)
    }
}

/// Resolved split configuration.
///
/// Converted from SplitArgs via TryFrom.
/// Splits are generated in order from a single random stream.
#[derive(Debug)]
pub struct SplitConfig {
    pub splits: Vec<Split>,
}

impl TryFrom<SplitArgs> for SplitConfig {
    type Error = eyre::Error;

    fn try_from(args: SplitArgs) -> Result<Self> {
        let train = args.output_dir.join(&args.train_file);
        let dev = args.output_dir.join(&args.dev_file);

        ensure!(
            train != dev,
            "train and dev splits would both be written to {:?}",
            train.display()
        );

        Ok(Self {
            splits: vec![
                Split {
                    name: "train",
                    path: train,
                    count: args.num_train,
                },
                Split {
                    name: "dev",
                    path: dev,
                    count: args.num_dev,
                },
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_args(train_file: &str, dev_file: &str) -> SplitArgs {
        SplitArgs {
            output_dir: PathBuf::from("data"),
            train_file: PathBuf::from(train_file),
            dev_file: PathBuf::from(dev_file),
            num_train: 3,
            num_dev: 1,
        }
    }

    #[test]
    fn resolves_train_then_dev() {
        let config = SplitConfig::try_from(split_args("train.jsonl", "dev.jsonl")).unwrap();

        assert_eq!(config.splits.len(), 2);
        assert_eq!(config.splits[0].path, PathBuf::from("data/train.jsonl"));
        assert_eq!(config.splits[0].id_prefix(), "utt_train");
        assert_eq!(config.splits[0].count, 3);
        assert_eq!(config.splits[1].path, PathBuf::from("data/dev.jsonl"));
        assert_eq!(config.splits[1].id_prefix(), "utt_dev");
        assert_eq!(config.splits[1].count, 1);
    }

    #[test]
    fn rejects_same_output_for_both_splits() {
        assert!(SplitConfig::try_from(split_args("all.jsonl", "all.jsonl")).is_err());
    }
}
