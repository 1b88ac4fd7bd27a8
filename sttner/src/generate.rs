//! Gen subcommand - write train and dev splits as JSONL.

use crate::cli::SplitArgs;
use crate::config::{Split, SplitConfig};
use crate::jsonl::JsonlWriter;
use eyre::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use sttner_synth::assembler::SampleAssembler;
use sttner_synth::noise::NoiseConfig;
use sttner_synth::provider::{FakeProvider, ValueProvider};
use sttner_synth::template::TEMPLATES;

/// Default global random seed
const DEFAULT_SEED: u64 = 42;

/// CLI arguments for dataset generation.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub split_args: SplitArgs,

    /// Global random seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    #[command(flatten)]
    pub noise_config: NoiseConfig,
}

/// Resolved configuration for dataset generation.
#[derive(Debug)]
pub struct Config {
    pub split_config: SplitConfig,
    pub seed: u64,
    pub noise_config: NoiseConfig,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        args.noise_config.validate()?;

        Ok(Self {
            split_config: args.split_args.try_into()?,
            seed: args.seed,
            noise_config: args.noise_config,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let assembler = SampleAssembler::new(TEMPLATES, FakeProvider, config.noise_config)?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    tracing::info!(
        seed = config.seed,
        digit_word_probability = config.noise_config.digit_word_probability,
        "generating dataset"
    );

    let s = Instant::now();
    let mut total = 0;

    for split in &config.split_config.splits {
        total += write_split(&assembler, split, &mut rng)?;
    }

    tracing::info!(
        records = total,
        duration = %format!("{:.2}s", s.elapsed().as_secs_f32()),
        "done"
    );

    Ok(())
}

/// Generate one split into its file, returning the number of records written.
fn write_split<P: ValueProvider>(
    assembler: &SampleAssembler<'_, P>,
    split: &Split,
    rng: &mut StdRng,
) -> Result<usize> {
    tracing::info!(
        split = split.name,
        count = split.count,
        path = ?split.path.display(),
        "generating split"
    );

    if let Some(dir) = split.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create directory {:?}", dir.display()))?;
    }

    let mut writer = JsonlWriter::create(&split.path)?;
    let prefix = split.id_prefix();

    for record in assembler.generate_split(&prefix, split.count, rng) {
        let record = record.wrap_err_with(|| format!("failed to generate {} sample", split.name))?;
        writer.write_record(&record)?;
    }

    let written = writer.written();
    writer
        .finish()
        .wrap_err_with(|| format!("failed to write {:?}", split.path.display()))?;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonl;
    use std::path::PathBuf;

    fn args(output_dir: PathBuf, probability: f64) -> Args {
        Args {
            split_args: SplitArgs {
                output_dir,
                train_file: PathBuf::from("train.jsonl"),
                dev_file: PathBuf::from("dev.jsonl"),
                num_train: 5,
                num_dev: 2,
            },
            seed: 42,
            noise_config: NoiseConfig {
                digit_word_probability: probability,
            },
        }
    }

    #[test]
    fn rejects_invalid_probability() {
        let result = Config::try_from(args(std::env::temp_dir(), 1.7));

        assert!(result.is_err());
    }

    #[test]
    fn writes_both_splits() {
        let dir = std::env::temp_dir().join("sttner-generate-unit");
        std::fs::remove_dir_all(&dir).ok();

        execute(Config::try_from(args(dir.clone(), 0.7)).unwrap()).unwrap();

        let train: Vec<_> = jsonl::read_records(jsonl::open(&dir.join("train.jsonl")).unwrap())
            .collect::<Result<_>>()
            .unwrap();
        let dev: Vec<_> = jsonl::read_records(jsonl::open(&dir.join("dev.jsonl")).unwrap())
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(train.len(), 5);
        assert_eq!(dev.len(), 2);
        assert_eq!(train[0].1.id, "utt_train_0000");
        assert_eq!(dev[1].1.id, "utt_dev_0001");
        for (_, record) in train.iter().chain(&dev) {
            assert!(record.validate().is_ok(), "{record:?}");
        }

        std::fs::remove_dir_all(&dir).ok();
    }
}
