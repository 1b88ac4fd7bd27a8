//! Check subcommand - validate entity spans in JSONL files.

use crate::jsonl;
use eyre::{Context, Result};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// CLI arguments for dataset validation.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// JSONL files to validate
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Resolved configuration for dataset validation.
#[derive(Debug)]
pub struct Config {
    pub paths: Vec<PathBuf>,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self { paths: args.paths })
    }
}

/// Record and entity counts for one checked file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub records: usize,
    pub entities: usize,
}

pub fn execute(config: Config) -> Result<()> {
    for path in &config.paths {
        let summary = check_file(path)?;

        tracing::info!(
            path = ?path.display(),
            records = summary.records,
            entities = summary.entities,
            "spans valid"
        );
    }

    Ok(())
}

/// Validate every record in a JSONL file.
pub fn check_file(path: &Path) -> Result<Summary> {
    let reader = jsonl::open(path)?;
    check_reader(reader).wrap_err_with(|| format!("invalid dataset: {:?}", path.display()))
}

/// Validate every record from a JSONL reader, stopping at the first bad one.
pub fn check_reader<R: BufRead>(reader: R) -> Result<Summary> {
    let mut summary = Summary::default();

    for item in jsonl::read_records(reader) {
        let (line, record) = item?;
        record
            .validate()
            .wrap_err_with(|| format!("line {line}: record {}", record.id))?;

        summary.records += 1;
        summary.entities += record.entities.len();
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_valid_records() {
        let input = concat!(
            r#"{"id":"a","text":"i am in rome","entities":[{"start":8,"end":12,"label":"CITY"}]}"#,
            "\n",
            r#"{"id":"b","text":"call me at five and i am in rome","entities":[{"start":11,"end":15,"label":"PHONE"},{"start":28,"end":32,"label":"CITY"}]}"#,
            "\n",
        );

        let summary = check_reader(input.as_bytes()).unwrap();

        assert_eq!(
            summary,
            Summary {
                records: 2,
                entities: 3
            }
        );
    }

    #[test]
    fn reports_bad_span_with_line() {
        let input = concat!(
            r#"{"id":"a","text":"i am in rome","entities":[{"start":8,"end":12,"label":"CITY"}]}"#,
            "\n",
            r#"{"id":"b","text":"i am in rome","entities":[{"start":7,"end":12,"label":"CITY"}]}"#,
            "\n",
        );

        let err = check_reader(input.as_bytes()).unwrap_err();

        assert_eq!(err.to_string(), "line 2: record b");
    }

    #[test]
    fn empty_input_is_valid() {
        assert_eq!(check_reader("".as_bytes()).unwrap(), Summary::default());
    }
}
