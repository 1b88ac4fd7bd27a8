//! Newline-delimited JSON persistence for records.
//!
//! One compact JSON object per line, UTF-8, no trailing metadata.

use eyre::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use sttner_synth::types::Record;

/// Buffered JSONL record writer.
pub struct JsonlWriter<W: Write> {
    inner: W,
    written: usize,
}

impl JsonlWriter<BufWriter<File>> {
    /// Create (or truncate) a JSONL file.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .wrap_err_with(|| format!("failed to create {:?}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Append one record as a single line.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        serde_json::to_writer(&mut self.inner, record)
            .wrap_err_with(|| format!("failed to serialize record {}", record.id))?;
        self.inner.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush().wrap_err("failed to flush records")?;
        Ok(self.inner)
    }
}

/// Parse JSONL records from a reader, skipping blank lines.
///
/// Yields `(line_number, record)` with 1-based line numbers.
pub fn read_records<R: BufRead>(reader: R) -> impl Iterator<Item = Result<(usize, Record)>> {
    reader
        .lines()
        .zip(1..)
        .filter(|(line, _)| !matches!(line, Ok(l) if l.trim().is_empty()))
        .map(|(line, n)| {
            let line = line.wrap_err_with(|| format!("failed to read line {n}"))?;
            let record = serde_json::from_str(&line)
                .wrap_err_with(|| format!("invalid record on line {n}"))?;
            Ok((n, record))
        })
}

/// Open a JSONL file for [`read_records`].
pub fn open(path: &Path) -> Result<BufReader<File>> {
    let file =
        File::open(path).wrap_err_with(|| format!("failed to open {:?}", path.display()))?;
    Ok(BufReader::new(file))
}
