//! Error types for sttner-synth organized by generation stage.

use crate::types::EntityLabel;
use thiserror::Error;

/// Synthesis error variants organized by stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration stage error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Fake-value provider error
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Record span validation error
    #[error(transparent)]
    Span(#[from] SpanError),
}

/// Configuration errors (noise settings, template catalogs).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Probability outside the unit interval
    #[error("invalid {name}: {value} (expected a value in [0, 1])")]
    InvalidProbability { name: &'static str, value: f64 },

    /// Template catalog has no entries
    #[error("template catalog is empty")]
    EmptyCatalog,

    /// Template has no before or after options to choose from
    #[error("template {index} ({label}) has no {side} options")]
    EmptyOptions {
        index: usize,
        label: EntityLabel,
        side: &'static str,
    },
}

/// Errors raised by a value provider while producing a raw entity.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to provide {label} value: {message}")]
    Failed { label: EntityLabel, message: String },
}

/// Span invariant violations found when validating a record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    /// Span ends past the end of the text
    #[error("span {index} ends at {end} but text has {len} characters")]
    OutOfBounds { index: usize, end: usize, len: usize },

    /// Span start is after its end
    #[error("span {index} starts at {start} after its end {end}")]
    Inverted {
        index: usize,
        start: usize,
        end: usize,
    },

    /// Spanned text begins or ends with whitespace
    #[error("span {index} text {text:?} has leading or trailing whitespace")]
    Whitespace { index: usize, text: String },

    /// Span starts before the previous span ends
    #[error("span {index} starts at {start} before previous span ends at {prev_end}")]
    Overlap {
        index: usize,
        start: usize,
        prev_end: usize,
    },
}

/// Result type alias for sttner-synth operations.
pub type Result<T> = std::result::Result<T, Error>;
