//! Speech-to-text style text corruption.
//!
//! Renders clean text the way an STT engine would: lowercase, punctuation spoken as
//! words or dropped, digits randomly spelled out.

use crate::error::ConfigError;
use rand::Rng;

/// Default probability of spelling out a digit
const DEFAULT_DIGIT_WORD_PROBABILITY: f64 = 0.7;

/// Word forms for `'0'..='9'`, indexed by digit value.
pub const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Literal replacements applied in declaration order.
///
/// Later entries operate on the output of earlier ones.
pub const PUNCTUATION_REPLACEMENTS: &[(&str, &str)] = &[
    (".", " dot "),
    ("@", " at "),
    ("-", " "),
    ("_", " "),
    (",", ""),
    ("?", ""),
    ("!", ""),
];

/// Configuration for STT noise.
#[derive(clap::Args, Clone, Copy, Debug, PartialEq)]
pub struct NoiseConfig {
    /// Probability of spelling out each digit as a word
    #[arg(long, default_value_t = DEFAULT_DIGIT_WORD_PROBABILITY)]
    pub digit_word_probability: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            digit_word_probability: DEFAULT_DIGIT_WORD_PROBABILITY,
        }
    }
}

impl NoiseConfig {
    /// Create a noise configuration, rejecting probabilities outside `[0, 1]`.
    pub fn new(digit_word_probability: f64) -> Result<Self, ConfigError> {
        let config = Self {
            digit_word_probability,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured probability is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.digit_word_probability;
        if (0.0..=1.0).contains(&p) {
            Ok(())
        } else {
            Err(ConfigError::InvalidProbability {
                name: "digit word probability",
                value: p,
            })
        }
    }

    /// Corrupt `text` into STT-style output.
    ///
    /// Exactly one random draw is consumed per ASCII digit in the punctuation-replaced
    /// text, whatever the probability.
    pub fn apply<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        let mut text = text.to_lowercase();

        for (from, to) in PUNCTUATION_REPLACEMENTS {
            text = text.replace(from, to);
        }

        let spelled = spell_digits(&text, self.digit_word_probability, rng);

        // single pass: runs of 3+ spaces survive partially
        spelled.trim().replace("  ", " ")
    }
}

/// Corrupt `text` with the default configuration.
pub fn noise<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    NoiseConfig::default().apply(text, rng)
}

/// Replace each digit with its word and a trailing space with probability `p`.
fn spell_digits<R: Rng + ?Sized>(text: &str, p: f64, rng: &mut R) -> String {
    let mut out = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        match c.to_digit(10) {
            Some(d) if rng.random::<f64>() < p => {
                out.push_str(DIGIT_WORDS[d as usize]);
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}
