//! sttner-synth: synthetic NER samples rendered as noisy speech-to-text transcripts.
//!
//! Generates sentences that embed PII-like entities (emails, card numbers, phone
//! numbers, dates, names, cities, addresses) in carrier phrases, corrupts them the way
//! an STT engine would, and records exact character offsets for every entity.
//!
//! # Architecture
//!
//! - [`noise::NoiseConfig`]: lowercasing, spoken punctuation and random digit spelling
//! - [`provider::ValueProvider`]: raw entity values, one operation per label
//! - [`assembler::SampleAssembler`]: template selection, per-fragment noise and
//!   offset bookkeeping
//!
//! # Quick Start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use sttner_synth::assembler::SampleAssembler;
//! use sttner_synth::noise::NoiseConfig;
//! use sttner_synth::provider::FakeProvider;
//! use sttner_synth::template::TEMPLATES;
//!
//! let assembler = SampleAssembler::new(TEMPLATES, FakeProvider, NoiseConfig::default())?;
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let record = assembler.generate_sample("utt_train_0000", &mut rng)?;
//! for span in &record.entities {
//!     println!("{}: {:?}", span.label, record.span_text(span));
//! }
//! # Ok::<(), sttner_synth::error::Error>(())
//! ```

pub mod assembler;
pub mod error;
pub mod noise;
pub mod provider;
pub mod template;
pub mod types;
