//! sttner: generate and check noisy speech-to-text NER datasets.

pub mod check;
pub mod cli;
pub mod config;
pub mod generate;
pub mod jsonl;
