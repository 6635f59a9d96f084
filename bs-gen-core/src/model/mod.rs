//! Top-level module for phrase generation.
//!
//! This module provides:
//! - The category-tagged word database (`WordStore`)
//! - Its deterministic sorted rendering (`SortedDump`)
//! - The randomness capability used for every draw (`RandomSource`)
//! - The multi-stage phrase assembler (`PhraseGenerator`)

/// Stochastic phrase assembly over a loaded `WordStore`.
///
/// Exposes the generator, its stage probabilities and the category names
/// it reads.
pub mod generator;

/// In-memory word database parsed from a `%category` / `!word` text file.
pub mod word_store;

/// Lazy sorted rendering of a `WordStore`, parseable again.
pub mod sorted_dump;

/// Uniform integer and float draws, implemented for every `rand` generator.
pub mod random_source;
