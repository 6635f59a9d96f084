//! Nonsense phrase generation library.
//!
//! This crate turns a category-tagged word file into random jargon:
//! - Parsing of `%category` / `!word` word files into an immutable store
//! - A five-stage stochastic phrase assembler driven by an injected random source
//! - Deterministic, sorted rendering of a loaded store
//! - Helpers to locate the default word file
//!
//! The store is built once and then only read; generation itself never fails.

/// Word store, phrase generator and the randomness capability they share.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (file loading, default path lookup).
pub mod io;

pub use error::{Error, Result};
pub use model::generator::PhraseGenerator;
pub use model::random_source::RandomSource;
pub use model::word_store::WordStore;
