//! Error types for word file loading.
//!
//! Generation itself is infallible; every error here happens before the
//! first phrase is produced.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	/// The word file could not be opened or read.
	#[error("unable to load file at {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// A word appeared before any `%category` directive.
	#[error("line {line}: word '{word}' appears before any %category directive")]
	NoActiveCategory { line: usize, word: String },
}

impl Error {
	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}

	/// Returns `true` for failures coming from the filesystem.
	pub fn is_io(&self) -> bool {
		matches!(self, Self::Io { .. })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn io_error_mentions_path() {
		let err = Error::io("/nowhere/words.txt", io::Error::new(io::ErrorKind::NotFound, "missing"));
		assert!(err.is_io());
		let msg = err.to_string();
		assert!(msg.contains("/nowhere/words.txt"));
		assert!(msg.contains("missing"));
	}

	#[test]
	fn orphan_word_mentions_line_and_word() {
		let err = Error::NoActiveCategory { line: 3, word: "foo".to_owned() };
		assert!(!err.is_io());
		let msg = err.to_string();
		assert!(msg.contains("line 3"));
		assert!(msg.contains("'foo'"));
	}
}
