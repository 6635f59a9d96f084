use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::io::read_file;
use super::random_source::RandomSource;
use super::sorted_dump::SortedDump;

/// Marker starting a category directive (`%word`).
pub const CATEGORY_MARKER: char = '%';

/// Marker flagging a word that needs an ending word after it (`!synergy`).
pub const NO_END_MARKER: char = '!';

/// In-memory word database built from a category-tagged text file.
///
/// # Responsibilities
/// - Parse `%category`, `!word` and plain word lines
/// - Keep each category's words in file order (duplicates included, they
///   weight random selection)
/// - Track the words flagged with `!` (the no-end set)
/// - Serve uniform random picks and a deterministic sorted rendering
///
/// # Invariants
/// - Built once, never mutated afterwards
/// - Every word is non-empty and trimmed
/// - The no-end set only holds words that were also stored in a category
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordStore {
	/// Category name to words, in insertion order.
	categories: BTreeMap<String, Vec<String>>,
	/// Words declared with the `!` marker, across all categories.
	no_ends: HashSet<String>,
}

impl WordStore {
	/// Loads a store from a word file.
	///
	/// # Errors
	/// - `Error::Io` if the file cannot be read
	/// - `Error::NoActiveCategory` if a word precedes the first `%` directive
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let store = Self::parse(&read_file(path)?)?;
		debug!(
			"loaded {} words in {} categories from {}",
			store.len(),
			store.categories.len(),
			path.display()
		);
		Ok(store)
	}

	/// Builds a store from the content of a word file.
	///
	/// Each line is trimmed, then:
	/// - blank lines are skipped
	/// - `%name` makes `name` (verbatim after the marker) the active category;
	///   re-opening appends
	/// - `!word` stores `word`, trimmed, in the active category and flags it as no-end
	/// - anything else is stored verbatim in the active category
	///
	/// A word line with no active category rejects the whole input.
	pub fn parse(text: &str) -> Result<Self> {
		let mut store = Self::default();
		let mut current: Option<String> = None;

		for (index, raw) in text.lines().enumerate() {
			let line = raw.trim();
			if line.is_empty() {
				continue;
			}

			if let Some(name) = line.strip_prefix(CATEGORY_MARKER) {
				let name = name.to_owned();
				store.categories.entry(name.clone()).or_default();
				current = Some(name);
				continue;
			}

			let (word, no_end) = match line.strip_prefix(NO_END_MARKER) {
				Some(rest) => (rest.trim(), true),
				None => (line, false),
			};
			if word.is_empty() {
				continue;
			}

			let Some(category) = current.as_ref() else {
				return Err(Error::NoActiveCategory { line: index + 1, word: word.to_owned() });
			};

			if no_end {
				store.no_ends.insert(word.to_owned());
			}
			// The entry was created by the directive that set `current`
			if let Some(words) = store.categories.get_mut(category) {
				words.push(word.to_owned());
			}
		}

		Ok(store)
	}

	/// Category names, in lexicographic order.
	pub fn categories(&self) -> impl Iterator<Item = &str> {
		self.categories.keys().map(String::as_str)
	}

	/// Words of a category in file order; empty when the category is absent.
	pub fn words(&self, category: &str) -> &[String] {
		self.categories.get(category).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Returns `true` if the category was declared in the file.
	pub fn has_category(&self, category: &str) -> bool {
		self.categories.contains_key(category)
	}

	/// Returns `true` if `word` was declared with the `!` marker.
	pub fn is_no_end(&self, word: &str) -> bool {
		self.no_ends.contains(word)
	}

	/// Total number of stored words, duplicates included.
	pub fn len(&self) -> usize {
		self.categories.values().map(Vec::len).sum()
	}

	/// Returns `true` if no category holds any word.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Uniformly picks a word from `category`.
	///
	/// Returns `""` when the category is absent or empty; no draw is made then.
	pub fn random_word<R: RandomSource + ?Sized>(&self, category: &str, rng: &mut R) -> &str {
		let words = self.words(category);
		if words.is_empty() {
			return "";
		}
		&words[rng.below(words.len())]
	}

	/// Lazily renders the store, categories and words sorted.
	///
	/// The iterator can be cloned or re-created to restart the rendering.
	pub fn sorted_dump(&self) -> SortedDump<'_> {
		SortedDump::new(&self.categories, &self.no_ends)
	}
}

impl fmt::Display for WordStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for line in self.sorted_dump() {
			writeln!(f, "{line}")?;
		}
		Ok(())
	}
}
