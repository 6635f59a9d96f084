use std::collections::{btree_map, BTreeMap, HashSet};
use std::vec;

use super::word_store::{CATEGORY_MARKER, NO_END_MARKER};

/// Lazy, line-by-line rendering of a `WordStore`.
///
/// Output layout:
/// - categories in lexicographic order, each introduced by `%<name>`
/// - words sorted by no-end flag (unflagged first), then lexicographically
/// - flagged words prefixed with `!`
/// - one empty line between two categories, none before the first
///
/// The rendering is parseable again and yields an equivalent store.
#[derive(Clone, Debug)]
pub struct SortedDump<'a> {
	categories: btree_map::Iter<'a, String, Vec<String>>,
	no_ends: &'a HashSet<String>,
	header: Option<&'a str>,
	words: vec::IntoIter<&'a str>,
	started: bool,
}

impl<'a> SortedDump<'a> {
	pub(crate) fn new(categories: &'a BTreeMap<String, Vec<String>>, no_ends: &'a HashSet<String>) -> Self {
		Self {
			categories: categories.iter(),
			no_ends,
			header: None,
			words: Vec::new().into_iter(),
			started: false,
		}
	}
}

impl Iterator for SortedDump<'_> {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		if let Some(name) = self.header.take() {
			return Some(format!("{CATEGORY_MARKER}{name}"));
		}

		if let Some(word) = self.words.next() {
			return Some(if self.no_ends.contains(word) {
				format!("{NO_END_MARKER}{word}")
			} else {
				word.to_owned()
			});
		}

		let (name, words) = self.categories.next()?;
		let no_ends = self.no_ends;
		let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
		sorted.sort_by(|left, right| {
			no_ends
				.contains(*left)
				.cmp(&no_ends.contains(*right))
				.then_with(|| left.cmp(right))
		});
		self.words = sorted.into_iter();

		if self.started {
			// Separator first, the header comes on the next call
			self.header = Some(name);
			Some(String::new())
		} else {
			self.started = true;
			Some(format!("{CATEGORY_MARKER}{name}"))
		}
	}
}
