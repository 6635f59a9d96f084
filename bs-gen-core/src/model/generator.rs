use std::cmp::min;

use log::{trace, warn};

use super::random_source::RandomSource;
use super::word_store::WordStore;

/// Category of the optional opening words.
pub const START: &str = "start";
/// Category of the core words.
pub const WORD: &str = "word";
/// Category of the suffixes glued to core words.
pub const SUFFIX: &str = "suffix";
/// Category of the protocol-like terms.
pub const PROTOCOL: &str = "protocol";
/// Category of the closing words.
pub const END: &str = "end";
/// Token placed between two consecutive protocol picks.
pub const JOINER: &str = "over";

/// Minimum target word budget of a phrase.
const MIN_BUDGET: usize = 3;
/// Number of extra budget values above the minimum (budget in `3..=10`).
const BUDGET_SPREAD: usize = 8;
/// Starts and protocols are drawn in `[0, 4)`.
const MAX_RUN: usize = 4;
/// Cap on the words added by a single word stage.
const MAX_WORDS_PER_STAGE: usize = 3;

/// Probabilities of the coin flips made while assembling a phrase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Probabilities {
	/// A core word gets a suffix glued to it.
	pub(crate) suffix: f64,
	/// The protocol stage runs at all.
	pub(crate) protocol: f64,
	/// An ending word is appended although nothing requires it.
	pub(crate) ending: f64,
}

impl Default for Probabilities {
	fn default() -> Self {
		Self { suffix: 0.2, protocol: 0.5, ending: 0.1 }
	}
}

/// Phrase under construction, tracking what the ending decision needs.
#[derive(Debug, Default)]
struct Phrase<'a> {
	tokens: Vec<String>,
	/// Budget units consumed so far (a whole protocol run counts as one).
	output_count: usize,
	/// Base word of the last pick, without suffix.
	last_word: &'a str,
	/// Whether the most recent core word got a suffix. Start and protocol
	/// picks leave it untouched.
	had_suffix: bool,
}

impl<'a> Phrase<'a> {
	fn push_pick(&mut self, word: &'a str) {
		self.tokens.push(word.to_owned());
		self.last_word = word;
	}
}

/// Assembles random phrases from a `WordStore`.
///
/// # Stages
/// 1. Draw a word budget in `3..=10`
/// 2. Zero to three `start` words
/// 3. Up to three `word` entries, each possibly suffixed
/// 4. Half of the time, zero to three `protocol` terms joined by `over`
/// 5. Up to three more `word` entries, at least two words overall
/// 6. An `end` word when the last word asks for it, the last core word
///    carries a suffix, or by plain chance
///
/// The generator only borrows the store and keeps no state between calls.
#[derive(Clone, Copy, Debug)]
pub struct PhraseGenerator<'a> {
	store: &'a WordStore,
	probabilities: Probabilities,
}

impl<'a> PhraseGenerator<'a> {
	/// Creates a generator with the default probabilities.
	pub fn new(store: &'a WordStore) -> Self {
		for category in [START, WORD, SUFFIX, PROTOCOL, END] {
			if !store.has_category(category) {
				warn!("word file has no '{category}' category, its picks will be empty");
			}
		}
		Self { store, probabilities: Probabilities::default() }
	}

	/// Creates a generator with forced coin flips, for steering tests.
	#[cfg(test)]
	pub(crate) fn with_probabilities(store: &'a WordStore, probabilities: Probabilities) -> Self {
		Self { probabilities, ..Self::new(store) }
	}

	/// Generates one phrase, tokens separated by single spaces.
	///
	/// Never fails: missing categories yield empty tokens.
	pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> String {
		let total_words = MIN_BUDGET + rng.below(BUDGET_SPREAD);
		let mut phrase = Phrase::default();

		let num_starts = rng.below(MAX_RUN);
		for _ in 0..num_starts {
			phrase.push_pick(self.pick(START, rng));
			phrase.output_count += 1;
		}

		let num_words = Self::draw_budget(&phrase, total_words, rng);
		self.push_words(&mut phrase, num_words, rng);

		let num_protocols = if rng.chance(self.probabilities.protocol) {
			let num_protocols = rng.below(MAX_RUN);
			for i in 0..num_protocols {
				phrase.push_pick(self.pick(PROTOCOL, rng));
				if i + 1 != num_protocols {
					phrase.tokens.push(JOINER.to_owned());
				}
			}
			phrase.output_count += 1;
			Some(num_protocols)
		} else {
			None
		};

		let mut num_more_words = Self::draw_budget(&phrase, total_words, rng);
		if phrase.output_count + num_more_words <= 1 {
			num_more_words += 2;
		}
		self.push_words(&mut phrase, num_more_words, rng);

		let ending = rng.chance(self.probabilities.ending)
			|| self.store.is_no_end(phrase.last_word)
			|| phrase.had_suffix;
		if ending {
			phrase.tokens.push(self.pick(END, rng).to_owned());
		}

		trace!(
			"budget={total_words} starts={num_starts} words={num_words} protocols={num_protocols:?} \
			 more_words={num_more_words} ending={ending}"
		);

		phrase.tokens.join(" ")
	}

	/// Lazily generates `count` phrases from the same random source.
	pub fn generate_many<R: RandomSource + ?Sized>(
		&self,
		count: usize,
		rng: &mut R,
	) -> impl Iterator<Item = String> {
		(0..count).map(move |_| self.generate(&mut *rng))
	}

	fn pick<R: RandomSource + ?Sized>(&self, category: &str, rng: &mut R) -> &'a str {
		let store: &'a WordStore = self.store;
		store.random_word(category, rng)
	}

	/// Draws how many words a word stage adds: `[0, min(left, 3)]`, or 0
	/// once the budget is spent.
	fn draw_budget<R: RandomSource + ?Sized>(phrase: &Phrase<'_>, total_words: usize, rng: &mut R) -> usize {
		if phrase.output_count >= total_words {
			return 0;
		}
		let remaining = min(total_words - phrase.output_count, MAX_WORDS_PER_STAGE);
		rng.below(remaining + 1)
	}

	fn push_words<R: RandomSource + ?Sized>(&self, phrase: &mut Phrase<'a>, count: usize, rng: &mut R) {
		for _ in 0..count {
			let word = self.pick(WORD, rng);
			phrase.had_suffix = rng.chance(self.probabilities.suffix);
			if phrase.had_suffix {
				let suffix = self.pick(SUFFIX, rng);
				phrase.tokens.push(format!("{word}{suffix}"));
			} else {
				phrase.tokens.push(word.to_owned());
			}
			phrase.last_word = word;
			phrase.output_count += 1;
		}
	}
}
