use std::collections::{HashMap, VecDeque};
use std::fmt;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::ModelConfig;
use super::frequency_table::FrequencyTable;
use crate::error::{ModelError, Result};

/// Fixed-order character-level Markov model.
///
/// The `LanguageModel` maps every window of `window_length` characters seen in
/// the corpus to the characters that followed it, and generates text by
/// repeatedly sampling a follower of the trailing window.
///
/// # Responsibilities
/// - Build the window table from a corpus in a single pass
/// - Normalize counts into probabilities once training is over
/// - Generate text from a seed using its own random source
///
/// # Invariants
/// - `window_length >= 1`
/// - Every key of `table` has exactly `window_length` characters
/// - Every table is finalized once training returns
#[derive(Debug)]
pub struct LanguageModel {
	/// Number of characters in each window.
	window_length: usize,

	/// Mapping from a window to the statistics of its followers.
	table: HashMap<String, FrequencyTable>,

	/// Random source, advanced by every sampled character.
	rng: StdRng,

	/// Set once a training pass has populated the table.
	trained: bool,
}

impl LanguageModel {
	/// Creates an untrained model.
	///
	/// With a seed, generation is reproducible across runs. Without one the
	/// random source is initialized from OS entropy.
	pub fn new(config: ModelConfig) -> Self {
		let rng = match config.seed() {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Self {
			window_length: config.window_length(),
			table: HashMap::new(),
			rng,
			trained: false,
		}
	}

	/// Trains the model on an in-memory corpus.
	///
	/// See [`LanguageModel::train_chars`].
	pub fn train(&mut self, corpus: &str) -> Result<()> {
		self.train_chars(corpus.chars())
	}

	/// Trains the model from a stream of characters, reading each one once.
	///
	/// # Behavior
	/// - The first `window_length` characters form the initial window.
	/// - Each following character is counted under the current window, then
	///   the window slides by one.
	/// - Probabilities are computed for every window after the scan.
	///
	/// # Errors
	/// - `ModelError::AlreadyTrained` if a previous call populated the model.
	/// - `ModelError::InsufficientCorpus` if the stream ends before a full
	///   window is read. The table stays empty and the model remains usable.
	pub fn train_chars<I>(&mut self, corpus: I) -> Result<()>
	where
		I: IntoIterator<Item = char>,
	{
		if self.trained {
			return Err(ModelError::AlreadyTrained);
		}

		let mut chars = corpus.into_iter();
		let mut window: VecDeque<char> = chars.by_ref().take(self.window_length).collect();
		if window.len() < self.window_length {
			return Err(ModelError::InsufficientCorpus {
				corpus_length: window.len(),
				window_length: self.window_length,
			});
		}

		let mut key = String::new();
		let mut observations = 0usize;
		for next_char in chars {
			key.clear();
			key.extend(window.iter());
			match self.table.get_mut(&key) {
				Some(frequencies) => frequencies.record_observation(next_char),
				None => {
					let mut frequencies = FrequencyTable::new();
					frequencies.record_observation(next_char);
					self.table.insert(key.clone(), frequencies);
				}
			}
			window.pop_front();
			window.push_back(next_char);
			observations += 1;
		}

		// Normalize only once every count is final.
		for frequencies in self.table.values_mut() {
			frequencies.finalize_probabilities();
		}
		self.trained = true;

		debug!(
			"trained on {} characters: {} windows of length {}",
			observations + self.window_length,
			self.table.len(),
			self.window_length
		);
		Ok(())
	}

	/// Generates text following `seed_text`.
	///
	/// # Parameters
	/// - `seed_text`: text to start with; it is always a prefix of the result.
	/// - `target_length`: maximum number of characters to append.
	///
	/// # Returns
	/// `seed_text` followed by up to `target_length` sampled characters.
	///
	/// # Notes
	/// - A seed shorter than the window is returned unchanged.
	/// - Generation stops early when the trailing window was never seen
	///   during training.
	pub fn generate(&mut self, seed_text: &str, target_length: usize) -> String {
		let seed_chars: Vec<char> = seed_text.chars().collect();
		if seed_chars.len() < self.window_length {
			return seed_text.to_owned();
		}

		let mut generated = seed_text.to_owned();
		let mut window: VecDeque<char> =
			seed_chars[seed_chars.len() - self.window_length..].iter().copied().collect();

		let mut key = String::new();
		for _ in 0..target_length {
			key.clear();
			key.extend(window.iter());
			let Some(frequencies) = self.table.get(&key) else {
				trace!("window {key:?} never seen, stopping generation");
				break;
			};
			let Some(next_char) = frequencies.sample(self.rng.random::<f64>()) else {
				break;
			};
			generated.push(next_char);
			window.pop_front();
			window.push_back(next_char);
		}

		generated
	}

	/// Returns a human-readable dump of every window and its followers.
	///
	/// One line per window, `"<window> : <followers>"`. Window order is
	/// unspecified.
	pub fn render(&self) -> String {
		self.to_string()
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Statistics of the characters that followed `window`, if it was seen.
	pub fn frequency_table(&self, window: &str) -> Option<&FrequencyTable> {
		self.table.get(window)
	}

	/// All known windows, in no particular order.
	pub fn windows(&self) -> impl Iterator<Item = &str> {
		self.table.keys().map(String::as_str)
	}

	/// Number of distinct windows.
	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}

	pub fn is_trained(&self) -> bool {
		self.trained
	}
}

impl fmt::Display for LanguageModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (window, frequencies) in &self.table {
			writeln!(f, "{window} : {frequencies}")?;
		}
		Ok(())
	}
}
