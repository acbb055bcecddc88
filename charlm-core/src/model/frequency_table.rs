use std::fmt;

/// Statistics for one character observed after a given window.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterStat {
	/// The following character.
	pub character: char,
	/// How many times `character` followed the window. Always >= 1.
	pub count: usize,
	/// `count` divided by the total count of the window.
	pub probability: f64,
	/// Running sum of `probability` in insertion order.
	pub cumulative_probability: f64,
}

impl CharacterStat {
	fn new(character: char) -> Self {
		Self {
			character,
			count: 1,
			probability: 0.0,
			cumulative_probability: 0.0,
		}
	}
}

impl fmt::Display for CharacterStat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"({} {} {} {})",
			self.character, self.count, self.probability, self.cumulative_probability
		)
	}
}

/// Ordered next-character statistics for a single window.
///
/// Conceptually a node in a Markov chain: each entry is an outgoing edge
/// weighted by its number of observations.
///
/// ## Responsibilities:
/// - Accumulate occurrences during training, in first-seen order
/// - Derive probabilities and cumulative probabilities once counts are final
/// - Sample the next character from a uniform draw in `[0, 1)`
///
/// ## Invariants
/// - Entries are never reordered; insertion order partitions `[0, 1)`
/// - Each entry has `count >= 1`
/// - After finalization the last cumulative probability is 1.0 (within rounding)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrequencyTable {
	stats: Vec<CharacterStat>,
}

impl FrequencyTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `character` following the window.
	///
	/// - If the character was already seen, its count is increased.
	/// - Otherwise a new entry with a count of 1 is appended at the end.
	pub fn record_observation(&mut self, character: char) {
		match self.stats.iter_mut().find(|stat| stat.character == character) {
			Some(stat) => stat.count += 1,
			None => self.stats.push(CharacterStat::new(character)),
		}
	}

	/// Computes `probability` and `cumulative_probability` for every entry.
	///
	/// Must run once, after every observation for this window is recorded.
	pub fn finalize_probabilities(&mut self) {
		let total = self.total_count() as f64;
		let mut cumulative = 0.0;
		for stat in &mut self.stats {
			stat.probability = stat.count as f64 / total;
			cumulative += stat.probability;
			stat.cumulative_probability = cumulative;
		}
	}

	/// Picks a character for the uniform draw `r` in `[0, 1)`.
	///
	/// Returns the first entry whose cumulative probability exceeds `r`.
	/// Cumulative values are strictly increasing, so a binary search gives the
	/// same answer as a linear scan. A draw at or past the last cumulative value
	/// (rounding) selects the last entry.
	///
	/// Returns `None` only if the table is empty.
	pub fn sample(&self, r: f64) -> Option<char> {
		debug_assert!(
			self.stats.iter().all(|stat| stat.cumulative_probability > 0.0),
			"sampling before finalize_probabilities"
		);
		let index = self
			.stats
			.partition_point(|stat| stat.cumulative_probability <= r);
		self.stats
			.get(index)
			.or_else(|| self.stats.last())
			.map(|stat| stat.character)
	}

	/// Sum of all counts.
	pub fn total_count(&self) -> usize {
		self.stats.iter().map(|stat| stat.count).sum()
	}

	/// Entries in insertion order.
	pub fn stats(&self) -> &[CharacterStat] {
		&self.stats
	}

	/// Looks up the entry for `character`.
	pub fn get(&self, character: char) -> Option<&CharacterStat> {
		self.stats.iter().find(|stat| stat.character == character)
	}

	pub fn len(&self) -> usize {
		self.stats.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stats.is_empty()
	}
}

impl fmt::Display for FrequencyTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for stat in &self.stats {
			if !first {
				f.write_str(" ")?;
			}
			write!(f, "{stat}")?;
			first = false;
		}
		Ok(())
	}
}
