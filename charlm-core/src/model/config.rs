use crate::error::{ModelError, Result};

/// Construction options for a [`LanguageModel`](super::language_model::LanguageModel).
///
/// # Responsibilities
/// - Hold the window length shared by training and generation
/// - Select seeded (reproducible) or entropy-seeded generation
///
/// # Invariants
/// - `window_length >= 1`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelConfig {
	/// Number of characters in each lookup window.
	window_length: usize,

	/// Seed of the random source. `None` draws from OS entropy at construction.
	seed: Option<u64>,
}

impl ModelConfig {
	/// Creates an unseeded configuration.
	///
	/// # Errors
	/// Returns `ModelError::InvalidWindowLength` if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self> {
		if window_length == 0 {
			return Err(ModelError::InvalidWindowLength { window_length });
		}
		Ok(Self { window_length, seed: None })
	}

	/// Makes generation reproducible: same seed, same output.
	#[must_use]
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	pub fn seed(&self) -> Option<u64> {
		self.seed
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_window_is_rejected() {
		assert!(matches!(
			ModelConfig::new(0),
			Err(ModelError::InvalidWindowLength { window_length: 0 })
		));
	}

	#[test]
	fn seed_is_optional() {
		let config = ModelConfig::new(4).unwrap();
		assert_eq!(config.window_length(), 4);
		assert_eq!(config.seed(), None);
		assert_eq!(config.with_seed(20).seed(), Some(20));
	}
}
