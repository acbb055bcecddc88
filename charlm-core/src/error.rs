//! Error types for model construction, training and corpus loading.

use thiserror::Error;

/// Result type alias for language model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while configuring or training a language model.
///
/// Reaching an unseen window or generating from a seed shorter than the
/// window are not errors: generation simply returns what it has.
#[derive(Debug, Error)]
pub enum ModelError {
	/// The window length must be at least one character.
	#[error("invalid window length: {window_length} (must be >= 1)")]
	InvalidWindowLength { window_length: usize },

	/// The corpus is shorter than the window, so no window can be formed.
	///
	/// Recoverable: the model stays usable with an empty table.
	#[error("corpus has {corpus_length} characters, fewer than the window length {window_length}")]
	InsufficientCorpus {
		corpus_length: usize,
		window_length: usize,
	},

	/// The model has already been trained once.
	#[error("model is already trained")]
	AlreadyTrained,

	/// I/O error while reading a corpus.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

impl ModelError {
	/// Returns `true` when the error leaves the model in a usable state.
	#[must_use]
	pub fn is_recoverable(&self) -> bool {
		matches!(self, Self::InsufficientCorpus { .. })
	}
}
