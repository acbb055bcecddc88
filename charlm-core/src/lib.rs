//! Character-level Markov language model.
//!
//! This crate provides:
//! - A fixed-order model mapping each window of characters to its followers
//! - Probabilistic generation, reproducible when seeded
//! - Corpus loading helpers
//!
//! # Example
//!
//! ```
//! use charlm_core::model::{LanguageModel, ModelConfig};
//!
//! let config = ModelConfig::new(2)?.with_seed(20);
//! let mut model = LanguageModel::new(config);
//! model.train("ababab")?;
//! assert_eq!(model.generate("ab", 4), "ababab");
//! # Ok::<(), charlm_core::ModelError>(())
//! ```

/// Language model, per-window frequency tables and configuration.
pub mod model;

/// Error type shared by the crate.
pub mod error;

/// Corpus loading (files and readers).
pub mod io;

pub use error::{ModelError, Result};
