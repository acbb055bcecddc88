//! Fixed-order character model and its building blocks:
//! - Per-window follower statistics (`FrequencyTable`)
//! - The trained window table and generator (`LanguageModel`)
//! - Construction options (`ModelConfig`)

/// Validated construction options (window length, optional seed).
pub mod config;

/// Ordered follower counts and cumulative probabilities for one window.
pub mod frequency_table;

/// Window table, single-pass training and generation.
pub mod language_model;

pub use config::ModelConfig;
pub use frequency_table::{CharacterStat, FrequencyTable};
pub use language_model::LanguageModel;
