//! Generator settings.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GeneratorConfig {
    /// Grid rows.
    #[serde(default = "default_size")]
    rows: usize,

    /// Grid columns.
    #[serde(default = "default_size")]
    cols: usize,

    /// Largest share of blank cells a grid may hold.
    #[serde(default = "default_max_blank_ratio")]
    max_blank_ratio: f64,

    /// Longest word the generator may place.
    #[serde(default = "default_max_word_length")]
    max_word_length: usize,

    /// Soft wall-clock budget per attempt, in milliseconds.
    #[serde(default)]
    #[setters(strip_option)]
    time_budget_ms: Option<u64>,

    /// Budget resets allowed before giving up.
    #[serde(default)]
    #[setters(strip_option)]
    max_restarts: Option<u32>,

    /// Seed for reproducible fills.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

#[instrument]
fn default_size() -> usize {
    5
}

#[instrument]
fn default_max_blank_ratio() -> f64 {
    0.5
}

#[instrument]
fn default_max_word_length() -> usize {
    5
}

impl GeneratorConfig {
    /// Creates a config for a `rows x cols` grid with default limits.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: default_size(),
            cols: default_size(),
            max_blank_ratio: default_max_blank_ratio(),
            max_word_length: default_max_word_length(),
            time_budget_ms: None,
            max_restarts: None,
            seed: None,
        }
    }
}
