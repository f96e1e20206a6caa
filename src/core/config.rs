//! Generation and output configuration.
//!
//! Both entry points run with fixed defaults; these types exist so the
//! library can be driven with other values from code and tests.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default number of cards in a generated set.
pub const DEFAULT_CARD_COUNT: usize = 200;

/// Default attempt budget, as a multiple of the requested card count.
pub const DEFAULT_ATTEMPT_FACTOR: usize = 10;

/// Card set generation parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of unique cards to produce.
    pub card_count: usize,

    /// Attempt budget multiplier. Generation stops after
    /// `card_count * attempt_factor` attempts even if the set is short.
    pub attempt_factor: usize,

    /// RNG seed. `None` draws a seed from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            card_count: DEFAULT_CARD_COUNT,
            attempt_factor: DEFAULT_ATTEMPT_FACTOR,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Set the number of cards to generate.
    #[must_use]
    pub fn with_card_count(mut self, count: usize) -> Self {
        self.card_count = count;
        self
    }

    /// Set the attempt budget multiplier.
    #[must_use]
    pub fn with_attempt_factor(mut self, factor: usize) -> Self {
        self.attempt_factor = factor;
        self
    }

    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Maximum number of generation attempts.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.card_count.saturating_mul(self.attempt_factor)
    }
}

/// Output file locations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub json_path: PathBuf,
    pub csv_path: PathBuf,
    pub text_path: PathBuf,
    pub html_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_path: PathBuf::from("lo_to_cards.json"),
            csv_path: PathBuf::from("lo_to_cards.csv"),
            text_path: PathBuf::from("lo_to_cards.txt"),
            html_path: PathBuf::from("lo_to_cards_printable.html"),
        }
    }
}

impl OutputConfig {
    /// Default file names placed under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let defaults = Self::default();
        Self {
            json_path: dir.join(defaults.json_path),
            csv_path: dir.join(defaults.csv_path),
            text_path: dir.join(defaults.text_path),
            html_path: dir.join(defaults.html_path),
        }
    }
}
