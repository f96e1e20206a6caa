//! Shared building blocks: RNG, configuration, errors and file helpers.

pub mod config;
pub mod error;
pub mod fs;
pub mod rng;

pub use config::{GeneratorConfig, OutputConfig, DEFAULT_ATTEMPT_FACTOR, DEFAULT_CARD_COUNT};
pub use error::{Error, Result};
pub use fs::{read_file, write_file};
pub use rng::CardRng;
