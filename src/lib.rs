//! # lo-to
//!
//! Generator for Vietnamese "Lo To" bingo cards.
//!
//! A card is a 3x9 grid with five numbers per row. Column 0 holds 1-9,
//! column 8 holds 80-90 and every other column `c` holds `10c..=10c+9`.
//! Numbers never repeat on a card and ascend down each column.
//!
//! ## Pipelines
//!
//! 1. **Generate**: build a set of distinct cards from a seedable RNG and
//!    save it as JSON, CSV and a box-drawing text file.
//! 2. **Print**: read the text file (or the JSON) back and emit a printable
//!    HTML sheet, three cards per page.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors, file helpers
//! - `cards`: card model, invariant checks, generation
//! - `formats`: text/JSON/CSV/HTML output and the text parser
//! - `pipeline`: file-level operations used by the binaries
//!
//! ```
//! use lo_to::{generate_unique, CardRng};
//! use lo_to::formats::{parse_cards, text::render_card};
//!
//! let mut rng = CardRng::new(42);
//! let set = generate_unique(&mut rng, 3, 30);
//! assert_eq!(set.len(), 3);
//!
//! let card = &set.cards()[0];
//! assert!(card.is_valid());
//! assert_eq!(parse_cards(&render_card(card, 1)), vec![card.clone()]);
//! ```

pub mod cards;
pub mod core;
pub mod formats;
pub mod pipeline;

// Re-export commonly used types
pub use crate::core::{
    CardRng, Error, GeneratorConfig, OutputConfig, Result,
    DEFAULT_ATTEMPT_FACTOR, DEFAULT_CARD_COUNT,
};

pub use crate::cards::{
    column_range, generate_card, generate_card_set, generate_unique,
    Card, CardSet, CardViolation, Cell,
};

pub use crate::pipeline::{CardSource, PrintableSummary};
