//! Card model and generation.
//!
//! ## Key Types
//!
//! - `Card`: immutable 3x9 grid, empty cells are `None`
//! - `CardViolation`: a broken card invariant
//! - `CardSet`: distinct cards plus generation bookkeeping
//!
//! Generation takes an explicit `CardRng`, so a seed reproduces a set.

pub mod card;
pub mod generator;

pub use card::{column_range, Card, CardViolation, Cell, Row, COLUMNS, NUMBERS_PER_ROW, ROWS};
pub use generator::{generate_card, generate_card_set, generate_unique, CardSet};
