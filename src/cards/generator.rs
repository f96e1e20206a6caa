//! Random card and card set generation.
//!
//! ## Card layout
//!
//! Each row independently picks 5 of the 9 columns. Every picked slot draws
//! a number from its column range that is not yet on the card. Finally each
//! column's numbers are sorted so they read top to bottom in ascending order;
//! sorting never changes which cells are occupied.
//!
//! ## Card sets
//!
//! Sets are built by generating cards until the requested number of distinct
//! grids is reached or the attempt budget runs out.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{info, warn};

use super::card::{column_range, Card, Row, COLUMNS, NUMBERS_PER_ROW, ROWS};
use crate::core::{CardRng, GeneratorConfig};

/// Generate one card.
///
/// If a column runs out of unused numbers the slot stays empty, so a row may
/// end up with fewer than 5 numbers. With the standard column ranges this
/// cannot happen, since no column receives more than 3 numbers.
pub fn generate_card(rng: &mut CardRng) -> Card {
    let mut rows: [Row; ROWS] = [[None; COLUMNS]; ROWS];
    let mut used: FxHashSet<u8> = FxHashSet::default();

    for row in rows.iter_mut() {
        for col in rng.sample_indices(COLUMNS, NUMBERS_PER_ROW) {
            let available: SmallVec<[u8; 11]> = column_range(col)
                .filter(|n| !used.contains(n))
                .collect();

            if let Some(&number) = rng.choose(&available) {
                row[col] = Some(number);
                used.insert(number);
            }
        }
    }

    sort_columns(&mut rows);
    Card::from_rows(rows)
}

/// Sort each column's numbers ascending, keeping occupied positions fixed.
fn sort_columns(rows: &mut [Row; ROWS]) {
    for col in 0..COLUMNS {
        let mut values: SmallVec<[u8; ROWS]> = rows.iter().filter_map(|row| row[col]).collect();
        values.sort_unstable();

        let mut sorted = values.into_iter();
        for row in rows.iter_mut() {
            if row[col].is_some() {
                row[col] = sorted.next();
            }
        }
    }
}

/// An ordered set of distinct cards.
#[derive(Clone, Debug, Default)]
pub struct CardSet {
    cards: Vec<Card>,
    requested: usize,
    attempts: usize,
}

impl CardSet {
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards that were asked for.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Number of cards generated, duplicates included.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// True when every requested card was produced.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.len() == self.requested
    }
}

/// Generate `target` distinct cards, giving up after `max_attempts` tries.
///
/// Returns whatever was collected; a short set is not an error.
pub fn generate_unique(rng: &mut CardRng, target: usize, max_attempts: usize) -> CardSet {
    let mut cards = Vec::with_capacity(target);
    let mut seen: FxHashSet<Card> = FxHashSet::default();
    let mut attempts = 0;

    while cards.len() < target && attempts < max_attempts {
        let card = generate_card(rng);
        if seen.insert(card.clone()) {
            cards.push(card);
        }
        attempts += 1;
    }

    let set = CardSet {
        cards,
        requested: target,
        attempts,
    };

    if set.is_complete() {
        info!(cards = set.len(), attempts, "generated card set");
    } else {
        warn!(
            cards = set.len(),
            requested = target,
            attempts,
            "attempt budget exhausted before reaching requested card count"
        );
    }

    set
}

/// Generate a card set as described by `config`.
///
/// Uses the configured seed, or OS entropy when none is set.
pub fn generate_card_set(config: &GeneratorConfig) -> CardSet {
    let mut rng = CardRng::from_seed_or_entropy(config.seed);
    info!(seed = rng.seed(), count = config.card_count, "generating cards");
    generate_unique(&mut rng, config.card_count, config.max_attempts())
}
