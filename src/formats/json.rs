//! JSON card documents.
//!
//! ```json
//! {
//!   "generated_at": "2026-01-05T14:07:00.123456",
//!   "total_cards": 200,
//!   "cards": [[[1, null, 20, ...], [...], [...]], ...]
//! }
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cards::Card;
use crate::core::Result;

/// A parsed JSON card document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDocument {
    pub generated_at: NaiveDateTime,
    pub total_cards: usize,
    pub cards: Vec<Card>,
}

#[derive(Serialize)]
struct CardDocumentRef<'a> {
    generated_at: NaiveDateTime,
    total_cards: usize,
    cards: &'a [Card],
}

/// Serialize `cards` as a pretty-printed JSON document.
pub fn to_json(cards: &[Card], generated_at: NaiveDateTime) -> Result<String> {
    let doc = CardDocumentRef {
        generated_at,
        total_cards: cards.len(),
        cards,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse a JSON card document.
///
/// A `total_cards` field that disagrees with the card list is logged and
/// otherwise ignored.
pub fn from_json(text: &str) -> Result<CardDocument> {
    let doc: CardDocument = serde_json::from_str(text)?;
    if doc.total_cards != doc.cards.len() {
        warn!(
            total_cards = doc.total_cards,
            found = doc.cards.len(),
            "card count in JSON header does not match card list"
        );
    }
    Ok(doc)
}
