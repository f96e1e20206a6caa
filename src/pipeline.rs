//! File-level operations behind the two binaries.

use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::cards::{generate_card_set, Card, CardSet};
use crate::core::{read_file, write_file, GeneratorConfig, OutputConfig, Result};
use crate::formats::{csv, html, json, parse, text};

/// Where the printable sheet reads its cards from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardSource {
    /// The rendered text file. Compatible with text files from earlier runs.
    #[default]
    Text,
    /// The JSON document, which is lossless.
    Json,
}

/// Summary of a printable sheet run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrintableSummary {
    pub cards: usize,
    pub pages: usize,
}

/// Current local time, as stamped into generated files.
#[must_use]
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Write the JSON, CSV and text files for `cards`.
pub fn write_card_files(
    cards: &[Card],
    output: &OutputConfig,
    generated_at: NaiveDateTime,
) -> Result<()> {
    write_file(&output.json_path, &json::to_json(cards, generated_at)?)?;
    write_file(&output.csv_path, &csv::to_csv(cards))?;
    write_file(&output.text_path, &text::render_document(cards, generated_at))?;
    info!(cards = cards.len(), "saved card files");
    Ok(())
}

/// Generate a card set and write all three card files.
pub fn generate_and_save(config: &GeneratorConfig, output: &OutputConfig) -> Result<CardSet> {
    let set = generate_card_set(config);
    write_card_files(set.cards(), output, now())?;
    Ok(set)
}

/// Load cards from the file named by `source`.
pub fn load_cards(source: CardSource, output: &OutputConfig) -> Result<Vec<Card>> {
    let cards = match source {
        CardSource::Text => parse::parse_cards(&read_file(&output.text_path)?),
        CardSource::Json => json::from_json(&read_file(&output.json_path)?)?.cards,
    };
    info!(?source, cards = cards.len(), "loaded cards");
    Ok(cards)
}

/// Build the printable HTML sheet from previously generated cards.
pub fn write_printable(source: CardSource, output: &OutputConfig) -> Result<PrintableSummary> {
    let cards = load_cards(source, output)?;
    write_file(&output.html_path, &html::render_document(&cards))?;
    Ok(PrintableSummary {
        cards: cards.len(),
        pages: html::page_count(cards.len()),
    })
}
