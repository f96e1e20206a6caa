//! Turn `lo_to_cards.txt` into a printable HTML sheet.

use lo_to::pipeline::write_printable;
use lo_to::{CardSource, OutputConfig, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let output = OutputConfig::default();

    println!("Parsing cards from {}...", output.text_path.display());
    let summary = write_printable(CardSource::Text, &output)?;

    println!("Generated {}", output.html_path.display());
    println!("   Total cards: {}", summary.cards);
    println!("   Total pages: {}", summary.pages);

    Ok(())
}
