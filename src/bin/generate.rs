//! Generate 200 Lo To cards and save them as JSON, CSV and text.

use lo_to::formats::text::render_card;
use lo_to::pipeline::generate_and_save;
use lo_to::{GeneratorConfig, OutputConfig, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = GeneratorConfig::default();
    let output = OutputConfig::default();

    println!("Generating {} Vietnamese Lo To Bingo Cards...", config.card_count);
    println!("{}", "-".repeat(60));

    let set = generate_and_save(&config, &output)?;

    println!("\nSuccessfully generated {} unique cards!", set.len());
    println!("\nFiles created:");
    println!("  - {} (JSON format)", output.json_path.display());
    println!("  - {} (CSV format)", output.csv_path.display());
    println!("  - {} (Human-readable format)", output.text_path.display());

    if let Some(first) = set.cards().first() {
        println!("\nPreview of first card:");
        println!("{}", render_card(first, 1));
    }

    Ok(())
}
