//! Fixed-width box-drawing text rendering.
//!
//! The exact layout produced here is also the input format of
//! [`parse_cards`](super::parse::parse_cards): border characters, cell widths
//! and the header line must not drift apart between the two.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   LO TO ✦ VSA TET 2026                       │
//! ├──────────────────────────────────────────────────────────────┤
//! │      │▓▓▓▓▓▓│      │ ...
//! │   7  │▓▓▓▓▓▓│  23  │ ...
//! ├──────┼──────┼──────┼ ...
//! ```

use chrono::NaiveDateTime;

use crate::cards::{Card, COLUMNS, ROWS};

/// Banner text shown at the top of every card.
pub const HEADER_TEXT: &str = "LO TO ✦ VSA TET 2026";

/// Glyph filling empty cells.
pub const SHADE: char = '▓';

/// Vertical border between cells.
pub const CELL_DELIMITER: char = '│';

/// Width of one cell, in characters.
pub const CELL_WIDTH: usize = 6;

/// Width of a card between its outer borders.
pub const INNER_WIDTH: usize = COLUMNS * CELL_WIDTH + (COLUMNS - 1);

const HEADER_PAD_LEFT: usize = 19;
const FOOTER_INDENT: usize = 50;
const RULE_WIDTH: usize = 80;
const CUT_RULE_WIDTH: usize = 65;
const CARDS_PER_PAGE: usize = 3;

const TITLE_BANNER: [&str; 6] = [
    "    ██╗      ██████╗     ████████╗ ██████╗     ██████╗ ██╗███╗   ██╗ ██████╗  ██████╗ ",
    "    ██║     ██╔═══██╗    ╚══██╔══╝██╔═══██╗    ██╔══██╗██║████╗  ██║██╔════╝ ██╔═══██╗",
    "    ██║     ██║   ██║       ██║   ██║   ██║    ██████╔╝██║██╔██╗ ██║██║  ███╗██║   ██║",
    "    ██║     ██║   ██║       ██║   ██║   ██║    ██╔══██╗██║██║╚██╗██║██║   ██║██║   ██║",
    "    ███████╗╚██████╔╝       ██║   ╚██████╔╝    ██████╔╝██║██║ ╚████║╚██████╔╝╚██████╔╝",
    "    ╚══════╝ ╚═════╝        ╚═╝    ╚═════╝     ╚═════╝ ╚═╝╚═╝  ╚═══╝ ╚═════╝  ╚═════╝ ",
];

/// Render one card with its footer number (printed as `CARD #001`).
///
/// The result starts with a newline, leaving a blank line above the card.
#[must_use]
pub fn render_card(card: &Card, number: usize) -> String {
    let mut lines = Vec::with_capacity(ROWS * 3 + 4);

    lines.push(format!("\n┌{}┐", "─".repeat(INNER_WIDTH)));
    lines.push(header_line());
    lines.push(format!("├{}┤", "─".repeat(INNER_WIDTH)));

    for (row_idx, row) in card.rows().iter().enumerate() {
        let mut marker = String::from(CELL_DELIMITER);
        let mut numbers = String::from(CELL_DELIMITER);

        for (col, cell) in row.iter().enumerate() {
            match cell {
                None => {
                    let shade = SHADE.to_string().repeat(CELL_WIDTH);
                    marker.push_str(&shade);
                    numbers.push_str(&shade);
                }
                Some(value) => {
                    marker.push_str(&" ".repeat(CELL_WIDTH));
                    numbers.push_str(&format!("  {value:>2}  "));
                }
            }
            if col < COLUMNS - 1 {
                marker.push(CELL_DELIMITER);
                numbers.push(CELL_DELIMITER);
            }
        }

        marker.push(CELL_DELIMITER);
        numbers.push(CELL_DELIMITER);
        lines.push(marker);
        lines.push(numbers);

        if row_idx < ROWS - 1 {
            lines.push(row_separator());
        }
    }

    lines.push(format!("└{}┘", "─".repeat(INNER_WIDTH)));
    lines.push(format!("{}CARD #{number:03}", " ".repeat(FOOTER_INDENT)));

    lines.join("\n")
}

/// The banner line, text placed as on the printed cards.
#[must_use]
pub fn header_line() -> String {
    let right = INNER_WIDTH - HEADER_PAD_LEFT - HEADER_TEXT.chars().count();
    format!(
        "│{}{HEADER_TEXT}{}│",
        " ".repeat(HEADER_PAD_LEFT),
        " ".repeat(right)
    )
}

fn row_separator() -> String {
    let cells = vec!["─".repeat(CELL_WIDTH); COLUMNS];
    format!("├{}┤", cells.join("┼"))
}

/// Render the full text file: title page, then every card numbered from 1,
/// with a cut line after each group of three.
#[must_use]
pub fn render_document(cards: &[Card], generated_at: NaiveDateTime) -> String {
    let rule = "═".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("\n{rule}\n\n"));
    for line in TITLE_BANNER {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&format!("\n{rule}\n\n"));
    out.push_str(&format!(
        "    Generated: {}\n",
        generated_at.format("%B %d, %Y at %I:%M %p")
    ));
    out.push_str(&format!("    Total Cards: {}\n", cards.len()));
    out.push_str(&format!("\n{rule}\n"));
    out.push_str(&format!("\n{}\n", "─".repeat(RULE_WIDTH)));

    for (idx, card) in cards.iter().enumerate() {
        let number = idx + 1;
        out.push_str(&render_card(card, number));

        if number % CARDS_PER_PAGE == 0 && number < cards.len() {
            let cut_rule = "═".repeat(CUT_RULE_WIDTH);
            out.push_str("\n\n");
            out.push_str(&format!("{cut_rule}\n"));
            out.push_str(&format!("{}✂ CUT HERE ✂\n", " ".repeat(25)));
            out.push_str(&format!("{cut_rule}\n"));
        } else {
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_card() -> Card {
        Card::from_rows([
            [Some(7), None, Some(23), None, Some(41), None, Some(65), None, Some(88)],
            [None, Some(12), None, Some(30), None, Some(52), None, Some(77), Some(89)],
            [Some(9), Some(18), Some(29), None, None, None, Some(69), None, Some(90)],
        ])
    }

    #[test]
    fn test_render_card_layout() {
        let text = render_card(&sample_card(), 1);
        let lines: Vec<&str> = text.split('\n').collect();

        assert_eq!(lines[0], "");
        assert_eq!(
            lines[1],
            "┌──────────────────────────────────────────────────────────────┐"
        );
        assert_eq!(
            lines[2],
            "│                   LO TO ✦ VSA TET 2026                       │"
        );
        assert_eq!(
            lines[3],
            "├──────────────────────────────────────────────────────────────┤"
        );
        assert_eq!(
            lines[4],
            "│      │▓▓▓▓▓▓│      │▓▓▓▓▓▓│      │▓▓▓▓▓▓│      │▓▓▓▓▓▓│      │"
        );
        assert_eq!(
            lines[5],
            "│   7  │▓▓▓▓▓▓│  23  │▓▓▓▓▓▓│  41  │▓▓▓▓▓▓│  65  │▓▓▓▓▓▓│  88  │"
        );
        assert_eq!(
            lines[6],
            "├──────┼──────┼──────┼──────┼──────┼──────┼──────┼──────┼──────┤"
        );
        assert_eq!(
            lines[12],
            "└──────────────────────────────────────────────────────────────┘"
        );
        assert_eq!(
            lines[13],
            "                                                  CARD #001"
        );
        assert_eq!(lines.len(), 14);
    }

    #[test]
    fn test_all_grid_lines_share_width() {
        let text = render_card(&sample_card(), 42);
        for line in text.lines().skip(1).take(12) {
            assert_eq!(line.chars().count(), INNER_WIDTH + 2, "{line}");
        }
        assert!(text.ends_with("CARD #042"));
    }

    #[test]
    fn test_document_header_and_cut_lines() {
        let cards = vec![sample_card(); 4];
        let generated_at =
            NaiveDateTime::parse_from_str("2026-01-05 14:07:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let doc = render_document(&cards, generated_at);

        assert!(doc.contains("    Generated: January 05, 2026 at 02:07 PM\n"));
        assert!(doc.contains("    Total Cards: 4\n"));
        assert_eq!(doc.matches("✂ CUT HERE ✂").count(), 1);
        assert_eq!(doc.matches("CARD #").count(), 4);
        assert!(doc.ends_with("CARD #004\n"));
    }

    #[test]
    fn test_document_without_trailing_cut_line() {
        let cards = vec![sample_card(); 3];
        let generated_at = NaiveDateTime::default();
        let doc = render_document(&cards, generated_at);

        assert_eq!(doc.matches("✂ CUT HERE ✂").count(), 0);
    }
}
