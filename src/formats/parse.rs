//! Reading cards back out of the rendered text format.
//!
//! A card block is a top border, the banner line, the banner divider, then
//! everything up to the next bottom border. Inside a block, separator lines
//! are dropped and the remaining six lines are read in marker/number pairs.
//! A shaded marker cell means the cell is empty; otherwise the number line
//! holds the value.
//!
//! Blocks that do not yield a full 3x9 grid are skipped, never fatal.

use thiserror::Error;
use tracing::debug;

use super::text::{CELL_DELIMITER, HEADER_TEXT, SHADE};
use crate::cards::{Card, Row, COLUMNS, ROWS};

/// Why a card block was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
enum BlockError {
    #[error("expected 6 data lines, found {0}")]
    DataLineCount(usize),

    #[error("row {row} has {count} cells")]
    CellCount { row: usize, count: usize },

    #[error("row {row}, column {col}: {text:?} is not a card number")]
    InvalidNumber { row: usize, col: usize, text: String },
}

/// Parse every well-formed card in `text`, in document order.
pub fn parse_cards(text: &str) -> Vec<Card> {
    let lines: Vec<&str> = text.lines().collect();
    let mut cards = Vec::new();
    let mut idx = 0;

    while idx < lines.len() {
        if !is_block_start(&lines[idx..]) {
            idx += 1;
            continue;
        }

        let body_start = idx + 3;
        let Some(len) = lines[body_start..]
            .iter()
            .position(|line| is_border(line, '└', '┘'))
        else {
            debug!(line = idx + 1, "card block has no bottom border");
            break;
        };

        match parse_block(&lines[body_start..body_start + len]) {
            Ok(card) => cards.push(card),
            Err(err) => debug!(line = idx + 1, %err, "skipping malformed card block"),
        }
        idx = body_start + len + 1;
    }

    cards
}

fn is_block_start(lines: &[&str]) -> bool {
    match lines {
        [top, header, divider, ..] => {
            is_border(top, '┌', '┐') && is_header(header) && is_border(divider, '├', '┤')
        }
        _ => false,
    }
}

/// `left`, one or more `─`, `right`, ignoring surrounding whitespace.
fn is_border(line: &str, left: char, right: char) -> bool {
    line.trim()
        .strip_prefix(left)
        .and_then(|rest| rest.strip_suffix(right))
        .is_some_and(|inner| !inner.is_empty() && inner.chars().all(|c| c == '─'))
}

fn is_header(line: &str) -> bool {
    line.trim()
        .strip_prefix(CELL_DELIMITER)
        .and_then(|rest| rest.strip_suffix(CELL_DELIMITER))
        .is_some_and(|inner| {
            inner.trim() == HEADER_TEXT
                && inner.starts_with(char::is_whitespace)
                && inner.ends_with(char::is_whitespace)
        })
}

fn is_data_line(line: &str) -> bool {
    line.contains(CELL_DELIMITER) && !line.contains(['─', '┼', '├'])
}

fn parse_block(body: &[&str]) -> Result<Card, BlockError> {
    let data: Vec<&str> = body.iter().copied().filter(|line| is_data_line(line)).collect();
    if data.len() != ROWS * 2 {
        return Err(BlockError::DataLineCount(data.len()));
    }

    let mut rows: [Row; ROWS] = [[None; COLUMNS]; ROWS];
    for (row, pair) in data.chunks_exact(2).enumerate() {
        let markers = inner_cells(pair[0]);
        let numbers = inner_cells(pair[1]);

        for cells in [&markers, &numbers] {
            if cells.len() != COLUMNS {
                return Err(BlockError::CellCount {
                    row,
                    count: cells.len(),
                });
            }
        }

        for (col, (marker, number)) in markers.iter().zip(&numbers).enumerate() {
            if marker.contains(SHADE) {
                continue;
            }
            let text = number.trim();
            let value = text
                .parse::<u8>()
                .ok()
                .filter(|n| (1..=90).contains(n))
                .ok_or_else(|| BlockError::InvalidNumber {
                    row,
                    col,
                    text: text.to_string(),
                })?;
            rows[row][col] = Some(value);
        }
    }

    Ok(Card::from_rows(rows))
}

/// Cells between the outer borders of a data line.
fn inner_cells(line: &str) -> Vec<&str> {
    let tokens: Vec<&str> = line.split(CELL_DELIMITER).collect();
    match tokens.as_slice() {
        [_, inner @ .., _] => inner.to_vec(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::text::render_card;

    fn sample_card() -> Card {
        Card::from_rows([
            [Some(3), None, Some(21), None, Some(44), None, Some(60), None, Some(80)],
            [None, Some(15), None, Some(33), None, Some(58), None, Some(72), Some(86)],
            [Some(8), Some(19), Some(27), None, None, None, Some(66), None, Some(90)],
        ])
    }

    #[test]
    fn test_roundtrip_single_card() {
        let text = render_card(&sample_card(), 1);
        assert_eq!(parse_cards(&text), vec![sample_card()]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_cards("").is_empty());
        assert!(parse_cards("no cards here\n").is_empty());
    }

    #[test]
    fn test_border_detection() {
        assert!(is_border("┌────┐", '┌', '┐'));
        assert!(is_border("  └──┘  ", '└', '┘'));
        assert!(!is_border("┌┐", '┌', '┐'));
        assert!(!is_border("├──┼──┤", '├', '┤'));
    }

    #[test]
    fn test_header_detection() {
        assert!(is_header(&crate::formats::text::header_line()));
        assert!(is_header("│ LO TO ✦ VSA TET 2026 │"));
        assert!(!is_header("│LO TO ✦ VSA TET 2026│"));
        assert!(!is_header("│   LO TO ✦ VSA TET 2025   │"));
    }

    #[test]
    fn test_inner_cells_drops_edges() {
        let cells = inner_cells("│a│b│c│");
        assert_eq!(cells, vec!["a", "b", "c"]);
        assert!(inner_cells("no delimiter").is_empty());
    }

    #[test]
    fn test_short_row_rejects_block() {
        let text = render_card(&sample_card(), 1);
        let broken = text.replacen("│  44  │", "│", 1);

        assert!(parse_cards(&broken).is_empty());
    }

    #[test]
    fn test_missing_data_line_rejects_block() {
        let text = render_card(&sample_card(), 1);
        let lines: Vec<&str> = text.lines().collect();
        let body: Vec<&str> = lines[4..12].iter().copied().filter(|l| *l != lines[5]).collect();

        assert_eq!(parse_block(&body), Err(BlockError::DataLineCount(5)));
    }

    #[test]
    fn test_non_numeric_cell_rejects_block() {
        let text = render_card(&sample_card(), 1);
        let broken = text.replacen("  44  ", "  ??  ", 1);

        assert!(parse_cards(&broken).is_empty());
    }

    #[test]
    fn test_malformed_block_does_not_hide_neighbours() {
        let good = render_card(&sample_card(), 1);
        let bad = render_card(&sample_card(), 2).replacen("│  60  │", "│", 1);
        let text = format!("{good}\n{bad}\n{good}\n");

        assert_eq!(parse_cards(&text), vec![sample_card(), sample_card()]);
    }

    #[test]
    fn test_unterminated_block_is_ignored() {
        let good = render_card(&sample_card(), 1);
        let truncated: String = good.lines().take(8).collect::<Vec<_>>().join("\n");
        let text = format!("{good}\n{truncated}");

        assert_eq!(parse_cards(&text), vec![sample_card()]);
    }
}
