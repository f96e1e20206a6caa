//! CSV card export: one row per card.
//!
//! Columns are `Card #` followed by `R1C1` .. `R3C9` in row-major order.
//! Empty cells are empty fields. Values are plain integers, so no field
//! ever needs quoting.

use crate::cards::{Card, COLUMNS, ROWS};

const LINE_END: &str = "\r\n";

/// Header fields.
#[must_use]
pub fn header() -> Vec<String> {
    let mut fields = Vec::with_capacity(1 + ROWS * COLUMNS);
    fields.push("Card #".to_string());
    for row in 1..=ROWS {
        for col in 1..=COLUMNS {
            fields.push(format!("R{row}C{col}"));
        }
    }
    fields
}

/// Fields for one card, numbered `number`.
#[must_use]
pub fn card_record(card: &Card, number: usize) -> Vec<String> {
    std::iter::once(number.to_string())
        .chain(card.rows().iter().flatten().map(|cell| match cell {
            Some(value) => value.to_string(),
            None => String::new(),
        }))
        .collect()
}

/// Render the whole CSV file. Cards are numbered from 1.
#[must_use]
pub fn to_csv(cards: &[Card]) -> String {
    let mut out = header().join(",");
    out.push_str(LINE_END);
    for (idx, card) in cards.iter().enumerate() {
        out.push_str(&card_record(card, idx + 1).join(","));
        out.push_str(LINE_END);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known_card() -> Card {
        Card::from_rows([
            [Some(1), None, Some(20), None, Some(40), None, Some(60), None, Some(80)],
            [None, Some(11), None, Some(31), None, Some(51), None, Some(71), Some(85)],
            [Some(9), Some(19), Some(29), None, None, None, Some(69), None, Some(90)],
        ])
    }

    #[test]
    fn test_header() {
        let fields = header();
        assert_eq!(fields.len(), 28);
        assert_eq!(fields[0], "Card #");
        assert_eq!(fields[1], "R1C1");
        assert_eq!(fields[9], "R1C9");
        assert_eq!(fields[10], "R2C1");
        assert_eq!(fields[27], "R3C9");
    }

    #[test]
    fn test_card_record() {
        let record = card_record(&known_card(), 7);
        assert_eq!(record.len(), 28);
        assert_eq!(record[0], "7");
        assert_eq!(&record[1..10], ["1", "", "20", "", "40", "", "60", "", "80"]);
        assert_eq!(&record[19..28], ["9", "19", "29", "", "", "", "69", "", "90"]);
    }

    #[test]
    fn test_to_csv() {
        let csv = to_csv(&[known_card(), known_card()]);
        let lines: Vec<&str> = csv.split_terminator(LINE_END).collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Card #,R1C1,R1C2,"));
        assert_eq!(
            lines[1],
            "1,1,,20,,40,,60,,80,,11,,31,,51,,71,85,9,19,29,,,,69,,90"
        );
        assert!(lines[2].starts_with("2,1,,20,"));
        assert!(csv.ends_with(LINE_END));
    }

    #[test]
    fn test_empty_set_has_header_only() {
        assert_eq!(to_csv(&[]).matches(LINE_END).count(), 1);
    }
}
