//! Printable HTML sheet, three cards per page.
//!
//! The document is self-contained: inline styles, a print button and a
//! Ctrl/Cmd+P handler. Occupied cells carry the `empty` class (plain
//! background) and blank cells the `filled` class (striped background),
//! matching the printed card look.

use super::text::HEADER_TEXT;
use crate::cards::Card;

/// Cards grouped onto one printed page.
pub const CARDS_PER_PAGE: usize = 3;

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>LO TO BINGO - VSA TET 2026</title>
    <style>
        :root {
            --vsa-red: #C41E3A;
            --vsa-gold: #FFD700;
            --vsa-yellow: #FFC72C;
            --vsa-dark-red: #8B0000;
            --border-color: #2C1810;
            --text-color: #1a1a1a;
        }

        @media print {
            body { margin: 0; padding: 0; }
            .no-print { display: none; }
            @page { size: letter portrait; margin: 0.3in 0.4in; }
            .cards-container { display: flex; flex-direction: column; gap: 8px; }
            .card { border: 2px solid var(--vsa-red); margin-bottom: 0; padding: 10px; }
            .card-header { padding: 8px; font-size: 13px; margin-bottom: 8px; }
            .bingo-cell { font-size: 13px; }
        }

        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
            -webkit-print-color-adjust: exact;
            print-color-adjust: exact;
        }

        body {
            font-family: 'Courier New', monospace;
            background: #FFF8E7;
            padding: 10px;
        }

        .print-button {
            position: fixed;
            top: 20px;
            right: 20px;
            padding: 15px 30px;
            background: var(--vsa-red);
            color: white;
            border: none;
            border-radius: 8px;
            font-size: 16px;
            font-weight: bold;
            cursor: pointer;
            box-shadow: 0 4px 6px rgba(0,0,0,0.2);
            z-index: 1000;
        }

        .print-button:hover {
            background: var(--vsa-dark-red);
            transform: translateY(-2px);
            box-shadow: 0 6px 8px rgba(0,0,0,0.3);
        }

        .cards-page { break-inside: avoid; page-break-after: always; }

        .cards-container {
            display: flex;
            flex-direction: column;
            gap: 12px;
            margin-bottom: 15px;
        }

        .card {
            background: #FFF8E7;
            border: 3px solid var(--vsa-red);
            border-radius: 6px;
            padding: 12px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
            break-inside: avoid;
        }

        .card-header {
            text-align: center;
            padding: 10px;
            background: linear-gradient(135deg, var(--vsa-red) 0%, var(--vsa-dark-red) 100%);
            color: white;
            border-radius: 4px;
            margin-bottom: 10px;
            font-weight: bold;
            font-size: 15px;
            letter-spacing: 1px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.2);
        }

        .bingo-grid {
            display: grid;
            grid-template-columns: repeat(9, 1fr);
            gap: 2px;
            border: 2px solid var(--border-color);
            border-radius: 6px;
            overflow: hidden;
            background: var(--border-color);
        }

        .bingo-cell {
            aspect-ratio: 1;
            display: flex;
            align-items: center;
            justify-content: center;
            font-weight: bold;
            font-size: 15px;
            background: #FFF8E7;
            border: 1px solid #ddd;
        }

        .bingo-cell.filled {
            background: repeating-linear-gradient(
                45deg,
                var(--vsa-gold),
                var(--vsa-gold) 5px,
                var(--vsa-yellow) 5px,
                var(--vsa-yellow) 10px
            );
            color: var(--vsa-dark-red);
        }

        .bingo-cell.empty {
            background: #FFF8E7;
            color: var(--text-color);
        }
    </style>
</head>
<body>
    <button class="print-button no-print" onclick="window.print()">🖨️ Print Cards</button>

"#;

const DOCUMENT_TAIL: &str = r#"    <script>
        document.addEventListener('keydown', function(e) {
            if ((e.ctrlKey || e.metaKey) && e.key === 'p') {
                e.preventDefault();
                window.print();
            }
        });
    </script>
</body>
</html>
"#;

/// Markup for a single card.
#[must_use]
pub fn render_card(card: &Card) -> String {
    let mut html = String::from("        <div class=\"card\">\n");
    html.push_str(&format!(
        "            <div class=\"card-header\">{HEADER_TEXT}</div>\n"
    ));
    html.push_str("            <div class=\"bingo-grid\">\n");

    for cell in card.rows().iter().flatten() {
        match cell {
            Some(value) => html.push_str(&format!(
                "                <div class=\"bingo-cell empty\">{value}</div>\n"
            )),
            None => html.push_str("                <div class=\"bingo-cell filled\"></div>\n"),
        }
    }

    html.push_str("            </div>\n");
    html.push_str("        </div>\n");
    html
}

/// Number of printed pages needed for `card_count` cards.
#[must_use]
pub fn page_count(card_count: usize) -> usize {
    card_count.div_ceil(CARDS_PER_PAGE)
}

/// Render the complete printable document.
#[must_use]
pub fn render_document(cards: &[Card]) -> String {
    let mut html = String::from(DOCUMENT_HEAD);

    for page in cards.chunks(CARDS_PER_PAGE) {
        html.push_str("    <div class=\"cards-page\">\n");
        html.push_str("    <div class=\"cards-container\">\n");
        for card in page {
            html.push_str(&render_card(card));
        }
        html.push_str("    </div>\n");
        html.push_str("    </div>\n\n");
    }

    html.push_str(DOCUMENT_TAIL);
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> Card {
        Card::from_rows([
            [Some(1), None, Some(20), None, Some(40), None, Some(60), None, Some(80)],
            [None, Some(11), None, Some(31), None, Some(51), None, Some(71), Some(85)],
            [Some(9), Some(19), Some(29), None, None, None, Some(69), None, Some(90)],
        ])
    }

    #[test]
    fn test_card_cells() {
        let html = render_card(&sample_card());

        assert_eq!(html.matches("class=\"bingo-cell").count(), 27);
        assert_eq!(html.matches("bingo-cell empty").count(), 15);
        assert_eq!(html.matches("bingo-cell filled").count(), 12);
        assert!(html.contains("<div class=\"bingo-cell empty\">85</div>"));
        assert!(html.contains("<div class=\"card-header\">LO TO ✦ VSA TET 2026</div>"));
    }

    #[test]
    fn test_cells_in_row_major_order() {
        let html = render_card(&sample_card());
        let first = html.find(">1<").unwrap();
        let twenty = html.find(">20<").unwrap();
        let ninety = html.find(">90<").unwrap();
        assert!(first < twenty && twenty < ninety);
    }

    #[test]
    fn test_pages_group_three_cards() {
        let cards = vec![sample_card(); 7];
        let html = render_document(&cards);

        assert_eq!(html.matches("<div class=\"cards-page\">").count(), 3);
        assert_eq!(html.matches("<div class=\"card\">").count(), 7);
        assert_eq!(page_count(7), 3);
        assert_eq!(page_count(6), 2);
        assert_eq!(page_count(0), 0);
    }

    #[test]
    fn test_document_is_self_contained() {
        let html = render_document(&[sample_card()]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("onclick=\"window.print()\""));
        assert!(html.contains("e.key === 'p'"));
        assert!(!html.contains("<link"));
        assert!(!html.contains("src=\""));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_empty_document_has_no_pages() {
        let html = render_document(&[]);
        assert!(!html.contains("cards-page\">"));
    }
}
