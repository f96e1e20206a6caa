//! The Lo To card grid.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rows per card.
pub const ROWS: usize = 3;

/// Columns per card.
pub const COLUMNS: usize = 9;

/// Occupied cells per row.
pub const NUMBERS_PER_ROW: usize = 5;

/// A single grid cell: `None` is an empty (shaded) cell.
pub type Cell = Option<u8>;

/// One row of a card.
pub type Row = [Cell; COLUMNS];

/// Inclusive range of numbers allowed in column `col`.
///
/// Column 0 holds 1-9, column 8 holds 80-90, every other column `c`
/// holds `10c..=10c+9`.
///
/// # Panics
///
/// Panics if `col >= COLUMNS`.
#[must_use]
pub fn column_range(col: usize) -> RangeInclusive<u8> {
    assert!(col < COLUMNS, "column {col} out of bounds");
    match col {
        0 => 1..=9,
        8 => 80..=90,
        c => {
            let base = (c * 10) as u8;
            base..=base + 9
        }
    }
}

/// A 3x9 Lo To card.
///
/// Cards are compared, hashed and serialized by their grid content only.
/// Serialized form is a list of 3 rows of 9 slots, `null` for empty cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card {
    rows: [Row; ROWS],
}

impl Card {
    /// Build a card from raw rows. No invariants are checked; see
    /// [`Card::violations`].
    #[must_use]
    pub const fn from_rows(rows: [Row; ROWS]) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row; ROWS] {
        &self.rows
    }

    /// Cell at `(row, col)`, or `None` when out of bounds or empty.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.rows.get(row)?.get(col).copied().flatten()
    }

    /// The cells of column `col`, top to bottom.
    #[must_use]
    pub fn column(&self, col: usize) -> [Cell; ROWS] {
        [self.rows[0][col], self.rows[1][col], self.rows[2][col]]
    }

    /// Every number on the card in row-major order.
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().flatten().filter_map(|cell| *cell)
    }

    /// Count of occupied cells in `row`.
    #[must_use]
    pub fn row_count(&self, row: usize) -> usize {
        self.rows[row].iter().filter(|cell| cell.is_some()).count()
    }

    /// Check every card invariant and list what is broken.
    ///
    /// An empty result means the card is well formed.
    #[must_use]
    pub fn violations(&self) -> Vec<CardViolation> {
        let mut found = Vec::new();

        for row in 0..ROWS {
            let count = self.row_count(row);
            if count != NUMBERS_PER_ROW {
                found.push(CardViolation::RowCount { row, count });
            }
        }

        for (row, cells) in self.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(value) = *cell {
                    if !column_range(col).contains(&value) {
                        found.push(CardViolation::OutOfRange { row, col, value });
                    }
                }
            }
        }

        let mut seen = [false; 91];
        for value in self.numbers() {
            match seen.get_mut(usize::from(value)) {
                Some(slot) if *slot => found.push(CardViolation::Duplicate { value }),
                Some(slot) => *slot = true,
                None => {}
            }
        }

        for col in 0..COLUMNS {
            let values: Vec<u8> = self.column(col).into_iter().flatten().collect();
            if values.windows(2).any(|pair| pair[0] >= pair[1]) {
                found.push(CardViolation::ColumnOrder { col });
            }
        }

        found
    }

    /// True when [`Card::violations`] is empty.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }
}

/// A broken card invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardViolation {
    #[error("row {row} has {count} numbers, expected 5")]
    RowCount { row: usize, count: usize },

    #[error("{value} at row {row}, column {col} is outside the column range")]
    OutOfRange { row: usize, col: usize, value: u8 },

    #[error("{value} appears more than once")]
    Duplicate { value: u8 },

    #[error("column {col} is not in ascending order")]
    ColumnOrder { col: usize },
}
