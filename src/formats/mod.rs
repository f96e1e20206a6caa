//! Card output formats and the text parser.
//!
//! - `text`: box-drawing layout, also the round-trip wire format
//! - `parse`: text layout back to cards
//! - `json`: lossless card document
//! - `csv`: one row per card
//! - `html`: printable sheet, three cards per page

pub mod csv;
pub mod html;
pub mod json;
pub mod parse;
pub mod text;

pub use json::{from_json, to_json, CardDocument};
pub use parse::parse_cards;
