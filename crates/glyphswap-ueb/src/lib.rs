//! Grade 2 Unified English Braille contraction engine.
//!
//! Contraction happens in two stages. [`tag`] marks the parts of each word
//! that have a contracted form with `{...}` tags, running a fixed sequence of
//! pattern passes. [`cellify`] then maps tags, letters, digits and
//! punctuation to Unicode braille cells. [`contract`] runs both.
//!
//! ```
//! assert_eq!(glyphswap_ueb::tag("shouted"), "{sh}{ou}t{ed}");
//! assert_eq!(glyphswap_ueb::contract("shouted"), "⠩⠳⠞⠫");
//! ```
//!
//! Everything here is pure: no I/O and no shared mutable state.

pub mod cells;
pub mod tables;
pub mod tagger;

pub use cells::{cellify, number, uncontracted};
pub use tagger::{flatten_nested_tags, tag, tag_word};

/// Contract text to grade 2 braille cells.
pub fn contract(text: &str) -> String {
    cellify(&tag(text))
}
