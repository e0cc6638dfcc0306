// Braille encoder

use glyphswap_core::character::is_ascii_alphabetic_word;
use glyphswap_core::options::{BrailleGrade, BrailleOptions};
use glyphswap_core::{EncoderKey, EncoderOptions};

use crate::encoder::Encoder;

/// Renders ASCII words as Unicode braille, uncontracted (grade 1) or
/// contracted UEB (grade 2).
#[derive(Debug, Default)]
pub struct BrailleEncoder;

impl BrailleEncoder {
    pub fn new() -> Self {
        Self
    }
}

fn grade_of(options: &EncoderOptions) -> BrailleGrade {
    match options {
        EncoderOptions::Braille(BrailleOptions { grade }) => *grade,
        _ => BrailleGrade::default(),
    }
}

impl Encoder for BrailleEncoder {
    fn key(&self) -> EncoderKey {
        EncoderKey::Braille
    }

    fn title(&self) -> &'static str {
        "English to Braille"
    }

    fn description(&self) -> &'static str {
        "Converts English words to Braille"
    }

    fn can_handle(&self, word: &str, _options: &EncoderOptions) -> bool {
        is_ascii_alphabetic_word(word)
    }

    fn transform(&mut self, word: &str, options: &EncoderOptions) -> Option<String> {
        if !is_ascii_alphabetic_word(word) {
            return None;
        }
        Some(match grade_of(options) {
            BrailleGrade::One => glyphswap_ueb::uncontracted(word),
            BrailleGrade::Two => glyphswap_ueb::contract(word),
        })
    }
}
