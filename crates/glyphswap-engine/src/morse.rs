// Morse code encoder

use glyphswap_core::character::is_ascii_alphabetic_word;
use glyphswap_core::{EncoderKey, EncoderOptions};

use crate::encoder::Encoder;

/// International Morse code for a letter, ignoring case.
pub fn morse_letter(c: char) -> Option<&'static str> {
    let code = match c.to_ascii_lowercase() {
        'a' => ".-",
        'b' => "-...",
        'c' => "-.-.",
        'd' => "-..",
        'e' => ".",
        'f' => "..-.",
        'g' => "--.",
        'h' => "....",
        'i' => "..",
        'j' => ".---",
        'k' => "-.-",
        'l' => ".-..",
        'm' => "--",
        'n' => "-.",
        'o' => "---",
        'p' => ".--.",
        'q' => "--.-",
        'r' => ".-.",
        's' => "...",
        't' => "-",
        'u' => "..-",
        'v' => "...-",
        'w' => ".--",
        'x' => "-..-",
        'y' => "-.--",
        'z' => "--..",
        _ => return None,
    };
    Some(code)
}

/// Encode a word letter by letter, letters separated by a space.
pub fn to_morse(word: &str) -> Option<String> {
    let codes = word
        .chars()
        .map(morse_letter)
        .collect::<Option<Vec<_>>>()?;
    Some(codes.join(" "))
}

#[derive(Debug, Default)]
pub struct MorseEncoder;

impl MorseEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for MorseEncoder {
    fn key(&self) -> EncoderKey {
        EncoderKey::Morse
    }

    fn title(&self) -> &'static str {
        "English to Morse Code"
    }

    fn description(&self) -> &'static str {
        "Converts English words to Morse Code"
    }

    fn can_handle(&self, word: &str, _options: &EncoderOptions) -> bool {
        is_ascii_alphabetic_word(word)
    }

    fn transform(&mut self, word: &str, _options: &EncoderOptions) -> Option<String> {
        if word.is_empty() {
            return None;
        }
        to_morse(word)
    }
}
