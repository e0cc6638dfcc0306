// Number encoders over delimited numbers
//
// Both numeral encoders accept a single number ("42") or several numbers
// joined by delimiters ("10/20/30", "192.168.1.1"). Only the numeric parts
// are converted; delimiters and anything else are kept as written.

pub mod hex;
pub mod roman;

use std::ops::RangeInclusive;

use glyphswap_core::character::is_numeral_delimiter;
use glyphswap_core::{EncoderKey, EncoderOptions};

use crate::encoder::Encoder;

pub use hex::Hexadecimal;
pub use roman::RomanNumerals;

/// A target numeral system for single numbers.
pub trait NumeralSystem {
    fn key(&self) -> EncoderKey;
    fn title(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// Numbers this system can render.
    fn range(&self) -> RangeInclusive<u32>;
    /// Render a number known to be in range.
    fn convert(&self, n: u32) -> String;
}

// ---------------------------------------------------------------------------
// Delimited-number parsing
// ---------------------------------------------------------------------------

/// Parse a part as a number in range.
///
/// The part must be the canonical decimal form of the number: ASCII digits,
/// no sign, no leading zeros.
pub fn parse_number(part: &str, range: &RangeInclusive<u32>) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if part.len() > 1 && part.starts_with('0') {
        return None;
    }
    part.parse::<u32>().ok().filter(|n| range.contains(n))
}

/// Split a word into delimiter characters and the runs between them,
/// keeping both. Empty runs are dropped.
pub fn split_keeping_delimiters(word: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (idx, c) in word.char_indices() {
        if is_numeral_delimiter(c) {
            if start < idx {
                parts.push(&word[start..idx]);
            }
            let end = idx + c.len_utf8();
            parts.push(&word[idx..end]);
            start = end;
        }
    }
    if start < word.len() {
        parts.push(&word[start..]);
    }
    parts
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn looks_negative(word: &str) -> bool {
    word.strip_prefix('-')
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
}

fn looks_decimal(word: &str) -> bool {
    word.split_once('.')
        .is_some_and(|(int, frac)| all_digits(int) && all_digits(frac))
}

fn looks_thousands_grouped(word: &str) -> bool {
    let mut groups = word.split(',');
    let Some(first) = groups.next() else {
        return false;
    };
    if !all_digits(first) || first.len() > 3 {
        return false;
    }
    let mut rest = 0;
    for group in groups {
        if group.len() != 3 || !all_digits(group) {
            return false;
        }
        rest += 1;
    }
    rest > 0
}

fn looks_padded(word: &str) -> bool {
    let trimmed = word.trim();
    trimmed.len() != word.len() && all_digits(trimmed)
}

/// Whether a word is a number (or delimited numbers) in range.
pub fn is_delimited_number(word: &str, range: &RangeInclusive<u32>) -> bool {
    if parse_number(word, range).is_some() {
        return true;
    }

    // ranges are unsigned, so a leading minus never starts a valid number
    if looks_negative(word)
        || looks_decimal(word)
        || looks_thousands_grouped(word)
        || looks_padded(word)
    {
        return false;
    }

    let parts = split_keeping_delimiters(word);
    if parts.len() <= 1 {
        return false;
    }

    let mut numbers = 0;
    for part in parts {
        if parse_number(part, range).is_some() {
            numbers += 1;
        } else if !part.chars().all(is_numeral_delimiter) {
            return false;
        }
    }
    numbers >= 2
}

/// Convert every numeric part in range, keeping the rest verbatim.
///
/// Returns `None` when no part was converted.
pub fn convert_delimited<S: NumeralSystem + ?Sized>(system: &S, word: &str) -> Option<String> {
    let range = system.range();
    let mut converted = 0;
    let mut out = String::with_capacity(word.len() * 2);
    for part in split_keeping_delimiters(word) {
        match parse_number(part, &range) {
            Some(n) => {
                out.push_str(&system.convert(n));
                converted += 1;
            }
            None => out.push_str(part),
        }
    }
    (converted > 0).then_some(out)
}

// ---------------------------------------------------------------------------
// Encoder
// ---------------------------------------------------------------------------

/// Encoder converting delimited numbers through a numeral system.
#[derive(Debug, Default)]
pub struct DelimitedNumberEncoder<S> {
    system: S,
}

impl<S: NumeralSystem> DelimitedNumberEncoder<S> {
    pub fn new(system: S) -> Self {
        Self { system }
    }
}

impl<S: NumeralSystem> Encoder for DelimitedNumberEncoder<S> {
    fn key(&self) -> EncoderKey {
        self.system.key()
    }

    fn title(&self) -> &'static str {
        self.system.title()
    }

    fn description(&self) -> &'static str {
        self.system.description()
    }

    fn is_neglectable(&self) -> bool {
        true
    }

    fn can_handle(&self, word: &str, _options: &EncoderOptions) -> bool {
        is_delimited_number(word, &self.system.range())
    }

    fn transform(&mut self, word: &str, _options: &EncoderOptions) -> Option<String> {
        convert_delimited(&self.system, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BYTE: RangeInclusive<u32> = 0..=255;

    #[test]
    fn parse_canonical_numbers_only() {
        assert_eq!(parse_number("42", &BYTE), Some(42));
        assert_eq!(parse_number("0", &BYTE), Some(0));
        assert_eq!(parse_number("042", &BYTE), None);
        assert_eq!(parse_number("+4", &BYTE), None);
        assert_eq!(parse_number("256", &BYTE), None);
        assert_eq!(parse_number("99999999999999", &BYTE), None);
        assert_eq!(parse_number("", &BYTE), None);
    }

    #[test]
    fn split_keeps_each_delimiter() {
        assert_eq!(split_keeping_delimiters("10/20/30"), vec!["10", "/", "20", "/", "30"]);
        assert_eq!(split_keeping_delimiters("1--2"), vec!["1", "-", "-", "2"]);
        assert_eq!(split_keeping_delimiters("1\u{2013}2"), vec!["1", "\u{2013}", "2"]);
        assert_eq!(split_keeping_delimiters("abc"), vec!["abc"]);
    }

    #[test]
    fn single_and_delimited_numbers() {
        assert!(is_delimited_number("200", &BYTE));
        assert!(is_delimited_number("192.168.1.1", &BYTE));
        assert!(is_delimited_number("10/20", &BYTE));
        assert!(is_delimited_number("1,2", &BYTE));
    }

    #[test]
    fn rejected_shapes() {
        assert!(!is_delimited_number("1.5", &BYTE));
        assert!(!is_delimited_number("-1", &BYTE));
        assert!(!is_delimited_number("1,000", &BYTE));
        assert!(!is_delimited_number("0xFF", &BYTE));
        assert!(!is_delimited_number("100-abc-200", &BYTE));
        assert!(!is_delimited_number("10/", &BYTE));
        assert!(!is_delimited_number("300/20", &BYTE));
        assert!(!is_delimited_number("hello", &BYTE));
    }

    #[test]
    fn padded_numbers() {
        assert!(looks_padded(" 12"));
        assert!(looks_padded("12 "));
        assert!(!looks_padded("12"));
    }
}
