// Roman numerals (1-3999)

use std::ops::RangeInclusive;

use glyphswap_core::EncoderKey;

use super::NumeralSystem;

const ROMAN_SYMBOLS: &[(u32, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Render a number with subtractive Roman numerals. Zero renders empty.
pub fn to_roman(mut n: u32) -> String {
    let mut out = String::new();
    for &(value, symbol) in ROMAN_SYMBOLS {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    out
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RomanNumerals;

impl NumeralSystem for RomanNumerals {
    fn key(&self) -> EncoderKey {
        EncoderKey::Roman
    }

    fn title(&self) -> &'static str {
        "Number to Roman Numeral"
    }

    fn description(&self) -> &'static str {
        "Converts numbers (1-3999) to Roman numerals"
    }

    fn range(&self) -> RangeInclusive<u32> {
        1..=3999
    }

    fn convert(&self, n: u32) -> String {
        to_roman(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::Encoder;
    use crate::numeral::DelimitedNumberEncoder;
    use glyphswap_core::EncoderOptions;

    #[test]
    fn conversions() {
        assert_eq!(to_roman(1), "I");
        assert_eq!(to_roman(4), "IV");
        assert_eq!(to_roman(9), "IX");
        assert_eq!(to_roman(42), "XLII");
        assert_eq!(to_roman(1994), "MCMXCIV");
        assert_eq!(to_roman(3999), "MMMCMXCIX");
    }

    #[test]
    fn encoder_range() {
        let e = DelimitedNumberEncoder::new(RomanNumerals);
        let none = EncoderOptions::None;
        assert!(e.can_handle("1", &none));
        assert!(e.can_handle("3999", &none));
        assert!(!e.can_handle("0", &none));
        assert!(!e.can_handle("4000", &none));
        assert!(!e.can_handle("0042", &none));
        assert!(e.is_neglectable());
    }

    #[test]
    fn encoder_delimited() {
        let mut e = DelimitedNumberEncoder::new(RomanNumerals);
        let none = EncoderOptions::None;
        assert!(e.can_handle("12/25/2024", &none));
        assert_eq!(e.transform("12/25/2024", &none), Some("XII/XXV/MMXXIV".to_string()));
        assert_eq!(e.transform("0-5", &none), Some("0-V".to_string()));
        assert_eq!(e.transform("abc", &none), None);
    }
}
