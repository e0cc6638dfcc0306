// Hexadecimal bytes (0-255)

use std::ops::RangeInclusive;

use glyphswap_core::EncoderKey;

use super::NumeralSystem;

#[derive(Debug, Default, Clone, Copy)]
pub struct Hexadecimal;

impl NumeralSystem for Hexadecimal {
    fn key(&self) -> EncoderKey {
        EncoderKey::Hex
    }

    fn title(&self) -> &'static str {
        "Number to Hexadecimal"
    }

    fn description(&self) -> &'static str {
        "Converts numbers (0-255) to hexadecimal format"
    }

    fn range(&self) -> RangeInclusive<u32> {
        0..=255
    }

    fn convert(&self, n: u32) -> String {
        format!("0x{n:02X}")
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
        assert_eq!(Hexadecimal.convert(0), "0x00");
        assert_eq!(Hexadecimal.convert(10), "0x0A");
        assert_eq!(Hexadecimal.convert(255), "0xFF");
    }

    #[test]
    fn encoder_contract() {
        let mut e = DelimitedNumberEncoder::new(Hexadecimal);
        let none = EncoderOptions::None;
        assert!(e.can_handle("255", &none));
        assert!(e.can_handle("192.168.1.1", &none));
        assert!(!e.can_handle("256", &none));
        assert!(!e.can_handle("1.5", &none));
        assert!(!e.can_handle("-1", &none));
        assert!(!e.can_handle("0xFF", &none));
        assert_eq!(
            e.transform("192.168.1.1", &none),
            Some("0xC0.0xA8.0x01.0x01".to_string())
        );
    }

    #[test]
    fn invalid_parts_are_kept() {
        let mut e = DelimitedNumberEncoder::new(Hexadecimal);
        assert_eq!(
            e.transform("100-abc-200", &EncoderOptions::None),
            Some("0x64-abc-0xC8".to_string())
        );
    }
}
