// Encoder identities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identity of an encoder.
///
/// The declaration order is the canonical order in which enabled encoders
/// are consulted by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncoderKey {
    Braille,
    Morse,
    Katakana,
    TrueKana,
    Hiragana,
    Phonetic,
    Roman,
    Hex,
    Cockney,
}

/// Error returned when parsing an unknown encoder key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown encoder key: {0}")]
pub struct ParseKeyError(pub String);

impl EncoderKey {
    /// Every encoder key, in canonical order.
    pub const ALL: [EncoderKey; 9] = [
        EncoderKey::Braille,
        EncoderKey::Morse,
        EncoderKey::Katakana,
        EncoderKey::TrueKana,
        EncoderKey::Hiragana,
        EncoderKey::Phonetic,
        EncoderKey::Roman,
        EncoderKey::Hex,
        EncoderKey::Cockney,
    ];

    /// The key's wire name (used in configuration and dispatch requests).
    pub fn as_str(self) -> &'static str {
        match self {
            EncoderKey::Braille => "braille",
            EncoderKey::Morse => "morse",
            EncoderKey::Katakana => "katakana",
            EncoderKey::TrueKana => "true-kana",
            EncoderKey::Hiragana => "hiragana",
            EncoderKey::Phonetic => "phonetic",
            EncoderKey::Roman => "roman",
            EncoderKey::Hex => "hex",
            EncoderKey::Cockney => "cockney",
        }
    }

    /// CSS class attached to swapped words produced by this encoder.
    pub fn css_class(self) -> &'static str {
        match self {
            EncoderKey::Braille => "braille-unicode",
            EncoderKey::Morse => "morse-code",
            EncoderKey::Katakana => "katakana-text",
            EncoderKey::TrueKana => "true-kana-text",
            EncoderKey::Hiragana => "hiragana-text",
            EncoderKey::Phonetic => "phonetic-kana-text",
            EncoderKey::Roman => "roman-numeral",
            EncoderKey::Hex => "hex-number",
            EncoderKey::Cockney => "cockney-text",
        }
    }
}

impl fmt::Display for EncoderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncoderKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        EncoderKey::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| ParseKeyError(s.to_string()))
    }
}
