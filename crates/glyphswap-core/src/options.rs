// Per-encoder option records
//
// Options travel with every can_handle/transform call. Each variant belongs
// to exactly one encoder; encoders match their own variant and fall back to
// defaults for anything else.

use serde::{Deserialize, Serialize};

/// Braille grade: uncontracted (one) or contracted UEB (two).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrailleGrade {
    #[default]
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrailleOptions {
    pub grade: BrailleGrade,
}

/// Output script of the phonetic kana encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KanaScript {
    #[default]
    Hiragana,
    Katakana,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhoneticOptions {
    pub script: KanaScript,
}

/// Which loan-word dictionary entries the true katakana encoder may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrueKanaMode {
    /// Only entries that are direct transliterations of the English word.
    #[default]
    OnlyTransliterations,
    /// Any entry, including loan words with a shifted meaning.
    AllWords,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrueKanaOptions {
    pub mode: TrueKanaMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CockneyOptions {
    /// Emit the full rhyme ("apples and pears") instead of the shortened
    /// slang ("apples").
    pub full_rhyme: bool,
}

/// Options passed to an encoder, tagged by the encoder they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EncoderOptions {
    /// The encoder takes no options.
    #[default]
    None,
    Braille(BrailleOptions),
    Phonetic(PhoneticOptions),
    TrueKana(TrueKanaOptions),
    Cockney(CockneyOptions),
}
