// User-facing swap configuration

use serde::{Deserialize, Serialize};

use crate::key::EncoderKey;
use crate::options::{
    BrailleGrade, BrailleOptions, CockneyOptions, EncoderOptions, KanaScript, PhoneticOptions,
    TrueKanaMode, TrueKanaOptions,
};

/// Seed used when the configuration does not name one.
pub const DEFAULT_SEED: u64 = 0x6c79_7068_7377_6170;

/// Default percentage of words offered to the encoders.
pub const DEFAULT_SWAP_FREQUENCY: f64 = 5.0;

/// Error returned when a configuration document cannot be read.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(String),
}

/// Swap configuration.
///
/// Every field has a default, so an empty JSON object is a valid
/// configuration. Call [`SwapConfig::normalize`] (done automatically by
/// [`SwapConfig::from_json_str`]) before handing it to the scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapConfig {
    /// Master toggle. When false, text passes through untouched.
    pub enabled: bool,
    /// Percentage (0-100) of words that are offered to the encoders.
    pub swap_frequency: f64,
    /// Enabled encoders, in canonical order after normalization.
    pub encoders: Vec<EncoderKey>,
    pub braille_grade: BrailleGrade,
    pub phonetic_script: KanaScript,
    pub true_kana_mode: TrueKanaMode,
    pub cockney_full_rhyme: bool,
    /// Seed for reproducible scheduling.
    pub seed: Option<u64>,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            swap_frequency: DEFAULT_SWAP_FREQUENCY,
            encoders: Vec::new(),
            braille_grade: BrailleGrade::default(),
            phonetic_script: KanaScript::default(),
            true_kana_mode: TrueKanaMode::default(),
            cockney_full_rhyme: false,
            seed: None,
        }
    }
}

impl SwapConfig {
    /// Parse a JSON configuration document and normalize it.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let mut config: SwapConfig =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.normalize();
        Ok(config)
    }

    /// Clamp the frequency into 0-100 and put the enabled encoders into
    /// canonical order without duplicates.
    pub fn normalize(&mut self) {
        self.swap_frequency = clamp_frequency(self.swap_frequency);
        self.encoders.sort();
        self.encoders.dedup();
    }

    /// Builder-style helper: enable the given encoders.
    pub fn with_encoders(mut self, keys: &[EncoderKey]) -> Self {
        self.encoders = keys.to_vec();
        self.normalize();
        self
    }

    /// Builder-style helper: set the swap frequency (clamped).
    pub fn with_frequency(mut self, percent: f64) -> Self {
        self.swap_frequency = clamp_frequency(percent);
        self
    }

    pub fn is_enabled(&self, key: EncoderKey) -> bool {
        self.encoders.contains(&key)
    }

    /// Seed for the scheduler's generator.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// The option record for an encoder key.
    pub fn options_for(&self, key: EncoderKey) -> EncoderOptions {
        match key {
            EncoderKey::Braille => EncoderOptions::Braille(BrailleOptions {
                grade: self.braille_grade,
            }),
            EncoderKey::Phonetic => EncoderOptions::Phonetic(PhoneticOptions {
                script: self.phonetic_script,
            }),
            EncoderKey::TrueKana => EncoderOptions::TrueKana(TrueKanaOptions {
                mode: self.true_kana_mode,
            }),
            EncoderKey::Cockney => EncoderOptions::Cockney(CockneyOptions {
                full_rhyme: self.cockney_full_rhyme,
            }),
            EncoderKey::Morse
            | EncoderKey::Katakana
            | EncoderKey::Hiragana
            | EncoderKey::Roman
            | EncoderKey::Hex => EncoderOptions::None,
        }
    }
}

fn clamp_frequency(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}
