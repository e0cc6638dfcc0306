// Phonetic kana encoder: pronunciation dictionary + phoneme segmentation
//
// A word is known when the pronunciation table has it. Rendering tries every
// transcription and keeps the best-scoring one that maps completely, so a
// known word can still fail to render.

pub mod engine;
pub mod table;

use glyphswap_core::kana::{hiragana_to_katakana, katakana_to_hiragana};
use glyphswap_core::options::{KanaScript, PhoneticOptions};
use glyphswap_core::{EncoderKey, EncoderOptions};

use crate::document::next_document;
use crate::encoder::{Encoder, EncoderError};
use crate::loader::Document;

pub use engine::{Rendering, best_rendering, render_transcription};
pub use table::{PhonemeMapping, PhonemeTable, PronunciationTable};

pub const WORD_TO_IPA: &str = "word-to-ipa";
pub const IPA_TO_KANA: &str = "ipa-to-kana";

#[derive(Debug, Default)]
pub struct PhoneticEncoder {
    pronunciations: PronunciationTable,
    phonemes: PhonemeTable,
}

impl PhoneticEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an encoder from ready tables (no data load needed).
    pub fn with_tables(pronunciations: PronunciationTable, phonemes: PhonemeTable) -> Self {
        Self {
            pronunciations,
            phonemes,
        }
    }

    /// Render a word in the given script, without the encoder contract.
    pub fn render(&self, word: &str, script: KanaScript) -> Option<String> {
        let Some(transcriptions) = self.pronunciations.get(word) else {
            log::debug!("phonetic: no pronunciation for {word:?}");
            return None;
        };
        let Some(best) = best_rendering(&self.phonemes, transcriptions) else {
            log::debug!("phonetic: no transcription of {word:?} maps completely");
            return None;
        };
        if best.text.is_empty() {
            log::debug!("phonetic: {word:?} renders to nothing");
            return None;
        }
        Some(match script {
            KanaScript::Hiragana => katakana_to_hiragana(&best.text),
            KanaScript::Katakana => hiragana_to_katakana(&best.text),
        })
    }
}

fn script_of(options: &EncoderOptions) -> KanaScript {
    match options {
        EncoderOptions::Phonetic(PhoneticOptions { script }) => *script,
        _ => KanaScript::default(),
    }
}

impl Encoder for PhoneticEncoder {
    fn key(&self) -> EncoderKey {
        EncoderKey::Phonetic
    }

    fn title(&self) -> &'static str {
        "Phonetic Kana"
    }

    fn description(&self) -> &'static str {
        "Spells English words in kana from their pronunciation"
    }

    fn is_neglectable(&self) -> bool {
        true
    }

    fn data_sources(&self) -> &'static [&'static str] {
        &[WORD_TO_IPA, IPA_TO_KANA]
    }

    fn install(&mut self, documents: Vec<Document>) -> Result<(), EncoderError> {
        let mut documents = documents.into_iter();
        self.pronunciations =
            PronunciationTable::from_document(next_document(&mut documents, WORD_TO_IPA)?)?;
        self.phonemes = PhonemeTable::from_document(next_document(&mut documents, IPA_TO_KANA)?)?;
        log::debug!(
            "phonetic: {} words, {} phonemes",
            self.pronunciations.len(),
            self.phonemes.len()
        );
        Ok(())
    }

    fn can_handle(&self, word: &str, _options: &EncoderOptions) -> bool {
        self.pronunciations.contains(word)
    }

    fn transform(&mut self, word: &str, options: &EncoderOptions) -> Option<String> {
        self.render(word, script_of(options))
    }
}
